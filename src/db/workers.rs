use sqlx::PgConnection;

use crate::{
    models::{CreateWorkerInput, Worker, WorkerSummary},
    AppError, AppResult,
};

/// Inserts a worker and returns its id. A taken `national_id` is a `Conflict`.
pub async fn insert_worker(conn: &mut PgConnection, input: &CreateWorkerInput) -> AppResult<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO workers (
            name, national_id, email, address, locality,
            latitude, longitude, whatsapp_contact, photo_reference, criminal_record_status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id
        "#,
    )
    .bind(input.name.trim())
    .bind(input.national_id.trim())
    .bind(input.email.trim())
    .bind(input.address.trim())
    .bind(input.locality.trim())
    .bind(input.latitude)
    .bind(input.longitude)
    .bind(input.whatsapp_contact.trim())
    .bind(input.photo_reference.trim())
    .bind(input.criminal_record_status.trim())
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(
            e,
            format!("Worker with national_id {} already exists", input.national_id.trim()),
        )
    })
}

pub async fn list_workers(conn: &mut PgConnection) -> AppResult<Vec<Worker>> {
    let workers = sqlx::query_as::<_, Worker>(r#"SELECT * FROM workers ORDER BY id"#)
        .fetch_all(&mut *conn)
        .await?;
    Ok(workers)
}

pub async fn fetch_worker(conn: &mut PgConnection, worker_id: i32) -> AppResult<Worker> {
    sqlx::query_as::<_, Worker>(r#"SELECT * FROM workers WHERE id = $1"#)
        .bind(worker_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Worker {} not found", worker_id)))
}

pub async fn ensure_worker_exists(conn: &mut PgConnection, worker_id: i32) -> AppResult<()> {
    if !super::row_exists(conn, "workers", worker_id).await? {
        return Err(AppError::NotFound(format!("Worker {} not found", worker_id)));
    }
    Ok(())
}

/// Workers with an engagement for the service titled exactly `title`.
pub async fn find_workers_by_service_title(
    conn: &mut PgConnection,
    title: &str,
) -> AppResult<Vec<WorkerSummary>> {
    let workers = sqlx::query_as::<_, WorkerSummary>(
        r#"
        SELECT
            w.id,
            w.name,
            w.criminal_record_status,
            w.photo_reference,
            w.whatsapp_contact,
            w.latitude,
            w.longitude,
            s.title AS service_title,
            e.hourly_rate
        FROM workers w
        JOIN engagements e ON e.worker_id = w.id
        JOIN services s ON s.id = e.service_id
        WHERE s.title = $1
        ORDER BY w.id
        "#,
    )
    .bind(title)
    .fetch_all(&mut *conn)
    .await?;

    Ok(workers)
}
