use sqlx::{Connection, PgConnection};

use crate::{
    models::{CreateEngagementInput, Engagement},
    AppError, AppResult,
};

/// Creates an engagement after checking both parents exist.
///
/// The id comes from the `engagements` sequence. A second engagement for the
/// same (service, worker) pair is a `Conflict`. Nothing is written on failure.
pub async fn create_engagement(
    conn: &mut PgConnection,
    input: &CreateEngagementInput,
) -> AppResult<Engagement> {
    let mut tx = conn.begin().await?;

    if !super::row_exists(&mut tx, "services", input.service_id).await? {
        return Err(AppError::NotFound(format!(
            "Service {} not found",
            input.service_id
        )));
    }
    super::workers::ensure_worker_exists(&mut tx, input.worker_id).await?;

    let engagement = sqlx::query_as::<_, Engagement>(
        r#"
        INSERT INTO engagements (service_id, worker_id, hourly_rate)
        VALUES ($1, $2, $3)
        RETURNING id, service_id, worker_id, hourly_rate
        "#,
    )
    .bind(input.service_id)
    .bind(input.worker_id)
    .bind(input.hourly_rate)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => AppError::Conflict(format!(
            "Worker {} already offers service {}",
            input.worker_id, input.service_id
        )),
        // A parent deleted between the checks and the insert
        Some(db_err) if db_err.is_foreign_key_violation() => {
            AppError::NotFound("Service or worker not found".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tx.commit().await?;
    Ok(engagement)
}

pub async fn list_engagements(conn: &mut PgConnection) -> AppResult<Vec<Engagement>> {
    let engagements = sqlx::query_as::<_, Engagement>(
        r#"SELECT id, service_id, worker_id, hourly_rate FROM engagements ORDER BY id"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(engagements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_service, insert_worker, prepared_conn};
    use sqlx::PgPool;
    use std::collections::HashSet;

    fn input(service_id: i32, worker_id: i32, hourly_rate: Option<i32>) -> CreateEngagementInput {
        CreateEngagementInput {
            service_id,
            worker_id,
            hourly_rate,
        }
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn missing_worker_is_not_found_and_persists_nothing(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let service_id = insert_service(&mut conn, "Plomero").await;

        let result = create_engagement(&mut conn, &input(service_id, 404, Some(1000))).await;
        assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains("Worker")));

        assert!(list_engagements(&mut conn).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn missing_service_is_not_found(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let worker_id = insert_worker(&mut conn, "Juan", "1").await;

        let result = create_engagement(&mut conn, &input(404, worker_id, None)).await;
        assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg.contains("Service")));
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn duplicate_pair_conflicts(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let service_id = insert_service(&mut conn, "Plomero").await;
        let worker_id = insert_worker(&mut conn, "Juan", "1").await;

        create_engagement(&mut conn, &input(service_id, worker_id, Some(1000)))
            .await
            .unwrap();
        let second = create_engagement(&mut conn, &input(service_id, worker_id, Some(2000))).await;

        assert!(matches!(second, Err(AppError::Conflict(_))));
        let listed = list_engagements(&mut conn).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].hourly_rate, Some(1000));
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn ids_never_collide_for_ambiguous_digit_pairs(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;

        // service 1 / worker 23 and service 12 / worker 3 concatenate to the same digits
        let mut services = Vec::new();
        for n in 1..=12 {
            services.push(insert_service(&mut conn, &format!("Servicio {}", n)).await);
        }
        let mut workers = Vec::new();
        for n in 1..=23 {
            workers.push(insert_worker(&mut conn, &format!("Trabajador {}", n), &n.to_string()).await);
        }
        assert_eq!((services[0], workers[22]), (1, 23));
        assert_eq!((services[11], workers[2]), (12, 3));

        let a = create_engagement(&mut conn, &input(1, 23, None)).await.unwrap();
        let b = create_engagement(&mut conn, &input(12, 3, None)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[sqlx::test(migrations = false)]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn concurrent_creates_get_distinct_ids(pool: PgPool) {
        let mut conn = prepared_conn(&pool).await;
        let mut pairs = Vec::new();
        for n in 0..8 {
            let service_id = insert_service(&mut conn, &format!("Servicio {}", n)).await;
            let worker_id = insert_worker(&mut conn, &format!("Trabajador {}", n), &format!("dni-{}", n)).await;
            pairs.push((service_id, worker_id));
        }
        drop(conn);

        let mut handles = Vec::new();
        for (service_id, worker_id) in pairs {
            let pool = pool.clone();
            handles.push(tokio::spawn(async move {
                let mut conn = pool.acquire().await.unwrap();
                create_engagement(&mut conn, &input(service_id, worker_id, Some(100)))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 8);
    }
}
