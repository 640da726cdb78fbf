use sqlx::{pool::PoolConnection, PgPool, Postgres};

use super::{initialize_schema, workers};
use crate::models::CreateWorkerInput;

/// Acquires a connection from a `#[sqlx::test]` pool and creates the schema on it.
pub async fn prepared_conn(pool: &PgPool) -> PoolConnection<Postgres> {
    let mut conn = pool.acquire().await.unwrap();
    initialize_schema(&mut conn).await.unwrap();
    conn
}

pub fn worker_input(name: &str, national_id: &str) -> CreateWorkerInput {
    CreateWorkerInput {
        name: name.to_string(),
        national_id: national_id.to_string(),
        email: format!("{}@example.com", national_id),
        address: "Av. Pellegrini 1000".to_string(),
        locality: "Rosario".to_string(),
        latitude: Some(-32.95),
        longitude: Some(-60.65),
        whatsapp_contact: "+5493415550000".to_string(),
        photo_reference: format!("fotos/{}.jpg", national_id),
        criminal_record_status: "Sin antecedentes".to_string(),
    }
}

pub async fn insert_worker(conn: &mut PoolConnection<Postgres>, name: &str, national_id: &str) -> i32 {
    workers::insert_worker(conn, &worker_input(name, national_id))
        .await
        .unwrap()
}

pub async fn insert_service(conn: &mut PoolConnection<Postgres>, title: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO services (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(&mut **conn)
        .await
        .unwrap()
}
