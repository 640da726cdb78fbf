use sqlx::{Connection, PgConnection};

use crate::AppResult;

/// Table names, parents before children.
pub const TABLES: [&str; 7] = [
    "services",
    "workers",
    "engagements",
    "users",
    "user_engagements",
    "opinions",
    "tracking_pings",
];

const CREATE_STATEMENTS: [&str; 9] = [
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        national_id TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        address TEXT NOT NULL,
        locality TEXT NOT NULL,
        latitude DOUBLE PRECISION,
        longitude DOUBLE PRECISION,
        whatsapp_contact TEXT NOT NULL,
        photo_reference TEXT NOT NULL,
        criminal_record_status TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS engagements (
        id SERIAL PRIMARY KEY,
        service_id INTEGER NOT NULL REFERENCES services (id),
        worker_id INTEGER NOT NULL REFERENCES workers (id),
        hourly_rate INTEGER CHECK (hourly_rate >= 0),
        UNIQUE (service_id, worker_id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS engagements_worker_id_idx ON engagements (worker_id)"#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        national_id TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        address TEXT NOT NULL,
        locality TEXT NOT NULL,
        whatsapp_contact TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_engagements (
        user_id INTEGER NOT NULL REFERENCES users (id),
        engagement_id INTEGER NOT NULL REFERENCES engagements (id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        PRIMARY KEY (user_id, engagement_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS opinions (
        id SERIAL PRIMARY KEY,
        worker_id INTEGER NOT NULL REFERENCES workers (id),
        comment TEXT NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS opinions_worker_id_idx ON opinions (worker_id)"#,
    r#"
    CREATE TABLE IF NOT EXISTS tracking_pings (
        id SERIAL PRIMARY KEY,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        device_identifier TEXT NOT NULL,
        latitude TEXT NOT NULL,
        longitude TEXT NOT NULL,
        received_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
];

/// Creates every table and index that is missing. Existing data is left alone.
pub async fn initialize_schema(conn: &mut PgConnection) -> AppResult<()> {
    let mut tx = conn.begin().await?;
    create_tables(&mut tx).await?;
    tx.commit().await?;

    tracing::info!("Schema initialized");
    Ok(())
}

/// Drops all tables and recreates them empty, in one transaction.
pub async fn reset_schema(conn: &mut PgConnection) -> AppResult<()> {
    tracing::warn!("Resetting schema: dropping all tables");

    let mut tx = conn.begin().await?;

    // Children first so no CASCADE is needed
    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(&mut *tx)
            .await?;
    }

    create_tables(&mut tx).await?;
    tx.commit().await?;

    tracing::warn!("Schema reset complete");
    Ok(())
}

async fn create_tables(conn: &mut PgConnection) -> AppResult<()> {
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}
