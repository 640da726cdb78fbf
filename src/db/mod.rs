pub mod engagements;
pub mod opinions;
pub mod pool;
pub mod schema;
pub mod services;
pub mod tracking;
pub mod users;
pub mod workers;

#[cfg(test)]
pub mod test_support;

pub use pool::create_pool;
pub use schema::{initialize_schema, reset_schema};

use sqlx::PgConnection;

use crate::AppResult;

/// `SELECT EXISTS` over a primary key. `table` must be one of the schema's table names.
pub(crate) async fn row_exists(conn: &mut PgConnection, table: &str, id: i32) -> AppResult<bool> {
    debug_assert!(schema::TABLES.contains(&table));

    let exists: bool = sqlx::query_scalar(&format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)", table))
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(exists)
}
