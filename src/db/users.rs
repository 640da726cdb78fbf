use sqlx::{Connection, PgConnection};

use crate::{
    models::{CreateUserInput, User, UserEngagement},
    AppError, AppResult,
};

pub async fn insert_user(conn: &mut PgConnection, input: &CreateUserInput) -> AppResult<i32> {
    sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO users (name, national_id, email, address, locality, whatsapp_contact)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(input.name.trim())
    .bind(input.national_id.trim())
    .bind(input.email.trim())
    .bind(input.address.trim())
    .bind(input.locality.trim())
    .bind(input.whatsapp_contact.trim())
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| {
        AppError::conflict_on_unique(
            e,
            format!("User with national_id {} already exists", input.national_id.trim()),
        )
    })
}

pub async fn list_users(conn: &mut PgConnection) -> AppResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY id"#)
        .fetch_all(&mut *conn)
        .await?;
    Ok(users)
}

async fn ensure_user_exists(conn: &mut PgConnection, user_id: i32) -> AppResult<()> {
    if !super::row_exists(conn, "users", user_id).await? {
        return Err(AppError::NotFound(format!("User {} not found", user_id)));
    }
    Ok(())
}

/// Records that a user contacted the worker behind an engagement.
pub async fn link_engagement(conn: &mut PgConnection, user_id: i32, engagement_id: i32) -> AppResult<()> {
    let mut tx = conn.begin().await?;

    ensure_user_exists(&mut tx, user_id).await?;
    if !super::row_exists(&mut tx, "engagements", engagement_id).await? {
        return Err(AppError::NotFound(format!(
            "Engagement {} not found",
            engagement_id
        )));
    }

    sqlx::query(r#"INSERT INTO user_engagements (user_id, engagement_id) VALUES ($1, $2)"#)
        .bind(user_id)
        .bind(engagement_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::conflict_on_unique(
                e,
                format!("User {} is already linked to engagement {}", user_id, engagement_id),
            )
        })?;

    tx.commit().await?;
    Ok(())
}

pub async fn list_user_engagements(conn: &mut PgConnection, user_id: i32) -> AppResult<Vec<UserEngagement>> {
    ensure_user_exists(conn, user_id).await?;

    let engagements = sqlx::query_as::<_, UserEngagement>(
        r#"
        SELECT
            e.id AS engagement_id,
            s.id AS service_id,
            s.title AS service_title,
            w.id AS worker_id,
            w.name AS worker_name,
            e.hourly_rate,
            ue.created_at AS linked_at
        FROM user_engagements ue
        JOIN engagements e ON e.id = ue.engagement_id
        JOIN services s ON s.id = e.service_id
        JOIN workers w ON w.id = e.worker_id
        WHERE ue.user_id = $1
        ORDER BY ue.created_at, e.id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(engagements)
}
