//! User database operations
//!
//! The password hash never leaves this module except inside
//! [`UserAuthRow`], which the login handler consumes in place.

use shared::models::{Role, User};
use shared::util::now_millis;
use sqlx::PgPool;

/// User row including the password hash, for credential checks only
#[derive(sqlx::FromRow)]
pub struct UserAuthRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: i64,
    pub password_hash: String,
}

impl UserAuthRow {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserAuthRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, name, email, phone, role, created_at, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    phone: Option<&str>,
    role: Role,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO users (name, email, phone, role, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, phone, role, created_at
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .bind(role)
    .bind(password_hash)
    .bind(now_millis())
    .fetch_one(pool)
    .await
}
