//! Bootstrap an admin account.
//!
//! Reads `ADMIN_NAME`, `ADMIN_EMAIL` and `ADMIN_PASSWORD` (plus
//! `DATABASE_URL`) from the environment or `.env`. Does nothing if an
//! account with that email already exists.

use portal_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use portal_core::accounts::{validate_email, DEFAULT_INSTITUTION_DOMAIN};
use portal_core::roles::Role;
use portal_db::models::user::CreateUser;
use portal_db::repositories::UserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_admin=info,portal_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".into());
    let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
    let password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

    validate_email(&email, Role::Admin, DEFAULT_INSTITUTION_DOMAIN)
        .unwrap_or_else(|e| panic!("ADMIN_EMAIL is invalid: {e}"));
    validate_password_strength(&password, MIN_PASSWORD_LENGTH)
        .unwrap_or_else(|e| panic!("ADMIN_PASSWORD is invalid: {e}"));

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = portal_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    portal_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if let Some(existing) = UserRepo::find_by_email(&pool, &email)
        .await
        .expect("Failed to look up admin email")
    {
        tracing::info!(user_id = existing.id, role = %existing.role, %email, "Account already exists, skipping");
        return;
    }

    let password_hash = hash_password(&password).expect("Failed to hash password");
    let admin = UserRepo::create(
        &pool,
        &CreateUser {
            name,
            email,
            password_hash,
            role: Role::Admin,
        },
    )
    .await
    .expect("Failed to create admin user");

    tracing::info!(user_id = admin.id, email = %admin.email, "Admin account created");
}
