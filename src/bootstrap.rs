use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::{sea_orm_active_enums::RoleEnum, user};

/// Creates the default admin account on first startup. Idempotent: a second
/// run finds the existing account and leaves it alone.
pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let admin_email: &str = &APP_CONFIG.admin_email;
    let default_password: &str = &APP_CONFIG.admin_password;

    let existing_admin = user::Entity::find()
        .filter(user::Column::Email.eq(admin_email))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let hashed_password = bcrypt::hash(default_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash admin password")?;

    let now = Utc::now().naive_utc();

    let admin_user = user::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        first_name: Set("System".to_string()),
        last_name: Set("Administrator".to_string()),
        email: Set(admin_email.to_string()),
        password: Set(hashed_password),
        role: Set(RoleEnum::Admin),
        is_approved: Set(true),
        is_active: Set(true),
        created_by: Set(None),
        create_at: Set(now),
        update_at: Set(now),
        deleted_at: Set(None),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("Admin user created successfully");
    tracing::info!("  Email: {}", admin_email);
    tracing::warn!("Change the default admin password after first login!");

    Ok(())
}
