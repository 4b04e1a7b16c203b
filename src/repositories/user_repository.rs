use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::static_service::DATABASE_CONNECTION;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let account = user::Entity::find_by_id(user_id)
            .filter(user::Column::DeletedAt.is_null())
            .one(db)
            .await?;
        Ok(account)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let account = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(db)
            .await?;
        Ok(account)
    }

    /// Soft-deleted accounts still hold their email, so they count too:
    /// the column carries a unique constraint.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count_by_role(&self, role: RoleEnum) -> Result<u64> {
        let db = self.get_connection();
        let count = user::Entity::find()
            .filter(user::Column::Role.eq(role))
            .filter(user::Column::DeletedAt.is_null())
            .count(db)
            .await?;
        Ok(count)
    }

    /// Generic over the connection so the import pipeline can create the
    /// account inside the same transaction as its profile.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_in<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        first_name: String,
        last_name: String,
        email: String,
        hashed_password: String,
        role: RoleEnum,
        created_by: Option<Uuid>,
    ) -> Result<user::Model> {
        let now = chrono::Utc::now().naive_utc();
        let account = user::ActiveModel {
            user_id: Set(user_id),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            password: Set(hashed_password),
            role: Set(role),
            // Imported accounts come in pre-approved and active.
            is_approved: Set(true),
            is_active: Set(true),
            created_by: Set(created_by),
            create_at: Set(now),
            update_at: Set(now),
            deleted_at: Set(None),
        };

        let result = account.insert(db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        page_size: u64,
        role_filter: Option<RoleEnum>,
        search: Option<String>,
    ) -> Result<(Vec<user::Model>, u64)> {
        let db = self.get_connection();
        let mut query = user::Entity::find().filter(user::Column::DeletedAt.is_null());

        if let Some(role) = role_filter {
            query = query.filter(user::Column::Role.eq(role));
        }

        if let Some(search_term) = search {
            let pattern = format!("%{}%", search_term);
            query = query.filter(
                user::Column::FirstName
                    .like(&pattern)
                    .or(user::Column::LastName.like(&pattern))
                    .or(user::Column::Email.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let accounts = query
            .order_by_desc(user::Column::CreateAt)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((accounts, total))
    }

    pub async fn update(&self, user_id: Uuid, updates: UserUpdate) -> Result<user::Model> {
        let account = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found"))?;
        let db = self.get_connection();

        let mut active: user::ActiveModel = account.into();

        if let Some(first_name) = updates.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = updates.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(email) = updates.email {
            active.email = Set(email);
        }
        if let Some(is_approved) = updates.is_approved {
            active.is_approved = Set(is_approved);
        }
        if let Some(is_active) = updates.is_active {
            active.is_active = Set(is_active);
        }

        active.update_at = Set(chrono::Utc::now().naive_utc());

        let result = active.update(db).await?;
        Ok(result)
    }

    /// Soft delete: the row keeps its email so the unique constraint still
    /// rejects re-imports of the same address.
    pub async fn soft_delete(&self, user_id: Uuid) -> Result<user::Model> {
        let db = self.get_connection();
        let account = user::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found"))?;

        let now = chrono::Utc::now().naive_utc();
        let mut active: user::ActiveModel = account.into();
        active.deleted_at = Set(Some(now));
        active.is_active = Set(false);
        active.update_at = Set(now);

        let result = active.update(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_approved: Option<bool>,
    pub is_active: Option<bool>,
}
