use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::entities::import_history;
use crate::entities::sea_orm_active_enums::{ImportStatusEnum, RoleEnum};
use crate::static_service::DATABASE_CONNECTION;

pub struct ImportHistoryRepository;

impl ImportHistoryRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Writes the audit record for one import run. Written exactly once per
    /// run that got past parsing; never updated.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_type: RoleEnum,
        file_name: String,
        original_file_name: String,
        uploaded_by: Uuid,
        status: ImportStatusEnum,
        total_records: i32,
        success_count: i32,
        error_count: i32,
        errors: serde_json::Value,
    ) -> Result<import_history::Model> {
        let db = self.get_connection();
        let record = import_history::ActiveModel {
            import_history_id: Set(Uuid::new_v4()),
            user_type: Set(user_type),
            file_name: Set(file_name),
            original_file_name: Set(original_file_name),
            uploaded_by: Set(uploaded_by),
            status: Set(status),
            total_records: Set(total_records),
            success_count: Set(success_count),
            error_count: Set(error_count),
            errors: Set(errors),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let result = record.insert(db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<import_history::Model>, u64)> {
        let db = self.get_connection();
        let query = import_history::Entity::find();

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_desc(import_history::Column::CreatedAt)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn find_latest(&self) -> Result<Option<import_history::Model>> {
        let db = self.get_connection();
        let record = import_history::Entity::find()
            .order_by_desc(import_history::Column::CreatedAt)
            .one(db)
            .await?;
        Ok(record)
    }
}
