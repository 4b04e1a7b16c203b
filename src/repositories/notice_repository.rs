use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::notice;
use crate::static_service::DATABASE_CONNECTION;

pub struct NoticeRepository;

impl NoticeRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, notice_id: Uuid) -> Result<Option<notice::Model>> {
        let db = self.get_connection();
        let record = notice::Entity::find_by_id(notice_id).one(db).await?;
        Ok(record)
    }

    pub async fn create(
        &self,
        title: String,
        body: String,
        audience: String,
        posted_by: Uuid,
        is_pinned: bool,
    ) -> Result<notice::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let record = notice::ActiveModel {
            notice_id: Set(Uuid::new_v4()),
            title: Set(title),
            body: Set(body),
            audience: Set(audience),
            posted_by: Set(posted_by),
            is_pinned: Set(is_pinned),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = record.insert(db).await?;
        Ok(result)
    }

    /// Pinned notices first, then newest first.
    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        page_size: u64,
        audience: Option<String>,
    ) -> Result<(Vec<notice::Model>, u64)> {
        let db = self.get_connection();
        let mut query = notice::Entity::find();

        if let Some(audience) = audience {
            query = query.filter(
                notice::Column::Audience
                    .eq(audience)
                    .or(notice::Column::Audience.eq("all")),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_desc(notice::Column::IsPinned)
            .order_by_desc(notice::Column::CreateAt)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn update(&self, notice_id: Uuid, updates: NoticeUpdate) -> Result<notice::Model> {
        let db = self.get_connection();
        let record = notice::Entity::find_by_id(notice_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Notice not found"))?;

        let mut active: notice::ActiveModel = record.into();

        if let Some(title) = updates.title {
            active.title = Set(title);
        }
        if let Some(body) = updates.body {
            active.body = Set(body);
        }
        if let Some(audience) = updates.audience {
            active.audience = Set(audience);
        }
        if let Some(is_pinned) = updates.is_pinned {
            active.is_pinned = Set(is_pinned);
        }

        active.update_at = Set(chrono::Utc::now().naive_utc());

        let result = active.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, notice_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = notice::Entity::delete_by_id(notice_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct NoticeUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub audience: Option<String>,
    pub is_pinned: Option<bool>,
}
