use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{student, user};
use crate::static_service::DATABASE_CONNECTION;

pub struct StudentRepository;

impl StudentRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<(student::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let record = student::Entity::find_by_id(student_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let record = student::Entity::find()
            .filter(student::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn roll_number_exists(&self, roll_number: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64> {
        let db = self.get_connection();
        let count = student::Entity::find().count(db).await?;
        Ok(count)
    }

    /// Generic over the connection so the import pipeline can create the
    /// profile in the same transaction as its account.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_in<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        roll_number: String,
        class_name: String,
        section: String,
        gender: String,
        father_name: String,
        mother_name: String,
        contact_number: String,
        address: Option<String>,
        monthly_fee: Decimal,
        admission_date: NaiveDate,
    ) -> Result<student::Model> {
        let now = chrono::Utc::now().naive_utc();
        let profile = student::ActiveModel {
            student_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            roll_number: Set(roll_number),
            class_name: Set(class_name),
            section: Set(section),
            gender: Set(gender),
            father_name: Set(father_name),
            mother_name: Set(mother_name),
            contact_number: Set(contact_number),
            address: Set(address),
            monthly_fee: Set(monthly_fee),
            admission_date: Set(admission_date),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = profile.insert(db).await?;
        Ok(result)
    }

    pub async fn find_all_with_pagination(
        &self,
        page: u64,
        page_size: u64,
        class_filter: Option<String>,
        search: Option<String>,
    ) -> Result<(Vec<(student::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = student::Entity::find().find_also_related(user::Entity);

        if let Some(class_name) = class_filter {
            query = query.filter(student::Column::ClassName.eq(class_name));
        }

        if let Some(search_term) = search {
            let pattern = format!("%{}%", search_term);
            query = query.filter(
                student::Column::RollNumber
                    .like(&pattern)
                    .or(user::Column::FirstName.like(&pattern))
                    .or(user::Column::LastName.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_asc(student::Column::RollNumber)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn update(&self, student_id: Uuid, updates: StudentUpdate) -> Result<student::Model> {
        let db = self.get_connection();
        let record = student::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Student not found"))?;

        let mut active: student::ActiveModel = record.into();

        if let Some(class_name) = updates.class_name {
            active.class_name = Set(class_name);
        }
        if let Some(section) = updates.section {
            active.section = Set(section);
        }
        if let Some(contact_number) = updates.contact_number {
            active.contact_number = Set(contact_number);
        }
        if let Some(address) = updates.address {
            active.address = Set(Some(address));
        }
        if let Some(monthly_fee) = updates.monthly_fee {
            active.monthly_fee = Set(monthly_fee);
        }

        active.update_at = Set(chrono::Utc::now().naive_utc());

        let result = active.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, student_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = student::Entity::delete_by_id(student_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct StudentUpdate {
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub monthly_fee: Option<Decimal>,
}
