use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde_json::json;
use uuid::Uuid;

use crate::entities::{teacher, user};
use crate::static_service::DATABASE_CONNECTION;

pub struct TeacherRepository;

impl TeacherRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(
        &self,
        teacher_id: Uuid,
    ) -> Result<Option<(teacher::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let record = teacher::Entity::find_by_id(teacher_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn employee_id_exists(&self, employee_id: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = teacher::Entity::find()
            .filter(teacher::Column::EmployeeId.eq(employee_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Basis for generated employee-id sequences; taken once per import run.
    pub async fn count(&self) -> Result<u64> {
        let db = self.get_connection();
        let count = teacher::Entity::find().count(db).await?;
        Ok(count)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_in<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        employee_id: String,
        qualification: String,
        subjects: Vec<String>,
        classes: Vec<String>,
        experience_years: i32,
        salary: Decimal,
        contact_number: String,
        joining_date: NaiveDate,
    ) -> Result<teacher::Model> {
        let now = chrono::Utc::now().naive_utc();
        let profile = teacher::ActiveModel {
            teacher_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            employee_id: Set(employee_id),
            qualification: Set(qualification),
            subjects: Set(json!(subjects)),
            classes: Set(json!(classes)),
            experience_years: Set(experience_years),
            salary: Set(salary),
            contact_number: Set(contact_number),
            joining_date: Set(joining_date),
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
        search: Option<String>,
    ) -> Result<(Vec<(teacher::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = teacher::Entity::find().find_also_related(user::Entity);

        if let Some(search_term) = search {
            let pattern = format!("%{}%", search_term);
            query = query.filter(
                teacher::Column::EmployeeId
                    .like(&pattern)
                    .or(user::Column::FirstName.like(&pattern))
                    .or(user::Column::LastName.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_asc(teacher::Column::EmployeeId)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn update(&self, teacher_id: Uuid, updates: TeacherUpdate) -> Result<teacher::Model> {
        let db = self.get_connection();
        let record = teacher::Entity::find_by_id(teacher_id)
            .one(db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Teacher not found"))?;

        let mut active: teacher::ActiveModel = record.into();

        if let Some(qualification) = updates.qualification {
            active.qualification = Set(qualification);
        }
        if let Some(subjects) = updates.subjects {
            active.subjects = Set(json!(subjects));
        }
        if let Some(classes) = updates.classes {
            active.classes = Set(json!(classes));
        }
        if let Some(experience_years) = updates.experience_years {
            active.experience_years = Set(experience_years);
        }
        if let Some(salary) = updates.salary {
            active.salary = Set(salary);
        }
        if let Some(contact_number) = updates.contact_number {
            active.contact_number = Set(contact_number);
        }

        active.update_at = Set(chrono::Utc::now().naive_utc());

        let result = active.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, teacher_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = teacher::Entity::delete_by_id(teacher_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct TeacherUpdate {
    pub qualification: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub classes: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub salary: Option<Decimal>,
    pub contact_number: Option<String>,
}
