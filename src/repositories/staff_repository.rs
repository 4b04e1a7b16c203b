use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::prelude::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde_json::json;
use uuid::Uuid;

use crate::entities::{admin_staff, support_staff, user};
use crate::static_service::DATABASE_CONNECTION;

/// Repository over the two staff profile tables. Employee-id uniqueness is
/// scoped per staff type, so each table carries its own constraint and its
/// own existence check.
pub struct StaffRepository;

impl StaffRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn admin_employee_id_exists(&self, employee_id: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = admin_staff::Entity::find()
            .filter(admin_staff::Column::EmployeeId.eq(employee_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn support_employee_id_exists(&self, employee_id: &str) -> Result<bool> {
        let db = self.get_connection();
        let count = support_staff::Entity::find()
            .filter(support_staff::Column::EmployeeId.eq(employee_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn count_admin(&self) -> Result<u64> {
        let db = self.get_connection();
        Ok(admin_staff::Entity::find().count(db).await?)
    }

    pub async fn count_support(&self) -> Result<u64> {
        let db = self.get_connection();
        Ok(support_staff::Entity::find().count(db).await?)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_admin_in<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        employee_id: String,
        department: String,
        designation: String,
        salary: Decimal,
        contact_number: String,
        responsibilities: Vec<String>,
        joining_date: NaiveDate,
    ) -> Result<admin_staff::Model> {
        let now = chrono::Utc::now().naive_utc();
        let profile = admin_staff::ActiveModel {
            staff_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            employee_id: Set(employee_id),
            department: Set(department),
            designation: Set(designation),
            salary: Set(salary),
            contact_number: Set(contact_number),
            responsibilities: Set(json!(responsibilities)),
            joining_date: Set(joining_date),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = profile.insert(db).await?;
        Ok(result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_support_in<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: Uuid,
        employee_id: String,
        staff_role: String,
        salary: Decimal,
        contact_number: String,
        duties: Vec<String>,
        working_days: Vec<String>,
        joining_date: NaiveDate,
    ) -> Result<support_staff::Model> {
        let now = chrono::Utc::now().naive_utc();
        let profile = support_staff::ActiveModel {
            staff_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            employee_id: Set(employee_id),
            staff_role: Set(staff_role),
            salary: Set(salary),
            contact_number: Set(contact_number),
            duties: Set(json!(duties)),
            working_days: Set(json!(working_days)),
            joining_date: Set(joining_date),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = profile.insert(db).await?;
        Ok(result)
    }

    pub async fn find_admin_by_id(
        &self,
        staff_id: Uuid,
    ) -> Result<Option<(admin_staff::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let record = admin_staff::Entity::find_by_id(staff_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn find_support_by_id(
        &self,
        staff_id: Uuid,
    ) -> Result<Option<(support_staff::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let record = support_staff::Entity::find_by_id(staff_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(record)
    }

    pub async fn find_all_admin_with_pagination(
        &self,
        page: u64,
        page_size: u64,
        search: Option<String>,
    ) -> Result<(Vec<(admin_staff::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = admin_staff::Entity::find().find_also_related(user::Entity);

        if let Some(search_term) = search {
            let pattern = format!("%{}%", search_term);
            query = query.filter(
                admin_staff::Column::EmployeeId
                    .like(&pattern)
                    .or(admin_staff::Column::Department.like(&pattern))
                    .or(user::Column::FirstName.like(&pattern))
                    .or(user::Column::LastName.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_asc(admin_staff::Column::EmployeeId)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn find_all_support_with_pagination(
        &self,
        page: u64,
        page_size: u64,
        search: Option<String>,
    ) -> Result<(Vec<(support_staff::Model, Option<user::Model>)>, u64)> {
        let db = self.get_connection();
        let mut query = support_staff::Entity::find().find_also_related(user::Entity);

        if let Some(search_term) = search {
            let pattern = format!("%{}%", search_term);
            query = query.filter(
                support_staff::Column::EmployeeId
                    .like(&pattern)
                    .or(support_staff::Column::StaffRole.like(&pattern))
                    .or(user::Column::FirstName.like(&pattern))
                    .or(user::Column::LastName.like(&pattern)),
            );
        }

        let total = query.clone().count(db).await?;

        let offset = (page.saturating_sub(1)) * page_size;
        let records = query
            .order_by_asc(support_staff::Column::EmployeeId)
            .limit(page_size)
            .offset(offset)
            .all(db)
            .await?;

        Ok((records, total))
    }

    pub async fn delete_admin(&self, staff_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = admin_staff::Entity::delete_by_id(staff_id).exec(db).await?;
        Ok(result)
    }

    pub async fn delete_support(&self, staff_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = support_staff::Entity::delete_by_id(staff_id).exec(db).await?;
        Ok(result)
    }
}
