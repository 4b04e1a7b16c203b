pub mod admin_staff;
pub mod fee;
pub mod import_history;
pub mod notice;
pub mod sea_orm_active_enums;
pub mod student;
pub mod support_staff;
pub mod teacher;
pub mod user;
