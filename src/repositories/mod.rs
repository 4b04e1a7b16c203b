pub mod fee_repository;
pub mod import_history_repository;
pub mod notice_repository;
pub mod staff_repository;
pub mod student_repository;
pub mod teacher_repository;
pub mod user_repository;

pub use fee_repository::FeeRepository;
pub use import_history_repository::ImportHistoryRepository;
pub use notice_repository::{NoticeRepository, NoticeUpdate};
pub use staff_repository::StaffRepository;
pub use student_repository::{StudentRepository, StudentUpdate};
pub use teacher_repository::{TeacherRepository, TeacherUpdate};
pub use user_repository::{UserRepository, UserUpdate};
