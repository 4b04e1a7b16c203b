pub mod fees;
pub mod health;
pub mod imports;
pub mod notices;
pub mod staff;
pub mod stats;
pub mod students;
pub mod teachers;
