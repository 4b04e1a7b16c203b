use chrono::NaiveDate;
use clap::Parser;
use once_cell::sync::Lazy;

pub const TEMP_PASSWORD_LENGTH: usize = 10;

/// Local-part prefixes for generated account emails.
pub const STUDENT_EMAIL_PREFIX: &str = "std";
pub const TEACHER_EMAIL_PREFIX: &str = "tch";

/// Teacher employee ids look like TCH250001: prefix, 2-digit year, 4-digit sequence.
pub const TEACHER_EMPLOYEE_ID_PREFIX: &str = "TCH";
pub const TEACHER_EMPLOYEE_ID_SEQ_WIDTH: usize = 4;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    #[clap(long, env)]
    pub admin_email: String,

    #[clap(long, env)]
    pub admin_password: String,

    /// Domain used for auto-generated student/teacher emails.
    #[clap(long, env, default_value = "school.edu")]
    pub email_domain: String,

    /// First month with real fee data. Months starting at or before this date
    /// report zero arrears. Unset means no cutover.
    #[clap(long, env)]
    pub fee_tracking_start: Option<NaiveDate>,

    #[clap(long, env, default_value = "./uploads")]
    pub upload_dir: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}
