//! Per-role import configuration: required columns, email policy and
//! identity generation. One descriptor per user type replaces four
//! near-identical pipelines.

use chrono::Datelike;

use crate::config::{
    STUDENT_EMAIL_PREFIX, TEACHER_EMAIL_PREFIX, TEACHER_EMPLOYEE_ID_PREFIX,
    TEACHER_EMPLOYEE_ID_SEQ_WIDTH,
};
use crate::entities::sea_orm_active_enums::RoleEnum;

/// Which profile table an import run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Student,
    Teacher,
    AdminStaff,
    SupportStaff,
}

/// How the pipeline resolves an account email for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPolicy {
    /// Built from the cleaned name with this prefix. A supplied address is
    /// honored only when it already equals the synthetic form (students) or
    /// ignored outright (teachers); either way the result is the same local
    /// part, with a numeric suffix appended while the address is taken.
    Generated { prefix: &'static str },
    /// Must be supplied, well-formed and unused; duplicates fail the row.
    Required,
}

impl ImportKind {
    pub fn role(&self) -> RoleEnum {
        match self {
            ImportKind::Student => RoleEnum::Student,
            ImportKind::Teacher => RoleEnum::Teacher,
            ImportKind::AdminStaff => RoleEnum::AdminStaff,
            ImportKind::SupportStaff => RoleEnum::SupportStaff,
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            ImportKind::Student => &[
                "firstName",
                "lastName",
                "rollNumber",
                "class",
                "section",
                "gender",
                "monthlyFee",
                "fatherName",
                "motherName",
                "contactNumber",
            ],
            ImportKind::Teacher => &[
                "firstName",
                "lastName",
                "qualification",
                "subjects",
                "classes",
                "salary",
                "contactNumber",
            ],
            ImportKind::AdminStaff => &[
                "firstName",
                "lastName",
                "email",
                "employeeId",
                "department",
                "designation",
                "salary",
                "contactNumber",
            ],
            ImportKind::SupportStaff => &[
                "firstName",
                "lastName",
                "email",
                "employeeId",
                "staffRole",
                "salary",
                "contactNumber",
            ],
        }
    }

    pub fn email_policy(&self) -> EmailPolicy {
        match self {
            ImportKind::Student => EmailPolicy::Generated {
                prefix: STUDENT_EMAIL_PREFIX,
            },
            ImportKind::Teacher => EmailPolicy::Generated {
                prefix: TEACHER_EMAIL_PREFIX,
            },
            ImportKind::AdminStaff | ImportKind::SupportStaff => EmailPolicy::Required,
        }
    }
}

/// Lowercased, alphanumeric-only rendering of a name part.
pub fn clean_name_part(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// `<prefix><first><last>@<domain>`, names cleaned.
pub fn synthetic_email(prefix: &str, first: &str, last: &str, domain: &str) -> String {
    format!(
        "{}{}{}@{}",
        prefix,
        clean_name_part(first),
        clean_name_part(last),
        domain
    )
}

/// Collision variant: numeric suffix on the local part.
pub fn synthetic_email_with_suffix(
    prefix: &str,
    first: &str,
    last: &str,
    suffix: u32,
    domain: &str,
) -> String {
    format!(
        "{}{}{}{}@{}",
        prefix,
        clean_name_part(first),
        clean_name_part(last),
        suffix,
        domain
    )
}

/// Shape check for user-supplied addresses: `local@domain.tld`, no
/// whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// `TCH<2-digit year><zero-padded sequence>`.
pub fn teacher_employee_id(year: i32, sequence: u64) -> String {
    format!(
        "{}{:02}{:0width$}",
        TEACHER_EMPLOYEE_ID_PREFIX,
        year.rem_euclid(100),
        sequence,
        width = TEACHER_EMPLOYEE_ID_SEQ_WIDTH
    )
}

/// Sequence basis for a run starting now.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_cleaned_to_lowercase_alphanumerics() {
        assert_eq!(clean_name_part("O'Brien"), "obrien");
        assert_eq!(clean_name_part("  Smith "), "smith");
        assert_eq!(clean_name_part("Anne-Marie"), "annemarie");
    }

    #[test]
    fn synthetic_emails_follow_the_pattern() {
        assert_eq!(
            synthetic_email("std", "O'Brien", "Smith", "school.edu"),
            "stdobriensmith@school.edu"
        );
        assert_eq!(
            synthetic_email_with_suffix("std", "O'Brien", "Smith", 1, "school.edu"),
            "stdobriensmith1@school.edu"
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("jane.roe@school.edu"));
        assert!(!is_valid_email("jane.roe@school"));
        assert!(!is_valid_email("jane roe@school.edu"));
        assert!(!is_valid_email("@school.edu"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@a@b.com"));
    }

    #[test]
    fn teacher_employee_ids_are_zero_padded() {
        assert_eq!(teacher_employee_id(2025, 1), "TCH250001");
        assert_eq!(teacher_employee_id(2026, 123), "TCH260123");
    }

    #[test]
    fn required_fields_differ_per_role() {
        assert!(ImportKind::Student.required_fields().contains(&"rollNumber"));
        assert!(ImportKind::Teacher.required_fields().contains(&"subjects"));
        assert!(!ImportKind::Teacher.required_fields().contains(&"email"));
        assert!(ImportKind::AdminStaff.required_fields().contains(&"email"));
        assert!(
            ImportKind::SupportStaff
                .required_fields()
                .contains(&"staffRole")
        );
    }
}
