use http::StatusCode;

use crate::extractor::{Claims, UserRole};

/// Admin and principal manage people, fees and notices.
pub fn is_admin_or_principal(claims: &Claims) -> Result<(), (StatusCode, String)> {
    match claims.role {
        UserRole::Admin | UserRole::Principal => Ok(()),
        _ => Err((
            StatusCode::FORBIDDEN,
            "Only admin or principal can perform this action".to_string(),
        )),
    }
}

/// Bulk imports are restricted to admins.
pub fn is_admin(claims: &Claims) -> Result<(), (StatusCode, String)> {
    if claims.role == UserRole::Admin {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            "Only admin can perform this action".to_string(),
        ))
    }
}

/// Staff-facing read endpoints: anyone but students.
pub fn is_school_staff(claims: &Claims) -> Result<(), (StatusCode, String)> {
    match claims.role {
        UserRole::Student => Err((
            StatusCode::FORBIDDEN,
            "Students cannot access this resource".to_string(),
        )),
        _ => Ok(()),
    }
}
