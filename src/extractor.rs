use axum::extract::FromRequestParts;
use http::{StatusCode, request::Parts};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and role of the authenticated caller, as established by the
/// fronting gateway. The gateway strips these headers from external traffic
/// and re-injects them after token verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Principal,
    Teacher,
    Student,
    AdminStaff,
    SupportStaff,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "principal" => Some(UserRole::Principal),
            "teacher" => Some(UserRole::Teacher),
            "student" => Some(UserRole::Student),
            "admin_staff" => Some(UserRole::AdminStaff),
            "support_staff" => Some(UserRole::SupportStaff),
            _ => None,
        }
    }
}

pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        };

        let user_id = header("x-user-id")
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Missing x-user-id header".to_string()))?;
        let user_id = Uuid::parse_str(&user_id)
            .map_err(|_| (StatusCode::UNAUTHORIZED, "Invalid x-user-id header".to_string()))?;

        let role = header("x-user-role")
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, "Missing x-user-role header".to_string()))?;
        let role = UserRole::parse(&role)
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, format!("Unknown role: {}", role)))?;

        Ok(AuthClaims(Claims { user_id, role }))
    }
}
