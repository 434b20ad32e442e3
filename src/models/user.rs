use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Minimal profile echoed back at login. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

// Fields default to empty when the key is absent, so a missing field lands
// in the validator (400 with a message) instead of a body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "All fields are required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@example.com");
    }

    #[test]
    fn register_request_rejects_empty_fields() {
        let body = RegisterRequest {
            name: String::new(),
            email: "ana@example.com".into(),
            password: "hunter22".into(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn login_request_with_absent_key_still_deserializes() {
        let body: LoginRequest = serde_json::from_str(r#"{"email":"ana@example.com"}"#).unwrap();
        assert!(body.password.is_empty());
        assert!(body.validate().is_err());
    }

    #[test]
    fn register_request_with_absent_keys_fails_validation() {
        let body: RegisterRequest = serde_json::from_str(r#"{"email":"ana@example.com"}"#).unwrap();
        let err = body.validate().unwrap_err().to_string();
        assert!(err.contains("All fields are required"));
    }

    #[test]
    fn register_request_rejects_bad_email() {
        let body = RegisterRequest {
            name: "Ana".into(),
            email: "not-an-email".into(),
            password: "hunter22".into(),
        };
        assert!(body.validate().is_err());
    }
}
