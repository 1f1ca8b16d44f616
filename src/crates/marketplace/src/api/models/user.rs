//! User API models and DTOs

use serde::{Deserialize, Serialize};

use crate::db::models::{NewUser, User};

/// Body of `POST /users` and `PUT /users/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    /// Explicit primary key (optional)
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl UserPayload {
    /// Split into the optional id and the column values
    pub fn into_parts(self) -> (Option<i64>, NewUser) {
        (
            self.id,
            NewUser {
                first_name: self.first_name,
                last_name: self.last_name,
                age: self.age,
                email: self.email,
                role: self.role,
                phone: self.phone,
            },
        )
    }
}

/// User response for API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl UserResponse {
    /// Create a UserResponse from database User model
    pub fn from_db_user(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            email: user.email,
            role: user.role,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_id() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"first_name":"Ivan","last_name":"Petrov","age":31,
                "email":"ivan@example.com","role":"executor","phone":"123"}"#,
        )
        .unwrap();

        let (id, user) = payload.into_parts();
        assert_eq!(id, None);
        assert_eq!(user.first_name, "Ivan");
        assert_eq!(user.age, 31);
    }

    #[test]
    fn test_payload_missing_field_rejected() {
        let err = serde_json::from_str::<UserPayload>(
            r#"{"first_name":"Ivan","last_name":"Petrov","age":31,"email":"ivan@example.com","role":"executor"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("phone"));
    }

    #[test]
    fn test_payload_unknown_field_rejected() {
        let err = serde_json::from_str::<UserPayload>(
            r#"{"first_name":"Ivan","last_name":"Petrov","age":31,"email":"ivan@example.com",
                "role":"executor","phone":"123","nickname":"vanya"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nickname"));
    }
}
