use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: UserRole,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(role: &str) -> String {
        format!(
            r#"{{
                "id": 3,
                "username": "reader",
                "email": "reader@example.com",
                "first_name": "Jo",
                "last_name": "March",
                "role": "{role}",
                "date_joined": "2024-05-01T09:30:00Z"
            }}"#
        )
    }

    #[test]
    fn deserializes_wire_shape_with_absent_optionals() {
        let user: User = serde_json::from_str(&user_json("user")).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.phone_number, None);
        assert_eq!(user.address, None);
        assert!(!user.is_admin());
        assert_eq!(user.full_name(), "Jo March");
    }

    #[test]
    fn role_is_a_closed_lowercase_enum() {
        let admin: User = serde_json::from_str(&user_json("admin")).unwrap();
        assert!(admin.is_admin());
        assert!(serde_json::from_str::<User>(&user_json("librarian")).is_err());
    }
}
