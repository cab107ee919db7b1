use serde::{Deserialize, Serialize};
use storefront_core::Role;

/// Signed-in backoffice user, persisted as JSON in localStorage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Up to two initials for the avatar button.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            email: "ops@example.com".to_string(),
            role: Role::Staff,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("Ana Lima").initials(), "AL");
        assert_eq!(user("ana maria lima").initials(), "AM");
        assert_eq!(user("Bo").initials(), "B");
        assert_eq!(user("   ").initials(), "?");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&user("Ana")).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ana","email":"ops@example.com","role":"staff"}"#
        );
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user("Ana"));
    }
}
