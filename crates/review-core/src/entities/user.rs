//! User entity - account with role and confirmation state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Usernames that can never be registered through signup.
///
/// "me" collides with the `/users/me` route; "admin" must not shadow
/// the admin role.
pub const RESERVED_USERNAMES: &[&str] = &["me", "admin"];

/// Length of a generated confirmation code
pub const CONFIRMATION_CODE_LEN: usize = 8;

/// User role - closed set, referenced by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    /// Stable string form used in the store and API responses
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Parse from the stable string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "moderator" => Some(Self::Moderator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub role: Role,
    pub is_staff: bool,
    pub is_superuser: bool,
    /// Pending signup code; None once consumed or for admin-created users
    pub confirmation_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unconfirmed user with the default role
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            first_name: None,
            last_name: None,
            bio: None,
            role: Role::User,
            is_staff: false,
            is_superuser: false,
            confirmation_code: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Admin-level access: the admin role, or both staff and superuser flags
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || (self.is_staff && self.is_superuser)
    }

    /// Moderator role check (does not imply admin)
    #[inline]
    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    /// Overwrite the stored confirmation code
    pub fn set_confirmation_code(&mut self, code: String) {
        self.confirmation_code = Some(code);
        self.updated_at = Utc::now();
    }

    /// Compare a supplied confirmation code against the stored one.
    ///
    /// A user with no stored code never matches.
    pub fn confirmation_code_matches(&self, supplied: &str) -> bool {
        self.confirmation_code
            .as_deref()
            .is_some_and(|stored| stored == supplied)
    }
}

/// Check a username: ASCII letters and digits only, non-empty
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username.len() <= 150
        && username.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check whether a username is reserved (case-insensitive)
pub fn is_reserved_username(username: &str) -> bool {
    RESERVED_USERNAMES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(username))
}

/// Generate a fresh confirmation code: fixed-length, uniform over
/// ASCII letters and digits. Never reused; every call replaces the old one.
pub fn generate_confirmation_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::thread_rng();
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Moderator, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("owner"), None);
    }

    #[test]
    fn test_default_role_is_user() {
        let user = User::new(Snowflake::new(1), "alice".to_string(), "a@example.com".to_string());
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert!(!user.is_moderator());
    }

    #[test]
    fn test_admin_via_role() {
        let mut user = User::new(Snowflake::new(1), "root".to_string(), "r@example.com".to_string());
        user.role = Role::Admin;
        assert!(user.is_admin());
    }

    #[test]
    fn test_admin_via_staff_superuser() {
        let mut user = User::new(Snowflake::new(1), "ops".to_string(), "o@example.com".to_string());
        user.is_staff = true;
        assert!(!user.is_admin());
        user.is_superuser = true;
        assert!(user.is_admin());
    }

    #[test]
    fn test_confirmation_code_match() {
        let mut user = User::new(Snowflake::new(1), "bob".to_string(), "b@example.com".to_string());
        assert!(!user.confirmation_code_matches("anything"));

        user.set_confirmation_code("Abc12345".to_string());
        assert!(user.confirmation_code_matches("Abc12345"));
        assert!(!user.confirmation_code_matches("abc12345"));
    }

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("alice2"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("al ice"));
        assert!(!is_valid_username("al.ice"));
        assert!(!is_valid_username("алиса"));
    }

    #[test]
    fn test_reserved_usernames() {
        assert!(is_reserved_username("me"));
        assert!(is_reserved_username("Me"));
        assert!(is_reserved_username("ADMIN"));
        assert!(!is_reserved_username("medium"));
    }

    #[test]
    fn test_generate_confirmation_code() {
        let code1 = generate_confirmation_code();
        let code2 = generate_confirmation_code();

        assert_eq!(code1.len(), CONFIRMATION_CODE_LEN);
        assert_eq!(code2.len(), CONFIRMATION_CODE_LEN);
        assert!(code1.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
