use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Role label attached to an administrator record and carried in the token's
/// role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "Admin" => Ok(Role::Admin),
            "Editor" => Ok(Role::Editor),
            _ => Err(DomainError::UnknownRole),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Editor".parse::<Role>(), Ok(Role::Editor));
    }

    #[test]
    fn rejects_unknown_roles() {
        assert_eq!("admin".parse::<Role>(), Err(DomainError::UnknownRole));
        assert_eq!("Root".parse::<Role>(), Err(DomainError::UnknownRole));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Role::Admin.to_string().parse::<Role>(), Ok(Role::Admin));
    }
}
