use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Role asserted by the identity provider for the current caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Cook,
    Customer,
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Cook => f.write_str("cook"),
            Role::Customer => f.write_str("customer"),
        }
    }
}

/// The authorization principal for every call: who is asking, and as what.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub uid: UserId,
    pub role: Role,
}

impl Principal {
    pub fn cook(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            role: Role::Cook,
        }
    }

    pub fn customer(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            role: Role::Customer,
        }
    }

    pub fn is_cook(&self, uid: &UserId) -> bool {
        self.role == Role::Cook && &self.uid == uid
    }

    pub fn is_customer(&self, uid: &UserId) -> bool {
        self.role == Role::Customer && &self.uid == uid
    }
}

impl Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.uid)
    }
}
