use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marketplace role of the acting user.
///
/// Roles gate back-office capabilities (see `frostmart-orders`). Values
/// outside the known set deserialize as `Unknown` and are treated as the
/// least-privileged role everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Client,
    Supplier,
    Driver,
    Employee,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Back-office roles get invoice and processing-history access.
    pub fn is_back_office(self) -> bool {
        matches!(self, Role::Admin | Role::Employee)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "CLIENT",
            Role::Supplier => "SUPPLIER",
            Role::Driver => "DRIVER",
            Role::Employee => "EMPLOYEE",
            Role::Admin => "ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = core::convert::Infallible;

    /// Total: anything outside the known set parses as `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "CLIENT" => Role::Client,
            "SUPPLIER" => Role::Supplier,
            "DRIVER" => Role::Driver,
            "EMPLOYEE" => Role::Employee,
            "ADMIN" => Role::Admin,
            _ => Role::Unknown,
        })
    }
}
