//! Role enum for the closed set of member roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A member's functional role on a team.
///
/// Roles outside the closed set parse to `Unknown` rather than failing;
/// unknown roles score a neutral affinity against every other role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Designer,
    #[serde(rename = "pm")]
    ProductManager,
    Qa,
    Devops,
    #[default]
    Unknown,
}

impl Role {
    /// The recognized roles, excluding `Unknown`.
    pub const KNOWN: &'static [Role] = &[
        Role::Developer,
        Role::Designer,
        Role::ProductManager,
        Role::Qa,
        Role::Devops,
    ];

    /// Tolerant parse: unrecognized labels map to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "developer" => Role::Developer,
            "designer" => Role::Designer,
            "pm" => Role::ProductManager,
            "qa" => Role::Qa,
            "devops" => Role::Devops,
            _ => Role::Unknown,
        }
    }

    /// Returns the display label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Designer => "designer",
            Role::ProductManager => "pm",
            Role::Qa => "qa",
            Role::Devops => "devops",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
