use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ApplicationType
// ---------------------------------------------------------------------------

/// Discriminant of an instruction's settings payload. The serialized names
/// match the backend wire contract exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationType {
    OutboundDial,
    Custom,
}

impl ApplicationType {
    pub fn all() -> &'static [ApplicationType] {
        &[ApplicationType::OutboundDial, ApplicationType::Custom]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationType::OutboundDial => "OutboundDial",
            ApplicationType::Custom => "Custom",
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationType {
    type Err = crate::error::RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OutboundDial" | "outbound_dial" | "dial" => Ok(ApplicationType::OutboundDial),
            "Custom" | "custom" => Ok(ApplicationType::Custom),
            _ => Err(crate::error::RouteError::UnknownApplicationType(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// Whether an instruction was added by the operator or synthesized by the
/// derivation engine. Client-side bookkeeping only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Derived,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Derived => "derived",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
