use crate::settings::Settings;
use crate::types::{ApplicationType, Origin};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// One configured call-handling action with a relative execution priority.
///
/// `transient_id` is stable for the lifetime of the editing session and is
/// never persisted; `database_id` is present only for records that have been
/// loaded from or saved to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub transient_id: String,
    pub database_id: Option<i64>,
    pub application_type: ApplicationType,
    pub priority: u32,
    pub settings: Settings,
    pub origin: Origin,
}

impl Instruction {
    /// A new operator-added instruction. Priority is assigned by the next
    /// reindex pass.
    pub fn user(settings: Settings) -> Self {
        Self {
            transient_id: Uuid::new_v4().to_string(),
            database_id: None,
            application_type: settings.application_type(),
            priority: 0,
            settings,
            origin: Origin::User,
        }
    }

    pub fn is_derived(&self) -> bool {
        self.origin == Origin::Derived
    }

    /// The trimmed caller ID of a dial instruction, when non-blank. This is
    /// the trigger condition for the derived caller-ID override.
    pub fn caller_id_trigger(&self) -> Option<&str> {
        match &self.settings {
            Settings::Dial(settings) => {
                let caller_id = settings.caller_id.trim();
                (!caller_id.is_empty()).then_some(caller_id)
            }
            Settings::Custom(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
