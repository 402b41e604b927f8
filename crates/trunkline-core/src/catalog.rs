use crate::settings::{CustomSettings, DialSettings, Settings};
use crate::types::ApplicationType;

// ---------------------------------------------------------------------------
// ActionTemplate / ActionCatalog
// ---------------------------------------------------------------------------

/// One entry in the action catalog: a template the editor offers for
/// insertion into a route program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTemplate {
    pub application_type: ApplicationType,
    pub display_name: &'static str,
}

impl ActionTemplate {
    pub fn default_settings(&self) -> Settings {
        match self.application_type {
            ApplicationType::OutboundDial => Settings::Dial(DialSettings::default()),
            ApplicationType::Custom => Settings::Custom(CustomSettings::default()),
        }
    }
}

/// Static registry of the available action templates.
pub struct ActionCatalog;

impl ActionCatalog {
    pub const OUTBOUND_DIAL: ActionTemplate = ActionTemplate {
        application_type: ApplicationType::OutboundDial,
        display_name: "Outbound dial",
    };

    pub const CUSTOM: ActionTemplate = ActionTemplate {
        application_type: ApplicationType::Custom,
        display_name: "Custom application",
    };

    pub fn all() -> &'static [ActionTemplate] {
        &[Self::OUTBOUND_DIAL, Self::CUSTOM]
    }

    pub fn find(application_type: ApplicationType) -> ActionTemplate {
        match application_type {
            ApplicationType::OutboundDial => Self::OUTBOUND_DIAL,
            ApplicationType::Custom => Self::CUSTOM,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
