use crate::types::ApplicationType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// DialSettings
// ---------------------------------------------------------------------------

/// Settings payload of an `OutboundDial` instruction.
///
/// Every field is emitted on serialization so persisted records round-trip
/// without key churn; reads tolerate missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialSettings {
    #[serde(default)]
    pub trunk_id: String,
    #[serde(default)]
    pub caller_id: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    #[serde(default)]
    pub options: String,
    #[serde(default)]
    pub url: String,
}

fn default_timeout() -> u32 {
    30
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            trunk_id: String::new(),
            caller_id: String::new(),
            prefix: String::new(),
            tag: String::new(),
            timeout: default_timeout(),
            options: String::new(),
            url: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// CustomSettings
// ---------------------------------------------------------------------------

/// Settings payload of a `Custom` instruction: a raw dialplan application
/// call, executed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSettings {
    #[serde(default)]
    pub application_name: String,
    #[serde(default)]
    pub arguments: String,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Variant settings payload, discriminated externally by the record's
/// `type` field rather than by an embedded tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Settings {
    Dial(DialSettings),
    Custom(CustomSettings),
}

impl Settings {
    pub fn application_type(&self) -> ApplicationType {
        match self {
            Settings::Dial(_) => ApplicationType::OutboundDial,
            Settings::Custom(_) => ApplicationType::Custom,
        }
    }

    pub fn as_dial(&self) -> Option<&DialSettings> {
        match self {
            Settings::Dial(settings) => Some(settings),
            Settings::Custom(_) => None,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomSettings> {
        match self {
            Settings::Custom(settings) => Some(settings),
            Settings::Dial(_) => None,
        }
    }

    /// Decode a settings value against the shape `application_type` dictates.
    pub fn from_value(
        application_type: ApplicationType,
        value: &Value,
    ) -> Result<Self, serde_json::Error> {
        match application_type {
            ApplicationType::OutboundDial => {
                serde_json::from_value(value.clone()).map(Settings::Dial)
            }
            ApplicationType::Custom => serde_json::from_value(value.clone()).map(Settings::Custom),
        }
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Settings::Dial(settings) => serde_json::to_value(settings),
            Settings::Custom(settings) => serde_json::to_value(settings),
        }
    }

    /// Merge a partial update into this payload. Returns `false` without
    /// touching anything when the patch variant does not match.
    pub fn apply(&mut self, patch: &SettingsPatch) -> bool {
        match (self, patch) {
            (Settings::Dial(settings), SettingsPatch::Dial(patch)) => {
                if let Some(trunk_id) = &patch.trunk_id {
                    settings.trunk_id = trunk_id.clone();
                }
                if let Some(caller_id) = &patch.caller_id {
                    settings.caller_id = caller_id.clone();
                }
                if let Some(prefix) = &patch.prefix {
                    settings.prefix = prefix.clone();
                }
                if let Some(tag) = &patch.tag {
                    settings.tag = tag.clone();
                }
                if let Some(timeout) = patch.timeout {
                    settings.timeout = timeout;
                }
                if let Some(options) = &patch.options {
                    settings.options = options.clone();
                }
                if let Some(url) = &patch.url {
                    settings.url = url.clone();
                }
                true
            }
            (Settings::Custom(settings), SettingsPatch::Custom(patch)) => {
                if let Some(application_name) = &patch.application_name {
                    settings.application_name = application_name.clone();
                }
                if let Some(arguments) = &patch.arguments {
                    settings.arguments = arguments.clone();
                }
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// SettingsPatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

/// Partial settings update, variant-matched against the target instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPatch {
    Dial(DialSettingsPatch),
    Custom(CustomSettingsPatch),
}

impl SettingsPatch {
    /// Shorthand for the most common edit: setting or clearing the caller ID.
    pub fn caller_id(caller_id: impl Into<String>) -> Self {
        SettingsPatch::Dial(DialSettingsPatch {
            caller_id: Some(caller_id.into()),
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
