//! Preview strings.
//!
//! The string an operator sees next to an instruction and the string the
//! telephony engine executes come from the functions in this module and
//! nowhere else; the serializer builds `voiceExtensions` from the same
//! formatting rule.

use crate::instruction::Instruction;
use crate::settings::{CustomSettings, DialSettings, Settings};

/// Placeholder for the extension matched at execution time, when no
/// concrete extension is known at edit time.
pub const EXTEN_PLACEHOLDER: &str = "${EXTEN}";

/// `PJSIP/{prefix}{exten}@{trunkId}`.
pub fn dial_target(settings: &DialSettings, exten: Option<&str>) -> String {
    let exten = exten.unwrap_or(EXTEN_PLACEHOLDER);
    format!("PJSIP/{}{}@{}", settings.prefix, exten, settings.trunk_id)
}

/// `{applicationName} {arguments}`, trimmed when either side is empty.
pub fn custom_line(settings: &CustomSettings) -> String {
    format!("{} {}", settings.application_name, settings.arguments)
        .trim()
        .to_string()
}

/// The display/executable string for one instruction.
pub fn preview(instruction: &Instruction) -> String {
    match &instruction.settings {
        Settings::Dial(settings) => dial_target(settings, None),
        Settings::Custom(settings) => custom_line(settings),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_target_with_defaults() {
        let settings = DialSettings {
            trunk_id: "trunk1".into(),
            ..Default::default()
        };
        assert_eq!(dial_target(&settings, None), "PJSIP/${EXTEN}@trunk1");
    }

    #[test]
    fn dial_target_with_prefix_and_exten() {
        let settings = DialSettings {
            trunk_id: "carrier-a".into(),
            prefix: "9".into(),
            ..Default::default()
        };
        assert_eq!(
            dial_target(&settings, Some("0772000111")),
            "PJSIP/90772000111@carrier-a"
        );
    }

    #[test]
    fn custom_line_joins_name_and_arguments() {
        let settings = CustomSettings {
            application_name: "Set".into(),
            arguments: "CALLERID(all)=\"x <x>\"".into(),
        };
        assert_eq!(custom_line(&settings), "Set CALLERID(all)=\"x <x>\"");
    }

    #[test]
    fn custom_line_trims_when_arguments_empty() {
        let settings = CustomSettings {
            application_name: "Hangup".into(),
            arguments: String::new(),
        };
        assert_eq!(custom_line(&settings), "Hangup");
    }

    #[test]
    fn preview_dispatches_on_settings_variant() {
        let dial = Instruction::user(Settings::Dial(DialSettings {
            trunk_id: "trunk1".into(),
            ..Default::default()
        }));
        assert_eq!(preview(&dial), "PJSIP/${EXTEN}@trunk1");

        let custom = Instruction::user(Settings::Custom(CustomSettings {
            application_name: "Playback".into(),
            arguments: "welcome".into(),
        }));
        assert_eq!(preview(&custom), "Playback welcome");
    }
}
