use crate::catalog::ActionCatalog;
use crate::derive;
use crate::error::{Result, RouteError};
use crate::instruction::Instruction;
use crate::preview;
use crate::program::RouteProgram;
use crate::settings::Settings;
use crate::types::{ApplicationType, Origin};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// One persisted instruction record, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    pub priority: u32,
    pub settings: Value,
}

/// One rendered dialplan line. Read back from the backend as
/// `generatedExtensions` (display-only) and submitted as `voiceExtensions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExtension {
    pub priority: u32,
    pub app: String,
    pub appdata: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_by_app_id: Option<i64>,
}

/// Read shape returned by the backend for one outbound route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRoute {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub recording: bool,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub applications: Vec<ApplicationRecord>,
    /// Backend-owned; displayed read-only, never reconciled client-side.
    #[serde(default)]
    pub generated_extensions: Vec<GeneratedExtension>,
}

/// Write shape submitted on save. Built in one piece from the current
/// program so a rejected save leaves the in-memory state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub phone_number: String,
    pub context: String,
    pub recording: bool,
    pub alias: String,
    pub description: String,
    pub applications: Vec<ApplicationRecord>,
    pub voice_extensions: Vec<GeneratedExtension>,
}

impl RoutePayload {
    pub fn from_route(route: &OutboundRoute, program: &RouteProgram) -> Result<Self> {
        Ok(Self {
            phone_number: route.phone_number.clone(),
            context: route.context.clone(),
            recording: route.recording,
            alias: route.alias.clone(),
            description: route.description.clone(),
            applications: to_persisted(program)?,
            voice_extensions: voice_extensions(program),
        })
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Build an editable program from persisted records.
///
/// Records are ordered by their persisted priority (input array order is not
/// trusted; the sort is stable, so equal priorities keep input order). A
/// settings value that cannot be decoded is a data-integrity error, never
/// defaulted away.
pub fn from_persisted(records: &[ApplicationRecord]) -> Result<RouteProgram> {
    let mut sorted: Vec<&ApplicationRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.priority);

    let mut instructions = Vec::with_capacity(sorted.len());
    for record in sorted {
        let mut instruction = Instruction::user(parse_settings(record)?);
        instruction.database_id = record.id;
        instruction.priority = record.priority;
        instructions.push(instruction);
    }
    adopt_derived(&mut instructions);
    Ok(RouteProgram::from_instructions(instructions))
}

fn parse_settings(record: &ApplicationRecord) -> Result<Settings> {
    let label = match record.id {
        Some(id) => format!("id {id}"),
        None => format!("priority {}", record.priority),
    };
    // Legacy rows store settings as a JSON string; newer rows as an object.
    let value = match &record.settings {
        Value::String(raw) => {
            serde_json::from_str::<Value>(raw).map_err(|source| RouteError::MalformedSettings {
                record: label.clone(),
                source,
            })?
        }
        other => other.clone(),
    };
    Settings::from_value(record.application_type, &value)
        .map_err(|source| RouteError::MalformedSettings { record: label, source })
}

/// Re-tag a previously saved caller-ID override as the derived counterpart
/// of the dial instruction that follows it.
///
/// The backend has no notion of "derived", so overrides come back as
/// ordinary records. Requiring an exact app and arguments match keeps
/// anything the operator wrote by hand an ordinary user instruction.
fn adopt_derived(instructions: &mut [Instruction]) {
    for index in 1..instructions.len() {
        let Some(caller_id) = instructions[index]
            .caller_id_trigger()
            .map(str::to_string)
        else {
            continue;
        };
        let trigger_id = instructions[index].transient_id.clone();
        let previous = &mut instructions[index - 1];
        if previous.origin != Origin::User {
            continue;
        }
        let Settings::Custom(settings) = &previous.settings else {
            continue;
        };
        if settings.application_name == derive::SET_APPLICATION
            && settings.arguments == derive::caller_id_expression(&caller_id)
        {
            previous.transient_id = derive::derived_key(&trigger_id);
            previous.origin = Origin::Derived;
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Flatten the program back to persisted records. Transient ids and origins
/// are stripped; derived instructions serialize as ordinary records.
pub fn to_persisted(program: &RouteProgram) -> Result<Vec<ApplicationRecord>> {
    program
        .instructions()
        .iter()
        .map(|instruction| {
            Ok(ApplicationRecord {
                id: instruction.database_id,
                application_type: instruction.application_type,
                priority: instruction.priority,
                settings: instruction.settings.to_value()?,
            })
        })
        .collect()
}

/// One dialplan line per instruction, `appdata` computed by the preview
/// module — the same formatting rule the editor displays.
pub fn voice_extensions(program: &RouteProgram) -> Vec<GeneratedExtension> {
    program
        .instructions()
        .iter()
        .map(|instruction| {
            let (app, appdata) = match &instruction.settings {
                Settings::Dial(settings) => {
                    ("Dial".to_string(), preview::dial_target(settings, None))
                }
                Settings::Custom(settings) => (
                    settings.application_name.clone(),
                    settings.arguments.clone(),
                ),
            };
            GeneratedExtension {
                priority: instruction.priority,
                app,
                appdata,
                description: ActionCatalog::find(instruction.application_type)
                    .display_name
                    .to_string(),
                generated_by_app_id: instruction.database_id,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
