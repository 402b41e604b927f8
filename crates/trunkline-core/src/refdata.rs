use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// An outbound carrier connection selectable by a dial instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrunkRef {
    pub id: String,
    pub name: String,
}

/// A DID number usable as a caller-ID override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidRef {
    pub did: String,
    #[serde(default)]
    pub label: String,
}

/// Read-only selection data for the editor surface. The core never
/// validates against it; trunk existence is the backend's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    #[serde(default)]
    pub trunks: Vec<TrunkRef>,
    #[serde(default)]
    pub dids: Vec<DidRef>,
}

impl ReferenceData {
    pub fn trunk_name(&self, id: &str) -> Option<&str> {
        self.trunks
            .iter()
            .find(|trunk| trunk.id == id)
            .map(|trunk| trunk.name.as_str())
    }

    pub fn has_did(&self, did: &str) -> bool {
        self.dids.iter().any(|entry| entry.did == did)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
