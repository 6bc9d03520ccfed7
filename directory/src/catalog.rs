//! Static supervisor data and the controlled vocabularies.

use serde::Deserialize;

use crate::error::DirectoryError;
use crate::types::SupervisorRecord;

const BUILTIN_CATALOG: &str = include_str!("../data/supervisors.json");

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub research_domains: Vec<String>,
    pub departments: Vec<String>,
    pub supervisors: Vec<SupervisorRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(default)]
    research_domains: Vec<String>,
    #[serde(default)]
    departments: Vec<String>,
    #[serde(default)]
    supervisors: serde_json::Value,
}

impl Catalog {
    /// The dataset shipped with the directory.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CATALOG).unwrap_or_else(|e| {
            tracing::error!("builtin catalog unreadable: {e}");
            Self::default()
        })
    }

    /// Parse a catalog document. Individual supervisor rows that are
    /// malformed are dropped rather than failing the whole document.
    pub fn from_json(data: &str) -> Result<Self, DirectoryError> {
        let raw: RawCatalog = serde_json::from_str(data)?;
        if !raw.supervisors.is_array() {
            return Err(DirectoryError::InvalidInput(
                "catalog `supervisors` must be an array".to_string(),
            ));
        }
        Ok(Self {
            research_domains: raw.research_domains,
            departments: raw.departments,
            supervisors: load_records(&raw.supervisors),
        })
    }

    pub fn find(&self, id: &str) -> Option<&SupervisorRecord> {
        self.supervisors.iter().find(|s| s.id == id)
    }
}

/// Decode a JSON array of records, keeping those with an id, a name, a
/// research domain, `availableSlots <= maxSlots` and a rating within 0..=5.
/// Anything other than an array yields no records.
pub fn load_records(value: &serde_json::Value) -> Vec<SupervisorRecord> {
    let Some(rows) = value.as_array() else {
        tracing::error!("supervisors must be an array");
        return Vec::new();
    };
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            match serde_json::from_value::<SupervisorRecord>(row.clone()) {
                Ok(record) if is_valid(&record) => Some(record),
                Ok(record) => {
                    tracing::warn!("skipping invalid supervisor at {idx}: {:?}", record.id);
                    None
                }
                Err(e) => {
                    tracing::warn!("skipping malformed supervisor at {idx}: {e}");
                    None
                }
            }
        })
        .collect()
}

fn is_valid(record: &SupervisorRecord) -> bool {
    !record.id.is_empty()
        && !record.name.is_empty()
        && !record.research_domain.is_empty()
        && record.available_slots <= record.max_slots
        && record.rating.is_none_or(|r| (0.0..=5.0).contains(&r))
}
