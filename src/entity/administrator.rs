//! Administrator entity
//!
//! Building assignments are usually implied by `Building::administrator_id`;
//! `building_ids` carries explicit extra assignments.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    pub id: String,

    /// Display name
    pub name: String,

    /// Job title shown in listings (e.g. "Senior Administrator")
    #[serde(default)]
    pub role: String,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    /// Explicitly assigned building ids
    #[serde(default, rename = "buildingIds")]
    pub building_ids: Vec<String>,
}

impl Administrator {
    /// Whether the building is within this administrator's scope, either by
    /// the building's own foreign key or by explicit assignment.
    pub fn manages(&self, building: &super::Building) -> bool {
        building.administrator_id.as_deref() == Some(self.id.as_str())
            || self.building_ids.iter().any(|id| *id == building.id)
    }
}
