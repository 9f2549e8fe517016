//! Manager entity - business manager at the top of the organization

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,

    /// Display name
    pub name: String,

    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub email: String,
}
