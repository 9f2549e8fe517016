//! Building entity

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,

    /// Display name
    pub name: String,

    /// Category, e.g. "Residential" or "Commercial"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Photo reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub address: String,

    /// Number of units
    #[serde(default)]
    pub units: u32,

    /// Number of residents
    #[serde(default)]
    pub residents: u32,

    /// Administrator in charge (may be missing or dangling)
    #[serde(default, rename = "administratorId", skip_serializing_if = "Option::is_none")]
    pub administrator_id: Option<String>,
}

impl Building {
    /// Category with surrounding whitespace removed; `None` when absent or blank.
    pub fn category(&self) -> Option<&str> {
        self.kind.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_building_toml() {
        let toml_str = r#"
            id = "b1"
            name = "Sunset Towers"
            type = "Residential"
            units = 24
            residents = 38
            administratorId = "a1"
        "#;
        let building: Building = toml::from_str(toml_str).unwrap();
        assert_eq!(building.kind.as_deref(), Some("Residential"));
        assert_eq!(building.administrator_id.as_deref(), Some("a1"));
        assert_eq!(building.units, 24);
    }

    #[test]
    fn test_blank_category_is_none() {
        let mut building: Building = toml::from_str("id = \"b1\"\nname = \"B\"\ntype = \"  \"").unwrap();
        assert_eq!(building.category(), None);
        building.kind = Some(" Commercial ".to_string());
        assert_eq!(building.category(), Some("Commercial"));
    }
}
