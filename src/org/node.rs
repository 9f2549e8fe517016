//! Org node model
//!
//! A tree node owns its children; there are no parent back-references.

use std::fmt;

use serde::{Serialize, Serializer};

/// Kind of a synthesized summary leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Units,
    Residents,
}

impl LeafKind {
    pub fn suffix(self) -> &'static str {
        match self {
            LeafKind::Units => "units",
            LeafKind::Residents => "residents",
        }
    }

    pub fn role(self) -> Role {
        match self {
            LeafKind::Units => Role::Units,
            LeafKind::Residents => Role::Residents,
        }
    }

    /// Human readable count label, e.g. "24 Units"
    pub fn label(self, count: u32) -> String {
        match self {
            LeafKind::Units => format!("{} Units", count),
            LeafKind::Residents => format!("{} Residents", count),
        }
    }
}

/// Structured node identity.
///
/// Equality is structural, so a summary leaf never collides with an entity
/// whose id happens to end in `-units` or `-residents`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// A real directory record (manager, administrator, building)
    Entity(String),
    /// A building-type bucket
    Group(String),
    /// A synthesized count leaf under `parent`
    Summary { parent: String, kind: LeafKind },
}

impl NodeKey {
    pub fn entity(id: impl Into<String>) -> Self {
        NodeKey::Entity(id.into())
    }

    pub fn group(label: impl Into<String>) -> Self {
        NodeKey::Group(label.into())
    }

    pub fn summary(parent: impl Into<String>, kind: LeafKind) -> Self {
        NodeKey::Summary {
            parent: parent.into(),
            kind,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Entity(id) => f.write_str(id),
            NodeKey::Group(label) => write!(f, "type:{}", label),
            NodeKey::Summary { parent, kind } => write!(f, "{}-{}", parent, kind.suffix()),
        }
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Presentation tag of a node.
///
/// Only drives styling; the builder never validates structure by role.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    BusinessManager,
    Administrator,
    Building,
    Residential,
    Commercial,
    BuildingType,
    Units,
    Residents,
    Other(String),
}

impl Role {
    pub fn label(&self) -> &str {
        match self {
            Role::BusinessManager => "Business Manager",
            Role::Administrator => "Administrator",
            Role::Building => "Building",
            Role::Residential => "Residential",
            Role::Commercial => "Commercial",
            Role::BuildingType => "Building Type",
            Role::Units => "Units",
            Role::Residents => "Residents",
            Role::Other(label) => label,
        }
    }

    /// Parse a display label; unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Business Manager" => Role::BusinessManager,
            "Administrator" => Role::Administrator,
            "Building" => Role::Building,
            "Residential" => Role::Residential,
            "Commercial" => Role::Commercial,
            "Building Type" => Role::BuildingType,
            "Units" => Role::Units,
            "Residents" => Role::Residents,
            other => Role::Other(other.to_string()),
        }
    }

    /// Role of a building node given its category.
    pub fn for_building_category(category: Option<&str>) -> Self {
        match category {
            Some("Residential") => Role::Residential,
            Some("Commercial") => Role::Commercial,
            _ => Role::Building,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Organization chart node
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrgNode {
    pub id: NodeKey,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    pub fn new(id: NodeKey, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            image: None,
            children: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Synthesized count leaf under the entity `parent_id`
    pub fn summary(parent_id: &str, kind: LeafKind, count: u32) -> Self {
        OrgNode::new(NodeKey::summary(parent_id, kind), kind.label(count), kind.role())
    }

    pub fn push(&mut self, child: OrgNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(OrgNode::count).sum::<usize>()
    }

    /// Number of levels in this subtree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(OrgNode::depth).max().unwrap_or(0)
    }

    /// Pre-order visit with the depth of each node relative to `self`
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a OrgNode, usize)) {
        fn go<'a>(node: &'a OrgNode, depth: usize, visit: &mut impl FnMut(&'a OrgNode, usize)) {
            visit(node, depth);
            for child in &node.children {
                go(child, depth + 1, visit);
            }
        }
        go(self, 0, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_key_display() {
        assert_eq!(NodeKey::summary("b1", LeafKind::Units).to_string(), "b1-units");
        assert_eq!(NodeKey::summary("b1", LeafKind::Residents).to_string(), "b1-residents");
        assert_eq!(NodeKey::group("Residential").to_string(), "type:Residential");
    }

    #[test]
    fn test_summary_key_does_not_collide_with_suffixed_entity() {
        let leaf = NodeKey::summary("x-units", LeafKind::Units);
        let entity = NodeKey::entity("x-units-units");
        assert_eq!(leaf.to_string(), entity.to_string());
        assert_ne!(leaf, entity);
    }

    #[test]
    fn test_role_labels_round_trip() {
        for role in [
            Role::BusinessManager,
            Role::Administrator,
            Role::Building,
            Role::Residential,
            Role::Commercial,
            Role::BuildingType,
            Role::Units,
            Role::Residents,
        ] {
            assert_eq!(Role::from_label(role.label()), role);
        }
        assert_eq!(Role::from_label("Janitor"), Role::Other("Janitor".to_string()));
    }

    #[test]
    fn test_serialize_node() {
        let mut node = OrgNode::new(NodeKey::entity("b1"), "Sunset Towers", Role::Residential);
        node.push(OrgNode::summary("b1", LeafKind::Units, 24));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], "b1");
        assert_eq!(json["role"], "Residential");
        assert_eq!(json["children"][0]["id"], "b1-units");
        assert_eq!(json["children"][0]["name"], "24 Units");
        assert!(json.get("image").is_none());
        assert!(json["children"][0].get("children").is_none());
    }

    #[test]
    fn test_count_and_depth() {
        let mut root = OrgNode::new(NodeKey::entity("m1"), "Boss", Role::BusinessManager);
        assert_eq!(root.depth(), 1);
        let mut admin = OrgNode::new(NodeKey::entity("a1"), "Jane", Role::Administrator);
        admin.push(OrgNode::summary("a1", LeafKind::Units, 1));
        root.push(admin);
        assert_eq!(root.count(), 3);
        assert_eq!(root.depth(), 3);
    }
}
