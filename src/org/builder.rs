//! Organization tree builder
//!
//! Pure transforms from flat directory records to one rooted [`OrgNode`].
//! Builders never fail: dangling or missing relationships are dropped from
//! the tree and reported through [`BuiltTree::diagnostics`].

use serde::Serialize;

use crate::entity::{Administrator, Building, Manager};

use super::node::{LeafKind, NodeKey, OrgNode, Role};

/// Bucket label for buildings without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A relationship the builder could not honour
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// Building has no administrator assigned
    Unassigned {
        #[serde(rename = "buildingId")]
        building_id: String,
    },
    /// Building references an administrator that is not in the input
    UnknownAdministrator {
        #[serde(rename = "buildingId")]
        building_id: String,
        #[serde(rename = "administratorId")]
        administrator_id: String,
    },
}

/// Builder output: the tree plus what was dropped while building it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuiltTree {
    pub root: OrgNode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl BuiltTree {
    fn new(root: OrgNode) -> Self {
        Self {
            root,
            diagnostics: Vec::new(),
        }
    }
}

fn manager_node(manager: &Manager) -> OrgNode {
    OrgNode::new(NodeKey::entity(&manager.id), &manager.name, Role::BusinessManager)
        .with_image(manager.image.clone())
}

fn administrator_node(admin: &Administrator) -> OrgNode {
    OrgNode::new(NodeKey::entity(&admin.id), &admin.name, Role::Administrator)
        .with_image(admin.image.clone())
}

/// Building node with its units/residents summary leaves, plus any extra
/// children that must precede them.
fn building_node(building: &Building, leading: Option<OrgNode>) -> OrgNode {
    let mut node = OrgNode::new(
        NodeKey::entity(&building.id),
        &building.name,
        Role::for_building_category(building.category()),
    )
    .with_image(building.image.clone());

    if let Some(child) = leading {
        node.push(child);
    }
    node.push(OrgNode::summary(&building.id, LeafKind::Units, building.units));
    node.push(OrgNode::summary(&building.id, LeafKind::Residents, building.residents));
    node
}

/// Resolve a building's administrator, recording why it could not be.
///
/// The building's own `administrator_id` wins; otherwise the first
/// administrator that lists the building in `building_ids` is used.
fn resolve_administrator<'a>(
    building: &Building,
    administrators: &'a [Administrator],
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<&'a Administrator> {
    let by_key = building
        .administrator_id
        .as_deref()
        .and_then(|admin_id| administrators.iter().find(|a| a.id == admin_id));
    if by_key.is_some() {
        return by_key;
    }

    let assigned = administrators
        .iter()
        .find(|a| a.building_ids.iter().any(|id| *id == building.id));
    if assigned.is_some() {
        return assigned;
    }

    diagnostics.push(match building.administrator_id.as_deref() {
        Some(admin_id) => Diagnostic::UnknownAdministrator {
            building_id: building.id.clone(),
            administrator_id: admin_id.to_string(),
        },
        None => Diagnostic::Unassigned {
            building_id: building.id.clone(),
        },
    });
    None
}

/// Manager → administrator → building → {units, residents}.
///
/// Every administrator appears, in input order, even with no buildings.
/// Buildings keep their input order under each administrator that manages
/// them. Buildings no administrator manages have no place in this view and
/// are reported.
pub fn build_hierarchy_tree(
    manager: &Manager,
    administrators: &[Administrator],
    buildings: &[Building],
) -> BuiltTree {
    let mut tree = BuiltTree::new(manager_node(manager));

    for admin in administrators {
        let mut node = administrator_node(admin);
        for building in buildings.iter().filter(|b| admin.manages(b)) {
            node.push(building_node(building, None));
        }
        tree.root.push(node);
    }

    for building in buildings {
        resolve_administrator(building, administrators, &mut tree.diagnostics);
    }

    tracing::debug!(
        root = %manager.id,
        nodes = tree.root.count(),
        dropped = tree.diagnostics.len(),
        "Built hierarchy tree"
    );
    tree
}

/// Manager → building type → building → {administrator?, units, residents}.
///
/// Type buckets appear in first-seen order. Buildings without a type land in
/// the [`UNCATEGORIZED`] bucket. The administrator child is omitted when the
/// building's administrator cannot be resolved.
pub fn build_building_focused_tree(
    manager: &Manager,
    administrators: &[Administrator],
    buildings: &[Building],
) -> BuiltTree {
    let mut tree = BuiltTree::new(manager_node(manager));

    let mut categories: Vec<&str> = Vec::new();
    for building in buildings {
        let category = building.category().unwrap_or(UNCATEGORIZED);
        if !categories.contains(&category) {
            categories.push(category);
        }
    }

    for category in categories {
        let mut group = OrgNode::new(NodeKey::group(category), category, Role::BuildingType);
        for building in buildings
            .iter()
            .filter(|b| b.category().unwrap_or(UNCATEGORIZED) == category)
        {
            let admin = resolve_administrator(building, administrators, &mut tree.diagnostics)
                .map(administrator_node);
            group.push(building_node(building, admin));
        }
        tree.root.push(group);
    }

    tracing::debug!(
        root = %manager.id,
        nodes = tree.root.count(),
        dropped = tree.diagnostics.len(),
        "Built building-focused tree"
    );
    tree
}

/// Administrator → scoped buildings → {units, residents}.
///
/// Restricted view: no manager ancestor and no other administrators.
pub fn build_administrator_scoped_tree(
    administrator: &Administrator,
    buildings: &[Building],
) -> BuiltTree {
    let mut tree = BuiltTree::new(administrator_node(administrator));

    for building in buildings.iter().filter(|b| administrator.manages(b)) {
        tree.root.push(building_node(building, None));
    }

    tracing::debug!(
        root = %administrator.id,
        nodes = tree.root.count(),
        "Built administrator-scoped tree"
    );
    tree
}
