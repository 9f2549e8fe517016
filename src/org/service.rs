//! Organization chart service
//!
//! Fetches flat snapshots from the directory and hands them to the builder.
//! A fresh tree is built on every call.

use std::sync::Arc;

use crate::directory::Directory;
use crate::error::{AppResult, OptionExt};

use super::builder::{
    build_administrator_scoped_tree, build_building_focused_tree, build_hierarchy_tree, BuiltTree,
};
use super::view::{AdministratorView, ChartView};

#[derive(Clone)]
pub struct OrganizationService {
    directory: Arc<dyn Directory>,
}

impl OrganizationService {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// Manager-level chart rooted at `root_id`
    pub async fn get_organization_chart(&self, root_id: &str, view: ChartView) -> AppResult<BuiltTree> {
        let managers = self.directory.managers().await?;
        let manager = managers
            .iter()
            .find(|m| m.id == root_id)
            .ok_or_not_found(format!("manager {}", root_id))?;

        let administrators = self.directory.administrators().await?;
        let buildings = self.directory.buildings().await?;

        let tree = match view {
            ChartView::Hierarchy => build_hierarchy_tree(manager, &administrators, &buildings),
            ChartView::Buildings => build_building_focused_tree(manager, &administrators, &buildings),
        };
        log_diagnostics(root_id, &tree);
        Ok(tree)
    }

    /// Chart restricted to what one administrator may see.
    ///
    /// Both view modes yield the same scoped shape.
    pub async fn get_administrator_organization_chart(
        &self,
        administrator_id: &str,
        view: AdministratorView,
    ) -> AppResult<BuiltTree> {
        let administrators = self.directory.administrators().await?;
        let administrator = administrators
            .iter()
            .find(|a| a.id == administrator_id)
            .ok_or_not_found(format!("administrator {}", administrator_id))?;

        if view == AdministratorView::Residents {
            tracing::debug!("View mode 'residents' served as the buildings view");
        }

        let buildings = self.directory.buildings().await?;
        Ok(build_administrator_scoped_tree(administrator, &buildings))
    }
}

fn log_diagnostics(root_id: &str, tree: &BuiltTree) {
    for diagnostic in &tree.diagnostics {
        tracing::warn!(root = %root_id, ?diagnostic, "Relationship dropped from organization chart");
    }
}
