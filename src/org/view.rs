//! View mode vocabulary
//!
//! Manager-level and administrator-level charts take different view modes.
//! For administrators, `residents` is accepted as an alias and produces the
//! same scoped shape as `buildings`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Grouping strategy of a manager-level chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartView {
    /// manager → administrator → building
    #[default]
    Hierarchy,
    /// manager → building type → building → administrator
    Buildings,
}

/// View mode of an administrator-level chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdministratorView {
    #[default]
    Buildings,
    Residents,
}

impl ChartView {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartView::Hierarchy => "hierarchy",
            ChartView::Buildings => "buildings",
        }
    }
}

impl AdministratorView {
    pub fn as_str(self) -> &'static str {
        match self {
            AdministratorView::Buildings => "buildings",
            AdministratorView::Residents => "residents",
        }
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdministratorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartView {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hierarchy" => Ok(ChartView::Hierarchy),
            "buildings" => Ok(ChartView::Buildings),
            other => Err(AppError::BadRequest(format!(
                "unknown view mode '{}', expected hierarchy or buildings",
                other
            ))),
        }
    }
}

impl FromStr for AdministratorView {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buildings" => Ok(AdministratorView::Buildings),
            "residents" => Ok(AdministratorView::Residents),
            other => Err(AppError::BadRequest(format!(
                "unknown view mode '{}', expected buildings or residents",
                other
            ))),
        }
    }
}
