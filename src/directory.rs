//! Directory of managers, administrators and buildings
//!
//! The chart service only ever sees flat snapshots fetched through the
//! [`Directory`] trait. The in-memory implementation simulates network
//! latency so callers exercise the same await point a remote source would.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::entity::{Administrator, Building, Manager};
use crate::error::{AppError, AppResult};

/// Source of flat directory records
#[async_trait]
pub trait Directory: Send + Sync {
    async fn managers(&self) -> AppResult<Vec<Manager>>;
    async fn administrators(&self) -> AppResult<Vec<Administrator>>;
    async fn buildings(&self) -> AppResult<Vec<Building>>;
}

/// Seed file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub managers: Vec<Manager>,
    #[serde(default)]
    pub administrators: Vec<Administrator>,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl DirectorySeed {
    /// Load a seed file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let format = SeedFormat::from_path(path);
        Self::parse(&content, format)
            .map_err(|e| AppError::Config(format!("invalid seed file {}: {}", path.display(), e)))
    }

    fn parse(content: &str, format: SeedFormat) -> Result<Self, String> {
        match format {
            SeedFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            SeedFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Built-in demo data
    pub fn demo() -> Self {
        fn manager(id: &str, name: &str, email: &str) -> Manager {
            Manager {
                id: id.to_string(),
                name: name.to_string(),
                image: None,
                email: email.to_string(),
            }
        }

        fn admin(id: &str, name: &str, role: &str, email: &str, phone: &str) -> Administrator {
            Administrator {
                id: id.to_string(),
                name: name.to_string(),
                role: role.to_string(),
                image: Some(format!("https://randomuser.me/api/portraits/lego/{}.jpg", &id[1..])),
                email: email.to_string(),
                phone: phone.to_string(),
                building_ids: Vec::new(),
            }
        }

        fn building(
            id: &str,
            name: &str,
            kind: &str,
            address: &str,
            units: u32,
            residents: u32,
            admin: &str,
        ) -> Building {
            Building {
                id: id.to_string(),
                name: name.to_string(),
                kind: Some(kind.to_string()),
                image: None,
                address: address.to_string(),
                units,
                residents,
                administrator_id: Some(admin.to_string()),
            }
        }

        Self {
            managers: vec![manager("m1", "Arben Krasniqi", "arben@komuniteti.com")],
            administrators: vec![
                admin("a1", "Jane Cooper", "Senior Administrator", "jane@komuniteti.com", "+355 69 123 4567"),
                admin("a2", "Besa Hoxha", "Administrator", "besa@komuniteti.com", "+355 69 234 5678"),
                admin("a3", "Dritan Leka", "Junior Administrator", "dritan@komuniteti.com", "+355 69 345 6789"),
            ],
            buildings: vec![
                building("b1", "Sunset Towers", "Residential", "Rruga e Durresit 12, Tirana", 24, 38, "a1"),
                building("b2", "Harbor Plaza", "Commercial", "Bulevardi Zogu I 5, Tirana", 18, 12, "a1"),
                building("b3", "Green Park Residence", "Residential", "Rruga Myslym Shyri 40, Tirana", 32, 64, "a2"),
                building("b4", "Riverside Offices", "Commercial", "Rruga Elbasanit 88, Tirana", 10, 25, "a2"),
                building("b5", "Blloku Apartments", "Residential", "Rruga Pjeter Bogdani 3, Tirana", 16, 29, "a1"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedFormat {
    Toml,
    Json,
}

impl SeedFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SeedFormat::Json,
            _ => SeedFormat::Toml,
        }
    }
}

/// In-memory directory backed by a seed snapshot
pub struct InMemoryDirectory {
    seed: RwLock<DirectorySeed>,
    latency: Duration,
}

impl InMemoryDirectory {
    pub fn new(seed: DirectorySeed, latency: Duration) -> Self {
        Self {
            seed: RwLock::new(seed),
            latency,
        }
    }

    async fn simulate_fetch(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn managers(&self) -> AppResult<Vec<Manager>> {
        self.simulate_fetch().await;
        Ok(self.seed.read().await.managers.clone())
    }

    async fn administrators(&self) -> AppResult<Vec<Administrator>> {
        self.simulate_fetch().await;
        Ok(self.seed.read().await.administrators.clone())
    }

    async fn buildings(&self) -> AppResult<Vec<Building>> {
        self.simulate_fetch().await;
        Ok(self.seed.read().await.buildings.clone())
    }
}
