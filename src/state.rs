use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::config::{Config, UiPreferences};
use crate::directory::Directory;
use crate::org::OrganizationService;
use crate::render::Theme;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Directory of managers, administrators and buildings
    pub directory: Arc<dyn Directory>,
    /// Organization chart service over `directory`
    pub org: OrganizationService,
    /// Application configuration
    pub config: Arc<Config>,
    /// UI preferences, initialized from config and living for the process lifetime
    pub prefs: Arc<RwLock<UiPreferences>>,
    /// Preference change notifications
    pub prefs_sender: broadcast::Sender<UiPreferences>,
}

impl AppState {
    /// Create new application state
    pub fn new(directory: Arc<dyn Directory>, config: Config) -> Self {
        let (prefs_sender, _) = broadcast::channel(16);

        Self {
            org: OrganizationService::new(directory.clone()),
            directory,
            prefs: Arc::new(RwLock::new(config.ui.clone())),
            config: Arc::new(config),
            prefs_sender,
        }
    }

    /// Current UI preferences
    pub async fn preferences(&self) -> UiPreferences {
        self.prefs.read().await.clone()
    }

    /// Theme for the current preferences
    pub async fn theme(&self) -> Theme {
        Theme::from_preferences(&*self.prefs.read().await)
    }

    /// Replace preferences and notify subscribers
    pub async fn update_preferences(&self, prefs: UiPreferences) {
        *self.prefs.write().await = prefs.clone();
        // Ignore send errors (no receivers is fine)
        let _ = self.prefs_sender.send(prefs);
    }

    /// Subscribe to preference changes
    pub fn subscribe(&self) -> broadcast::Receiver<UiPreferences> {
        self.prefs_sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectorySeed, InMemoryDirectory};
    use std::time::Duration;

    fn state() -> AppState {
        let directory = Arc::new(InMemoryDirectory::new(DirectorySeed::demo(), Duration::ZERO));
        AppState::new(directory, Config::default())
    }

    #[tokio::test]
    async fn test_preferences_update_notifies() {
        let state = state();
        let mut rx = state.subscribe();
        assert_eq!(state.theme().await, Theme::light());

        state.update_preferences(UiPreferences { dark_mode: true }).await;
        assert!(rx.recv().await.unwrap().dark_mode);
        assert!(state.preferences().await.dark_mode);
        assert_eq!(state.theme().await, Theme::dark());
    }
}
