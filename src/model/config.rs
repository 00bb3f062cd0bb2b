use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from nexus.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Capability switches that select which variant of the dashboard runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Show the login screen before the dashboard
    #[serde(default = "default_true")]
    pub auth: bool,
    #[serde(default)]
    pub pages: PageSet,
    #[serde(default)]
    pub navigation: NavigationKind,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            auth: true,
            pages: PageSet::Full,
            navigation: NavigationKind::Fragment,
        }
    }
}

/// Which pages are routable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSet {
    /// Every page
    #[default]
    Full,
    /// Home and Projects only
    Minimal,
}

/// Backing transport for the navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationKind {
    /// Route fragments (`#/projects`) with change subscriptions
    #[default]
    Fragment,
    /// Plain in-memory page value
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Seats available before any are purchased
    #[serde(default = "default_seat_limit")]
    pub seat_limit: usize,
    /// Task boards, in display order
    #[serde(default = "default_boards")]
    pub boards: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        WorkspaceConfig {
            seat_limit: default_seat_limit(),
            boards: default_boards(),
        }
    }
}

/// The identity the mock login hands out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            display_name: default_display_name(),
            email: default_email(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub sidebar_expanded: bool,
    /// Theme overrides, e.g. `highlight = "#DB2777"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            sidebar_expanded: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_seat_limit() -> usize {
    1
}

fn default_boards() -> Vec<String> {
    vec!["General".to_string()]
}

fn default_display_name() -> String {
    "Justin Wilson".to_string()
}

fn default_email() -> String {
    "justinwilson@gmail.com".to_string()
}
