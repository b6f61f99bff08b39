// src/application/config.rs
//
// Site configuration: caller-supplied values merged over defaults, plus the
// stock presets for switching between site flavors.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::ModuleId;

/// Which dashboard variant the dashboard module renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    Default,
    Chat,
    Blog,
    Gallery,
}

impl Default for DashboardKind {
    fn default() -> Self {
        DashboardKind::Default
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name used in page contexts and titles
    pub site_name: Option<String>,

    /// Stylesheet name under the static dir, without extension
    pub theme: String,

    pub dashboard: DashboardKind,

    /// SQLite file location; None means the per-user data directory
    pub database_path: Option<PathBuf>,

    /// Directory served under /static
    pub static_dir: PathBuf,

    /// Appended to asset URLs to force client reloads
    pub cache_buster: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            theme: "light-professional".to_string(),
            dashboard: DashboardKind::default(),
            database_path: None,
            static_dir: PathBuf::from("static"),
            cache_buster: "1.3".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn site_name_display(&self) -> &str {
        self.site_name.as_deref().unwrap_or("Unnamed Project")
    }

    pub fn theme_css_url(&self) -> String {
        format!("/static/{}.css?v={}", self.theme, self.cache_buster)
    }
}

/// A ready-made module list + configuration pair.
#[derive(Debug, Clone)]
pub struct Preset {
    pub modules: Vec<ModuleId>,
    pub config: SiteConfig,
}

/// The stock site flavors selectable from the CLI (or the APP_TYPE env var).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetKind {
    /// Tech blog + community chat
    Community,
    /// Creative portfolio with a gallery-flavored dashboard
    Portfolio,
    /// Gaming hub (chat + blog)
    Gaming,
    /// Simple blog
    Blog,
    /// Everything on
    Full,
}

impl PresetKind {
    pub fn build(self) -> Preset {
        let modules = |names: &[&str]| names.iter().map(|n| ModuleId::from(*n)).collect();
        match self {
            PresetKind::Community => Preset {
                modules: modules(&["blog", "chat", "dashboard", "database", "auth"]),
                config: SiteConfig {
                    site_name: Some("Tech Community".to_string()),
                    theme: "dark-modern".to_string(),
                    dashboard: DashboardKind::Blog,
                    ..SiteConfig::default()
                },
            },
            PresetKind::Portfolio => Preset {
                modules: modules(&["blog", "dashboard", "database", "auth"]),
                config: SiteConfig {
                    site_name: Some("Creative Portfolio".to_string()),
                    theme: "light-professional".to_string(),
                    dashboard: DashboardKind::Gallery,
                    ..SiteConfig::default()
                },
            },
            PresetKind::Gaming => Preset {
                modules: modules(&["chat", "blog", "dashboard", "database", "auth"]),
                config: SiteConfig {
                    site_name: Some("Gaming Hub".to_string()),
                    theme: "cyberpunk-neon".to_string(),
                    dashboard: DashboardKind::Chat,
                    ..SiteConfig::default()
                },
            },
            PresetKind::Blog => Preset {
                modules: modules(&["blog", "dashboard", "database", "auth"]),
                config: SiteConfig {
                    site_name: Some("My Blog".to_string()),
                    theme: "light-professional".to_string(),
                    dashboard: DashboardKind::Blog,
                    ..SiteConfig::default()
                },
            },
            PresetKind::Full => Preset {
                modules: modules(&["blog", "chat", "dashboard", "database", "auth"]),
                config: SiteConfig {
                    site_name: Some("Full Platform".to_string()),
                    theme: "dark-modern".to_string(),
                    dashboard: DashboardKind::Blog,
                    ..SiteConfig::default()
                },
            },
        }
    }
}
