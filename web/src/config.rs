//! Navigation link configuration.
//!
//! The link list ships as `nav.json` next to the crate manifest and is parsed
//! once when the site layout mounts. A broken file never takes the site down:
//! it is logged and the built-in list is used instead.

use dioxus::logger::tracing::{info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use ui::NavLink;

const NAV_JSON: &str = include_str!("../nav.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation config has no links")]
    Empty,
    #[error("duplicate navigation path `{0}`")]
    DuplicatePath(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavConfig {
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            links: vec![
                NavLink::new("/", "Home"),
                NavLink::new("/menu", "Menu"),
                NavLink::new("/about", "About"),
                NavLink::new("/contact", "Contact"),
            ],
        }
    }
}

impl NavConfig {
    /// Parses and checks a link list. Paths are render keys, so they must be
    /// unique among the top-level links.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = serde_json::from_str(json)?;
        if config.links.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut seen = HashSet::new();
        for link in &config.links {
            if !seen.insert(link.path.as_str()) {
                return Err(ConfigError::DuplicatePath(link.path.clone()));
            }
        }

        Ok(config)
    }

    /// The bundled config, or the default list if it does not load.
    pub fn load() -> Self {
        match Self::from_json(NAV_JSON) {
            Ok(config) => {
                info!("Loaded {} navigation links", config.links.len());
                config
            }
            Err(e) => {
                warn!("Falling back to default navigation: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let config = NavConfig::from_json(NAV_JSON).unwrap();
        assert_eq!(config.links.first().map(|l| l.path.as_str()), Some("/"));
    }

    #[test]
    fn keeps_link_order() {
        let config = NavConfig::from_json(
            r#"{ "links": [
                { "path": "/contact", "label": "Contact" },
                { "path": "/", "label": "Home" }
            ] }"#,
        )
        .unwrap();
        let labels: Vec<_> = config.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Contact", "Home"]);
    }

    #[test]
    fn rejects_duplicate_paths() {
        let err = NavConfig::from_json(
            r#"{ "links": [
                { "path": "/", "label": "Home" },
                { "path": "/", "label": "Start" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePath(p) if p == "/"));
    }

    #[test]
    fn rejects_empty_and_malformed_configs() {
        assert!(matches!(
            NavConfig::from_json(r#"{ "links": [] }"#),
            Err(ConfigError::Empty)
        ));
        assert!(matches!(
            NavConfig::from_json(r#"{ "links": [{ "label": "Home" }] }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn nested_duplicates_are_not_checked() {
        let config = NavConfig::from_json(
            r#"{ "links": [
                { "link": "/about", "label": "About", "links": [
                    { "link": "/about", "label": "About us" }
                ] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(config.links[0].children.len(), 1);
    }
}
