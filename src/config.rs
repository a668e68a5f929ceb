//! Site configuration.
//!
//! Defaults cover everything; a host page may override any subset with an
//! inline `<script type="application/json" id="site-config">` block.

use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Options passed verbatim to `AOS.init`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animate each element only the first time it scrolls into view.
    pub once: bool,
    /// Pixel offset from the viewport edge before triggering.
    pub offset: u32,
    pub duration: u32,
    pub easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            once: true,
            offset: 100,
            duration: 800,
            easing: "ease-out-cubic".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub brand: String,
    pub headline: String,
    pub tagline: String,
    pub hero_cta: String,
    pub portfolio_heading: String,
    pub footer: String,
    pub show_all: String,
    pub collapse: String,
    pub visit_overlay: String,
    pub visit_link: String,
    pub loading: String,
    pub load_error: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            brand: "Portfolio".to_string(),
            headline: "Websites that work for your business".to_string(),
            tagline: "A selection of recent client and personal projects.".to_string(),
            hero_cta: "See My Work".to_string(),
            portfolio_heading: "Recent Projects".to_string(),
            footer: "Built with Rust and Yew.".to_string(),
            show_all: "Show All Projects".to_string(),
            collapse: "Show Less".to_string(),
            visit_overlay: "Visit Site".to_string(),
            visit_link: "View Project".to_string(),
            loading: "Loading projects...".to_string(),
            load_error: "Failed to load projects. Make sure the page is served over HTTP."
                .to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub catalog_url: String,
    /// Cards shown while collapsed.
    pub initial_limit: usize,
    /// Stagger between neighbouring cards in a row of three.
    pub reveal_step_ms: u32,
    pub refresh_delay_ms: u32,
    pub navbar_threshold: f64,
    /// Keep the opaque navbar background after scrolling back to the top.
    pub sticky_navbar_background: bool,
    pub placeholder_base: String,
    pub animation: AnimationConfig,
    pub labels: Labels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_url: "projects.json".to_string(),
            initial_limit: 6,
            reveal_step_ms: 100,
            refresh_delay_ms: 100,
            navbar_threshold: 50.0,
            sticky_navbar_background: false,
            placeholder_base: "https://placehold.co/600x400/e2e8f0/1e3a8a".to_string(),
            animation: AnimationConfig::default(),
            labels: Labels::default(),
        }
    }
}

impl SiteConfig {
    /// Parses an override block. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Reads the inline config block from the host page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(cfg) => {
                    log::debug!("site config loaded from #{}", CONFIG_ELEMENT_ID);
                    cfg
                }
                Err(e) => {
                    log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.catalog_url, "projects.json");
        assert_eq!(cfg.initial_limit, 6);
        assert_eq!(cfg.reveal_step_ms, 100);
        assert_eq!(cfg.refresh_delay_ms, 100);
        assert_eq!(cfg.navbar_threshold, 50.0);
        assert!(!cfg.sticky_navbar_background);
        assert!(cfg.animation.once);
        assert_eq!(cfg.animation.offset, 100);
        assert_eq!(cfg.animation.duration, 800);
        assert_eq!(cfg.animation.easing, "ease-out-cubic");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"initial_limit": 3, "animation": {"duration": 400}, "labels": {"collapse": "Hide"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.initial_limit, 3);
        assert_eq!(cfg.animation.duration, 400);
        assert_eq!(cfg.animation.offset, 100);
        assert_eq!(cfg.labels.collapse, "Hide");
        assert_eq!(cfg.labels.show_all, Labels::default().show_all);
        assert_eq!(cfg.labels.hero_cta, "See My Work");
        assert_eq!(cfg.catalog_url, "projects.json");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
        assert!(SiteConfig::from_json(r#"{"initial_limit": "six"}"#).is_err());
    }

    #[test]
    fn test_animation_config_serializes_for_aos() {
        let v = serde_json::to_value(AnimationConfig::default()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"once": true, "offset": 100, "duration": 800, "easing": "ease-out-cubic"})
        );
    }
}
