//! Core data models for the portfolio page.
//! Project records as loaded from `projects.json` and the catalog reducer
//! that decides which of them are on screen.

use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

use crate::error::{CatalogError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Declared image URL; empty means the placeholder is used straight away.
    #[serde(default)]
    pub image: String,
    pub link: String,
    /// Badges in source order, duplicates kept.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub desc: String,
}

/// Decodes the catalog body.
///
/// The top level must be an array. Each entry is decoded on its own; entries
/// that fail to decode or lack a title or link are dropped with a warning so
/// one bad record never blanks the whole grid.
pub fn parse_catalog(body: &str) -> Result<Vec<ProjectRecord>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray);
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ProjectRecord>(item) {
            Ok(rec) if rec.title.trim().is_empty() => {
                log::warn!("skipping project #{}: empty title", i);
            }
            Ok(rec) if rec.link.trim().is_empty() => {
                log::warn!("skipping project #{} ({}): empty link", i, rec.title);
            }
            Ok(rec) => out.push(rec),
            Err(e) => log::warn!("skipping project #{}: {}", i, e),
        }
    }
    Ok(out)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Holds the logged error text; the page shows the configured label.
    Failed(String),
}

/// What the toggle control should show, when it is shown at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleView {
    ShowAll,
    Collapse,
}

/// One card as it will be rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub record: ProjectRecord,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub projects: Rc<Vec<ProjectRecord>>,
    pub is_expanded: bool,
    pub status: LoadStatus,
    pub initial_limit: usize,
    /// Bumped on every change to the rendered grid.
    pub version: u64,
    /// Set only by the render pass that collapses an expanded grid.
    pub scroll_to_section: bool,
}

impl CatalogState {
    pub fn new(initial_limit: usize) -> Self {
        Self {
            projects: Rc::new(Vec::new()),
            is_expanded: false,
            status: LoadStatus::Loading,
            initial_limit,
            version: 0,
            scroll_to_section: false,
        }
    }

    pub fn limit(&self) -> usize {
        if self.is_expanded {
            self.projects.len()
        } else {
            self.initial_limit.min(self.projects.len())
        }
    }

    pub fn visible(&self) -> &[ProjectRecord] {
        &self.projects[..self.limit()]
    }

    pub fn has_overflow(&self) -> bool {
        self.projects.len() > self.initial_limit
    }

    /// `None` means the control is hidden, whatever the expansion state.
    pub fn toggle_view(&self) -> Option<ToggleView> {
        if !self.has_overflow() {
            return None;
        }
        Some(if self.is_expanded {
            ToggleView::Collapse
        } else {
            ToggleView::ShowAll
        })
    }

    /// Staggered reveal delay for the card at `index`.
    /// Cards that were already on screen before expanding settle immediately.
    pub fn reveal_delay(&self, index: usize, step_ms: u32) -> u32 {
        if self.is_expanded && index < self.initial_limit {
            0
        } else {
            step_ms.saturating_mul((index % 3) as u32)
        }
    }

    pub fn cards(&self, step_ms: u32) -> Vec<CardView> {
        self.visible()
            .iter()
            .enumerate()
            .map(|(index, record)| CardView {
                index,
                record: record.clone(),
                delay_ms: self.reveal_delay(index, step_ms),
            })
            .collect()
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum CatalogAction {
    Loaded(Vec<ProjectRecord>),
    Failed(String),
    Toggle,
}

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CatalogAction::*;
        match action {
            Loaded(projects) => {
                if self.status != LoadStatus::Loading {
                    log::warn!("catalog already settled; ignoring second load");
                    return self;
                }
                let mut new = (*self).clone();
                new.projects = Rc::new(projects);
                new.is_expanded = false;
                new.scroll_to_section = false;
                new.status = LoadStatus::Ready;
                new.version += 1;
                Rc::new(new)
            }
            Failed(msg) => {
                if self.status != LoadStatus::Loading {
                    return self;
                }
                let mut new = (*self).clone();
                new.status = LoadStatus::Failed(msg);
                Rc::new(new)
            }
            Toggle => {
                if self.status != LoadStatus::Ready {
                    return self;
                }
                let mut new = (*self).clone();
                new.scroll_to_section = new.is_expanded;
                new.is_expanded = !new.is_expanded;
                new.version += 1;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> ProjectRecord {
        ProjectRecord {
            title: format!("Project {}", i),
            image: format!("img/{}.png", i),
            link: format!("https://example.com/{}", i),
            tags: vec!["Rust".to_string()],
            desc: String::new(),
        }
    }

    fn loaded(n: usize) -> Rc<CatalogState> {
        Rc::new(CatalogState::new(6)).reduce(CatalogAction::Loaded((0..n).map(record).collect()))
    }

    fn titles(state: &CatalogState) -> Vec<String> {
        state.visible().iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_parse_full_records() {
        let body = r#"[
            {"title": "Shop", "image": "shop.png", "link": "https://shop.test",
             "tags": ["Laravel", "Vue", "Vue"], "desc": "An online shop"}
        ]"#;
        let recs = parse_catalog(body).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].tags, vec!["Laravel", "Vue", "Vue"]);
        assert_eq!(recs[0].desc, "An online shop");
    }

    #[test]
    fn test_parse_defaults_optional_fields() {
        let recs = parse_catalog(r#"[{"title": "Bare", "link": "https://bare.test"}]"#).unwrap();
        assert_eq!(recs[0].image, "");
        assert!(recs[0].tags.is_empty());
        assert_eq!(recs[0].desc, "");
    }

    #[test]
    fn test_parse_skips_invalid_entries_keeps_order() {
        let body = r#"[
            {"title": "A", "link": "https://a.test"},
            {"title": "", "link": "https://nope.test"},
            {"title": "No link"},
            {"title": "Bad tags", "link": "https://b.test", "tags": "oops"},
            42,
            {"title": "B", "link": "https://b.test"}
        ]"#;
        let recs = parse_catalog(body).unwrap();
        let names: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"projects": []}"#),
            Err(CatalogError::NotAnArray)
        ));
        assert!(matches!(parse_catalog("<html>"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_initial_state_is_collapsed_and_loading() {
        let s = CatalogState::new(6);
        assert_eq!(s.status, LoadStatus::Loading);
        assert!(!s.is_expanded);
        assert!(s.visible().is_empty());
        assert_eq!(s.toggle_view(), None);
    }

    #[test]
    fn test_small_catalog_hides_toggle() {
        for n in 0..=6 {
            let s = loaded(n);
            assert_eq!(s.visible().len(), n);
            assert_eq!(s.toggle_view(), None, "n = {}", n);
        }
    }

    #[test]
    fn test_large_catalog_toggles_between_prefixes() {
        for n in [7, 8, 20] {
            let s = loaded(n);
            assert_eq!(s.visible().len(), 6);
            assert_eq!(s.toggle_view(), Some(ToggleView::ShowAll));

            let s = s.reduce(CatalogAction::Toggle);
            assert_eq!(s.visible().len(), n);
            assert_eq!(s.toggle_view(), Some(ToggleView::Collapse));

            let s = s.reduce(CatalogAction::Toggle);
            assert_eq!(s.visible().len(), 6);
            assert_eq!(s.toggle_view(), Some(ToggleView::ShowAll));
        }
    }

    #[test]
    fn test_eight_record_scenario() {
        let s = loaded(8);
        assert_eq!(titles(&s), (0..6).map(|i| format!("Project {}", i)).collect::<Vec<_>>());
        let s = s.reduce(CatalogAction::Toggle);
        assert_eq!(titles(&s), (0..8).map(|i| format!("Project {}", i)).collect::<Vec<_>>());
        let s = s.reduce(CatalogAction::Toggle);
        assert_eq!(titles(&s), (0..6).map(|i| format!("Project {}", i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_eight_record_scenario_scrolls_on_collapse_only() {
        let s = loaded(8);
        assert!(!s.scroll_to_section);

        let s = s.reduce(CatalogAction::Toggle);
        assert_eq!(s.visible().len(), 8);
        assert_eq!(s.toggle_view(), Some(ToggleView::Collapse));
        assert!(!s.scroll_to_section);

        let s = s.reduce(CatalogAction::Toggle);
        assert_eq!(titles(&s), (0..6).map(|i| format!("Project {}", i)).collect::<Vec<_>>());
        assert_eq!(s.toggle_view(), Some(ToggleView::ShowAll));
        assert!(s.scroll_to_section);

        // expanding again clears it
        let s = s.reduce(CatalogAction::Toggle);
        assert!(!s.scroll_to_section);
    }

    #[test]
    fn test_reveal_delay_saturates_on_huge_step() {
        let s = loaded(8);
        assert_eq!(s.reveal_delay(2, u32::MAX), u32::MAX);
        assert_eq!(s.reveal_delay(1, u32::MAX), u32::MAX);
        assert_eq!(s.reveal_delay(3, u32::MAX), 0);
    }

    #[test]
    fn test_cards_are_idempotent() {
        let s = loaded(9);
        assert_eq!(s.cards(100), s.cards(100));
    }

    #[test]
    fn test_reveal_delays_collapsed() {
        let s = loaded(8);
        let delays: Vec<u32> = s.cards(100).iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 0, 100, 200]);
    }

    #[test]
    fn test_reveal_delays_expanded_settle_existing_cards() {
        let s = loaded(9).reduce(CatalogAction::Toggle);
        let delays: Vec<u32> = s.cards(100).iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 0, 0, 0, 0, 0, 0, 100, 200]);
    }

    #[test]
    fn test_failure_keeps_catalog_empty() {
        let s = Rc::new(CatalogState::new(6)).reduce(CatalogAction::Failed("HTTP 404".into()));
        assert_eq!(s.status, LoadStatus::Failed("HTTP 404".into()));
        assert!(s.visible().is_empty());
        assert_eq!(s.toggle_view(), None);
    }

    #[test]
    fn test_toggle_ignored_until_ready() {
        let s = Rc::new(CatalogState::new(6));
        let after = s.clone().reduce(CatalogAction::Toggle);
        assert!(Rc::ptr_eq(&s, &after));
    }

    #[test]
    fn test_catalog_populated_once() {
        let s = loaded(8).reduce(CatalogAction::Toggle);
        let version = s.version;
        let s = s.reduce(CatalogAction::Loaded(vec![record(99)]));
        assert_eq!(s.projects.len(), 8);
        assert!(s.is_expanded);
        assert_eq!(s.version, version);
        let s = s.reduce(CatalogAction::Failed("late".into()));
        assert_eq!(s.status, LoadStatus::Ready);
    }

    #[test]
    fn test_version_bumps_on_render_changes() {
        let s = loaded(8);
        assert_eq!(s.version, 1);
        let s = s.reduce(CatalogAction::Toggle);
        assert_eq!(s.version, 2);
    }
}
