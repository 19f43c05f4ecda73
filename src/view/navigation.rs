// SPDX-License-Identifier: MIT

//! Active-state derivation for the top-level navigation

use once_cell::sync::Lazy;
use serde::Serialize;

/// A static navigation link: text and target, no request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub text: String,
    pub href: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// A link annotated with whether it matches the current request path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationEntry {
    pub text: String,
    pub href: String,
    pub active: bool,
}

/// The service's top-level links, in display order
static PRIMARY_LINKS: Lazy<Vec<NavLink>> = Lazy::new(|| {
    vec![
        NavLink::new("Projects home", "/home"),
        NavLink::new("Exemptions", "/exemptions"),
        NavLink::new("Marine licences", "/marine-licences"),
        NavLink::new("Help", "/help"),
    ]
});

/// The default top-level link list
pub fn primary_links() -> &'static [NavLink] {
    &PRIMARY_LINKS
}

/// Annotate `links` against the current request path.
///
/// An entry is active only when its href equals `current_path` exactly, so
/// at most one entry comes back active for a list of distinct hrefs. The
/// root path `/` matches only a link whose href is literally `/`. Output
/// order and length always match the input.
pub fn build_navigation(links: &[NavLink], current_path: &str) -> Vec<NavigationEntry> {
    links
        .iter()
        .map(|link| NavigationEntry {
            text: link.text.clone(),
            href: link.href.clone(),
            active: link.href == current_path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_entry_active_on_match() {
        let entries = build_navigation(primary_links(), "/home");

        let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/home");
        assert_eq!(active[0].text, "Projects home");
    }

    #[test]
    fn test_no_entry_active_on_unknown_path() {
        let entries = build_navigation(primary_links(), "/unknown");
        assert!(entries.iter().all(|e| !e.active));
    }

    #[test]
    fn test_root_path_does_not_match_home() {
        let entries = build_navigation(primary_links(), "/");
        assert!(entries.iter().all(|e| !e.active));
    }

    #[test]
    fn test_order_and_length_preserved() {
        let links = vec![
            NavLink::new("B", "/b"),
            NavLink::new("A", "/a"),
            NavLink::new("C", "/c"),
        ];

        let entries = build_navigation(&links, "/a");
        assert_eq!(entries.len(), links.len());
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "A", "C"]);
        assert!(entries[1].active);
        assert!(!entries[0].active && !entries[2].active);
    }

    #[test]
    fn test_empty_link_list() {
        let entries = build_navigation(&[], "/home");
        assert!(entries.is_empty());
    }
}
