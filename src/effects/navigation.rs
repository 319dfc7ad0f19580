use yew::prelude::*;
use yew_router::prelude::*;

use crate::effects::smooth_scroll::{scroll_to_anchor, DEFAULT_DURATION_MS};
use crate::Route;

/// Where an href leads, and therefore how to get there.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    /// A page this app renders itself: pushed onto the router history.
    Route(Route),
    /// An element on the current page.
    Anchor(String),
    /// Anything else: handed to the browser as a full page load.
    Document(String),
}

impl Destination {
    /// Classifies `href`. Blank targets lead nowhere.
    pub fn resolve(href: &str) -> Option<Destination> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        if let Some(anchor) = href.strip_prefix('#') {
            return (!anchor.is_empty()).then(|| Destination::Anchor(anchor.to_string()));
        }

        if href.starts_with("//") || has_scheme(href) || !href.starts_with('/') {
            return Some(Destination::Document(href.to_string()));
        }

        // Query strings and fragments go through the browser untouched.
        if href.contains(['?', '#']) {
            return Some(Destination::Document(href.to_string()));
        }

        match Route::recognize(href) {
            Some(route) if route != Route::NotFound => Some(Destination::Route(route)),
            _ => Some(Destination::Document(href.to_string())),
        }
    }
}

fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(idx) if idx > 0 => {
            let scheme = &href[..idx];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

fn load_document(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            gloo_console::error!("Navigation failed", e);
        }
    }
}

pub fn follow(destination: Destination, navigator: Option<&Navigator>) {
    match destination {
        Destination::Route(route) => match navigator {
            Some(navigator) => navigator.push(&route),
            None => load_document(&route.to_path()),
        },
        Destination::Anchor(anchor) => {
            if let Some(scroll) = scroll_to_anchor(&anchor, DEFAULT_DURATION_MS) {
                scroll.detach();
            }
        }
        Destination::Document(url) => load_document(&url),
    }
}

/// Navigation callback that picks client-side routing when the app can render
/// the target itself and a full page load otherwise.
#[hook]
pub fn use_smart_navigation() -> Callback<String> {
    let navigator = use_navigator();
    Callback::from(move |href: String| match Destination::resolve(&href) {
        Some(destination) => {
            log::debug!("Navigating to {:?}", destination);
            follow(destination, navigator.as_ref());
        }
        None => log::debug!("Ignoring blank navigation target"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_become_client_side_routes() {
        assert_eq!(Destination::resolve("/signup"), Some(Destination::Route(Route::Signup)));
        assert_eq!(Destination::resolve("/demo"), Some(Destination::Route(Route::Demo)));
        assert_eq!(Destination::resolve("/"), Some(Destination::Route(Route::Home)));
    }

    #[test]
    fn unknown_paths_load_the_document() {
        assert_eq!(
            Destination::resolve("/pricing"),
            Some(Destination::Document("/pricing".to_string()))
        );
        assert_eq!(
            Destination::resolve("/signup?plan=pro"),
            Some(Destination::Document("/signup?plan=pro".to_string()))
        );
    }

    #[test]
    fn absolute_urls_load_the_document() {
        for href in [
            "https://example.com/demo",
            "mailto:sales@example.com",
            "//cdn.example.com/video",
            "docs/getting-started",
        ] {
            assert_eq!(Destination::resolve(href), Some(Destination::Document(href.to_string())));
        }
    }

    #[test]
    fn fragments_scroll_in_page() {
        assert_eq!(
            Destination::resolve("#pricing"),
            Some(Destination::Anchor("pricing".to_string()))
        );
        assert_eq!(Destination::resolve("#"), None);
    }

    #[test]
    fn blank_targets_lead_nowhere() {
        assert_eq!(Destination::resolve(""), None);
        assert_eq!(Destination::resolve("   "), None);
    }

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("https://x"));
        assert!(has_scheme("tel:+123"));
        assert!(!has_scheme("/a:b"));
        assert!(!has_scheme(":nope"));
        assert!(!has_scheme("1http://x"));
    }
}
