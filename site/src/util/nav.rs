//! Described click behavior and in-page navigation.
//!
//! DESIGN
//! ======
//! Components never embed side effects in their click handlers. Each
//! clickable element is given an `Action`, and the markup (`href`, `target`,
//! `rel`) is derived from it. Route changes are left to the router's link
//! interception, external URLs open in a new browsing context through
//! `target="_blank"`, and anchors jump within the current page.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routes::Page;

/// Id of the toolkit section on the home page.
pub const TOOLKIT_ANCHOR: &str = "toolkit-section";

/// What activating an element does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond any attached callback.
    #[default]
    Inert,
    /// Jump to an element id on the current page.
    Anchor(&'static str),
    /// Change route to an internal page.
    Route(Page),
    /// Open a URL in a new browsing context.
    External(&'static str),
}

/// Navigation performed by a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    ScrollTo(&'static str),
    Route(Page),
    OpenExternal(&'static str),
}

impl Action {
    /// Outbound link action. Missing or blank URLs are inert.
    #[must_use]
    pub fn external(url: Option<&'static str>) -> Self {
        match url.map(str::trim) {
            Some(url) if !url.is_empty() => Action::External(url),
            _ => Action::Inert,
        }
    }

    #[must_use]
    pub fn navigation(self) -> Option<Navigation> {
        match self {
            Action::Inert => None,
            Action::Anchor(id) => Some(Navigation::ScrollTo(id)),
            Action::Route(page) => Some(Navigation::Route(page)),
            Action::External(url) => Some(Navigation::OpenExternal(url)),
        }
    }

    /// Link target, or `None` when the element does not navigate.
    #[must_use]
    pub fn href(self) -> Option<String> {
        self.navigation().map(|nav| match nav {
            Navigation::ScrollTo(id) => format!("#{id}"),
            Navigation::Route(page) => page.path().to_owned(),
            Navigation::OpenExternal(url) => url.to_owned(),
        })
    }

    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        matches!(self, Action::External(_)).then_some("_blank")
    }

    #[must_use]
    pub fn rel(self) -> Option<&'static str> {
        matches!(self, Action::External(_)).then_some("noopener noreferrer")
    }
}

/// Scroll the element with `id` into view.
///
/// Browser only; on the server the anchor `href` alone is rendered.
pub fn reveal_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        match doc.get_element_by_id(id) {
            Some(el) => el.scroll_into_view(),
            None => log::warn!("anchor #{id} not found on page"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
