//! Route table for the site's pages.
//!
//! `Page` is the only way to name an internal navigation target, so a
//! toolkit entry pointing at a page that is not registered fails to compile.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A routable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    SurveyYourWay,
    Reptile,
    Sliders,
}

impl Page {
    /// Every registered page, in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::SurveyYourWay, Page::Reptile, Page::Sliders];

    /// Path segment used when registering the route.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::SurveyYourWay => "survey-your-way",
            Page::Reptile => "reptile",
            Page::Sliders => "sliders",
        }
    }

    /// Absolute path for links.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::SurveyYourWay => "/survey-your-way",
            Page::Reptile => "/reptile",
            Page::Sliders => "/sliders",
        }
    }

    /// Resolve a request path to a page. A single trailing slash is ignored,
    /// which lets the server redirect `/reptile/` to `/reptile`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }
}
