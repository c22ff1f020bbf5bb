//! Static content catalog.
//!
//! DESIGN
//! ======
//! Every piece of text, image path, and outbound link on the site is a
//! record in one `Catalog`. Records borrow `'static` data, so the built-in
//! catalog is assembled at compile time and shared read-only for the life
//! of the process. Required fields are plain values and optional ones are
//! `Option`, which keeps a malformed record a type error.
//!
//! The root component provides the catalog through context; sections read it
//! with `use_catalog`.

mod desdr;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::routes::Page;
use crate::util::nav::Action;

pub use desdr::DESDR;

/// An image reference. A blank `src` means the asset is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

impl Image {
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.src.trim().is_empty()
    }
}

/// One logo in the sponsor strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SponsorAsset {
    pub image: Image,
}

/// A live, country- or platform-specific instance of a tool.
///
/// An empty `url` marks a deployment that is not available yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentLink {
    pub label: &'static str,
    pub url: &'static str,
}

impl DeploymentLink {
    /// Click behavior: open the deployment, or nothing when there is no URL.
    #[must_use]
    pub fn action(&self) -> Action {
        Action::external(Some(self.url))
    }
}

/// One of the featured tools, with its own detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolkitEntry {
    pub name: &'static str,
    pub image: Option<Image>,
    pub route: Page,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Paragraphs for the detail page.
    pub details: &'static [&'static str],
    pub deployed: &'static [DeploymentLink],
}

/// A principal investigator card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonEntry {
    pub name: &'static str,
    pub image: Image,
    pub affiliation: &'static str,
    pub link: &'static str,
}

impl PersonEntry {
    #[must_use]
    pub fn action(&self) -> Action {
        Action::external(Some(self.link))
    }
}

/// A team member label. Duplicates are kept as entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMemberName(pub &'static str);

/// A paper, talk, or article. Entries without a link are not clickable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub authors: Option<&'static str>,
    pub link: Option<&'static str>,
}

impl Publication {
    #[must_use]
    pub fn action(&self) -> Action {
        Action::external(self.link)
    }
}

/// Copy for the home page hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Image,
    pub cta_label: &'static str,
}

/// Copy for the call-to-action banner between the toolkit and the team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    pub text: &'static str,
    pub toolkit_label: &'static str,
    pub repository_label: &'static str,
    pub repository_url: &'static str,
}

/// All site content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub site_title: &'static str,
    pub hero: Hero,
    pub sponsors: &'static [SponsorAsset],
    pub toolkit_title: &'static str,
    pub toolkit: &'static [ToolkitEntry],
    pub banner: Banner,
    pub investigators: &'static [PersonEntry],
    pub members: &'static [TeamMemberName],
    pub publications: &'static [Publication],
}

impl Catalog {
    /// Toolkit entry whose detail page is `page`.
    #[must_use]
    pub fn tool(&self, page: Page) -> Option<&'static ToolkitEntry> {
        self.toolkit.iter().find(|entry| entry.route == page)
    }
}

/// Catalog provided by the nearest ancestor, or the built-in one.
pub fn use_catalog() -> &'static Catalog {
    use_context::<&'static Catalog>().unwrap_or(&DESDR)
}
