//! Tool detail pages.
//!
//! DESIGN
//! ======
//! The three tool pages share one layout driven by the toolkit entry whose
//! route matches the page, so each page's deployment buttons are the same
//! links shown on its home page card.

use leptos::prelude::*;

use crate::catalog::use_catalog;
use crate::components::actions::SecondaryLightAction;
use crate::components::blocks::{arrow_label, render_blocks};
use crate::pages::not_found::NotFoundPage;
use crate::routes::Page;

/// Detail page for the toolkit entry routed at `page`.
///
/// Falls back to the not-found content when the catalog has no entry for it.
#[component]
pub fn ToolPage(page: Page) -> impl IntoView {
    let Some(entry) = use_catalog().tool(page) else {
        return view! { <NotFoundPage/> }.into_any();
    };

    let paragraphs = render_blocks(entry.details, |_, paragraph| {
        view! { <p class="page__desc">{*paragraph}</p> }
    });
    let deployments = render_blocks(entry.deployed, |_, link| {
        let label = arrow_label(&format!("{} {}", link.label, entry.name));
        view! { <SecondaryLightAction action=link.action()>{label}</SecondaryLightAction> }
    });

    view! {
        <div class="page">
            <h1 class="page__title">{entry.name}</h1>
            {paragraphs}
            <div class="page__deployed">{deployments}</div>
        </div>
    }
    .into_any()
}

#[component]
pub fn SurveyYourWayPage() -> impl IntoView {
    view! { <ToolPage page=Page::SurveyYourWay/> }
}

#[component]
pub fn ReptilePage() -> impl IntoView {
    view! { <ToolPage page=Page::Reptile/> }
}

#[component]
pub fn SlidersPage() -> impl IntoView {
    view! { <ToolPage page=Page::Sliders/> }
}
