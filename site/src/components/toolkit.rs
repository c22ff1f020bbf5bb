//! Toolkit section: one card per tool with its deployment links.

use leptos::prelude::*;

use crate::catalog::{Image, ToolkitEntry};
use crate::components::actions::SecondaryLightAction;
use crate::components::blocks::{arrow_label, numbered_title, render_blocks};
use crate::util::nav::{Action, TOOLKIT_ANCHOR};

/// Toolkit section. Carries the `toolkit-section` id that the hero and
/// banner actions jump to.
#[component]
pub fn ToolkitSection(title: &'static str, entries: &'static [ToolkitEntry]) -> impl IntoView {
    let cards = render_blocks(entries, |position, entry| {
        view! { <ToolkitCard position=position entry=entry/> }
    });

    view! {
        <div class="toolkit" id=TOOLKIT_ANCHOR>
            <h1 class="toolkit__title">{title}</h1>
            <div class="toolkit__row">{cards}</div>
        </div>
    }
}

/// A single tool card.
///
/// The title routes to the tool's detail page; each deployment opens its
/// live instance in a new tab, or stays inert when it has no URL yet.
#[component]
pub fn ToolkitCard(position: usize, entry: &'static ToolkitEntry) -> impl IntoView {
    let title = numbered_title(position, entry.name);
    let image = entry
        .image
        .filter(Image::is_present)
        .map(|image| view! { <img class="toolkit__img" src=image.src alt=image.alt/> });
    let deployments = render_blocks(entry.deployed, |_, link| {
        let label = arrow_label(link.label);
        view! { <SecondaryLightAction action=link.action()>{label}</SecondaryLightAction> }
    });

    view! {
        <div class="toolkit__col">
            <SecondaryLightAction action=Action::Route(entry.route)>{title}</SecondaryLightAction>
            {image}
            <p class="toolkit__subtitle">{entry.subtitle}</p>
            <p class="toolkit__desc">{entry.description}</p>
            <div class="toolkit__deployed">{deployments}</div>
        </div>
    }
}
