//! Strip of sponsor logos under the hero.

use leptos::prelude::*;

use crate::catalog::SponsorAsset;
use crate::components::blocks::render_blocks;

/// One logo per sponsor, in catalog order. Logos with no image are skipped.
#[component]
pub fn SponsorStrip(sponsors: &'static [SponsorAsset]) -> impl IntoView {
    let logos = render_blocks(sponsors, |_, sponsor| {
        let image = sponsor.image;
        image
            .is_present()
            .then(|| view! { <img class="sponsors__logo" src=image.src alt=image.alt/> })
    });

    view! { <div class="sponsors">{logos}</div> }
}
