//! Principal investigator cards.

use leptos::prelude::*;

use crate::catalog::PersonEntry;
use crate::components::actions::ActionBlock;
use crate::components::blocks::{numbered_title, render_blocks};

/// Row of investigator cards; each card opens the person's profile.
#[component]
pub fn InvestigatorRow(people: &'static [PersonEntry]) -> impl IntoView {
    let cards = render_blocks(people, |position, person| {
        let title = numbered_title(position, person.name);
        let image = person.image;
        view! {
            <ActionBlock class_name="team__col" action=person.action()>
                <div class="div_secondary_light">{title}</div>
                {image.is_present().then(|| view! { <img class="team__img" src=image.src alt=image.alt/> })}
                <p class="team__affiliation">{person.affiliation}</p>
            </ActionBlock>
        }
    });

    view! { <div class="team__row">{cards}</div> }
}
