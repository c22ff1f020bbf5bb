//! Publication cards.

use leptos::prelude::*;

use crate::catalog::Publication;
use crate::components::actions::ActionBlock;
use crate::components::blocks::render_blocks;

/// One card per publication. Cards with a link open it in a new tab; the
/// rest render as plain blocks.
#[component]
pub fn PublicationList(publications: &'static [Publication]) -> impl IntoView {
    let cards = render_blocks(publications, |_, publication| {
        let authors = publication
            .authors
            .map(|authors| view! { <p class="publication__authors">{authors}</p> });
        view! {
            <ActionBlock class_name="div_secondary_dark publication__card" action=publication.action()>
                <h3 class="publication__name">{publication.title}</h3>
                {authors}
            </ActionBlock>
        }
    });

    view! { <div class="publication__list">{cards}</div> }
}
