//! Grid of team member names.

use leptos::prelude::*;

use crate::catalog::TeamMemberName;
use crate::components::blocks::render_blocks;

/// Plain labels, no action.
#[component]
pub fn TeamGrid(members: &'static [TeamMemberName]) -> impl IntoView {
    let cells = render_blocks(members, |_, member| {
        view! { <div class="div_secondary_light team__member">{member.0}</div> }
    });

    view! { <div class="team__grid">{cells}</div> }
}
