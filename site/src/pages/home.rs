//! Landing page.

use leptos::prelude::*;

use crate::catalog::use_catalog;
use crate::components::actions::{PrimaryAction, SecondaryDarkAction};
use crate::components::investigators::InvestigatorRow;
use crate::components::publications::PublicationList;
use crate::components::sponsor_strip::SponsorStrip;
use crate::components::team_grid::TeamGrid;
use crate::components::toolkit::ToolkitSection;
use crate::util::nav::{Action, TOOLKIT_ANCHOR, reveal_anchor};

/// Home page: hero, sponsors, toolkit, banner, team, publications.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();
    let hero = catalog.hero;
    let banner = catalog.banner;

    // The anchor href already jumps; the callback also scrolls once hydrated.
    let reveal_toolkit = Callback::new(|()| reveal_anchor(TOOLKIT_ANCHOR));

    view! {
        <div class="home-page">
            <div class="hero">
                <div class="hero__col_left">
                    {hero.image.is_present().then(|| view! { <img class="hero__img" src=hero.image.src alt=hero.image.alt/> })}
                </div>
                <div class="hero__col_right">
                    <h1 class="hero__title">{hero.eyebrow}</h1>
                    <h1 class="hero__title">{hero.title}</h1>
                    <p class="hero_desc">{hero.description}</p>
                    <PrimaryAction action=Action::Anchor(TOOLKIT_ANCHOR) on_click=reveal_toolkit>
                        {hero.cta_label}
                    </PrimaryAction>
                </div>
            </div>

            <SponsorStrip sponsors={catalog.sponsors}/>

            <ToolkitSection title={catalog.toolkit_title} entries={catalog.toolkit}/>

            <div class="important">
                <p class="important_desc">{banner.text}</p>
                <div class="important__actions">
                    <SecondaryDarkAction action=Action::Anchor(TOOLKIT_ANCHOR) on_click=reveal_toolkit>
                        {banner.toolkit_label}
                    </SecondaryDarkAction>
                    <SecondaryDarkAction action=Action::external(Some(banner.repository_url))>
                        {banner.repository_label}
                    </SecondaryDarkAction>
                </div>
            </div>

            <div class="team">
                <h1>"Principal Investigators"</h1>
                <InvestigatorRow people={catalog.investigators}/>
                <h1>"Meet our Team"</h1>
                <TeamGrid members={catalog.members}/>
            </div>

            <div class="publication">
                <h1 class="publication__title">"Publications"</h1>
                <PublicationList publications={catalog.publications}/>
            </div>
        </div>
    }
}
