//! Root application component with routing and the catalog provider.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::catalog::{Catalog, DESDR};
use crate::pages::{
    home::HomePage,
    not_found::NotFoundPage,
    tool::{ReptilePage, SlidersPage, SurveyYourWayPage},
};
use crate::routes::Page;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the built-in catalog to every page and registers one route per
/// `Page`. Unmatched paths render `NotFoundPage`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog: &'static Catalog = &DESDR;
    provide_context(catalog);

    view! {
        <Title text={catalog.site_title}/>
        <Meta name="description" content={catalog.hero.description}/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path={StaticSegment(Page::Home.segment())} view=HomePage/>
                    <Route path={StaticSegment(Page::SurveyYourWay.segment())} view=SurveyYourWayPage/>
                    <Route path={StaticSegment(Page::Reptile.segment())} view=ReptilePage/>
                    <Route path={StaticSegment(Page::Sliders.segment())} view=SlidersPage/>
                </Routes>
            </main>
        </Router>
    }
}
