//! Fallback for unregistered routes.

use leptos::prelude::*;

use crate::components::actions::SecondaryLightAction;
use crate::routes::Page;
use crate::util::nav::Action;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__desc">"The page you are looking for does not exist."</p>
            <SecondaryLightAction action=Action::Route(Page::Home)>"Back to DESDR \u{2192}"</SecondaryLightAction>
        </div>
    }
}
