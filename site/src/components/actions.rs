//! Clickable primitives: primary, secondary dark, and secondary light actions.
//!
//! DESIGN
//! ======
//! All three share one contract. The `action` decides the markup: a
//! navigating action renders an `<a>` carrying `href`, `target`, and `rel`,
//! while `Action::Inert` renders a plain button. An optional `on_click`
//! callback runs alongside whatever default navigation the link performs.

use leptos::prelude::*;

use crate::util::nav::Action;

/// Main call to action (hero).
#[component]
pub fn PrimaryAction(
    #[prop(optional)] action: Action,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    action_view("btn_primary", action, on_click, children)
}

/// Dark secondary action (banner).
#[component]
pub fn SecondaryDarkAction(
    #[prop(optional)] action: Action,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    action_view("btn_secondary_dark", action, on_click, children)
}

/// Light secondary action (card titles, deployment links).
#[component]
pub fn SecondaryLightAction(
    #[prop(optional)] action: Action,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    action_view("btn_secondary_light", action, on_click, children)
}

/// Block-level wrapper making a whole card clickable.
///
/// Renders a `<div>` when the action is inert so unlinked cards keep their
/// layout without looking interactive.
#[component]
pub fn ActionBlock(
    class_name: &'static str,
    #[prop(optional)] action: Action,
    children: Children,
) -> impl IntoView {
    match action.href() {
        Some(href) => view! {
            <a class=class_name href=href target=action.target() rel=action.rel()>
                {children()}
            </a>
        }
        .into_any(),
        None => view! { <div class=class_name>{children()}</div> }.into_any(),
    }
}

fn action_view(class: &'static str, action: Action, on_click: Option<Callback<()>>, children: Children) -> AnyView {
    let run_callback = move |_: leptos::ev::MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.run(());
        }
    };

    match action.href() {
        Some(href) => view! {
            <a class=class href=href target=action.target() rel=action.rel() on:click=run_callback>
                {children()}
            </a>
        }
        .into_any(),
        None => view! {
            <button type="button" class=class on:click=run_callback>
                {children()}
            </button>
        }
        .into_any(),
    }
}
