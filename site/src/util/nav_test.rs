use super::*;

#[test]
fn default_action_is_inert() {
    assert_eq!(Action::default(), Action::Inert);
    assert!(Action::Inert.navigation().is_none());
    assert!(Action::Inert.href().is_none());
    assert!(Action::Inert.target().is_none());
}

#[test]
fn external_with_blank_or_missing_url_is_inert() {
    assert_eq!(Action::external(None), Action::Inert);
    assert_eq!(Action::external(Some("")), Action::Inert);
    assert_eq!(Action::external(Some("   ")), Action::Inert);
}

#[test]
fn external_opens_new_context() {
    let action = Action::external(Some("https://example.org"));
    assert_eq!(action.href().as_deref(), Some("https://example.org"));
    assert_eq!(action.target(), Some("_blank"));
    assert_eq!(action.rel(), Some("noopener noreferrer"));
    assert_eq!(action.navigation(), Some(Navigation::OpenExternal("https://example.org")));
}

#[test]
fn anchor_scrolls_without_changing_route() {
    let action = Action::Anchor(TOOLKIT_ANCHOR);
    assert_eq!(action.href().as_deref(), Some("#toolkit-section"));
    assert_eq!(action.navigation(), Some(Navigation::ScrollTo("toolkit-section")));
    assert!(action.target().is_none());
}

#[test]
fn route_changes_route_in_same_context() {
    let action = Action::Route(Page::Sliders);
    assert_eq!(action.href().as_deref(), Some("/sliders"));
    assert_eq!(action.navigation(), Some(Navigation::Route(Page::Sliders)));
    assert!(action.target().is_none());
    assert!(action.rel().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reveal_anchor_is_noop_off_browser() {
    reveal_anchor(TOOLKIT_ANCHOR);
    reveal_anchor("missing");
}
