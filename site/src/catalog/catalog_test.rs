use super::*;
use crate::util::nav::Navigation;

// =============================================================
// Built-in catalog
// =============================================================

#[test]
fn every_detail_page_has_a_toolkit_entry() {
    for page in [Page::SurveyYourWay, Page::Reptile, Page::Sliders] {
        let entry = DESDR.tool(page).expect("toolkit entry");
        assert_eq!(entry.route, page);
        assert!(!entry.details.is_empty());
    }
}

#[test]
fn home_has_no_toolkit_entry() {
    assert!(DESDR.tool(Page::Home).is_none());
}

#[test]
fn reptile_entry_describes_survey_cleanup() {
    let reptile = DESDR.tool(Page::Reptile).unwrap();
    assert_eq!(reptile.name, "Reptile");
    assert!(reptile.details.iter().any(|p| p.contains("clean up survey records")));
}

#[test]
fn deployment_counts_match_live_sites() {
    let counts: Vec<usize> = DESDR.toolkit.iter().map(|t| t.deployed.len()).collect();
    assert_eq!(counts, vec![2, 3, 8]);
}

#[test]
fn builtin_collections_are_populated() {
    assert_eq!(DESDR.sponsors.len(), 6);
    assert_eq!(DESDR.investigators.len(), 3);
    assert_eq!(DESDR.members.len(), 16);
    assert_eq!(DESDR.publications.len(), 25);
}

#[test]
fn unlinked_publications_are_inert() {
    let unlinked: Vec<_> = DESDR.publications.iter().filter(|p| p.link.is_none()).collect();
    assert_eq!(unlinked.len(), 2);
    for publication in unlinked {
        assert_eq!(publication.action(), Action::Inert);
    }
}

#[test]
fn builtin_images_are_present() {
    assert!(DESDR.hero.image.is_present());
    assert!(DESDR.sponsors.iter().all(|s| s.image.is_present()));
    assert!(DESDR.investigators.iter().all(|p| p.image.is_present()));
}

#[test]
fn use_catalog_falls_back_to_builtin_without_provider() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(use_catalog(), &DESDR);
    });
}

#[test]
fn use_catalog_prefers_provided_catalog() {
    let custom: &'static Catalog = Box::leak(Box::new(Catalog { members: &[TeamMemberName("Solo")], ..DESDR }));
    let owner = Owner::new();
    owner.with(|| {
        provide_context(custom);
        assert_eq!(use_catalog().members, &[TeamMemberName("Solo")]);
    });
}

// =============================================================
// Record actions
// =============================================================

#[test]
fn deployment_with_empty_url_is_inert() {
    let link = DeploymentLink { label: "Nigeria", url: "" };
    assert_eq!(link.action(), Action::Inert);
    assert!(link.action().navigation().is_none());
}

#[test]
fn deployment_with_url_opens_externally() {
    let link = DeploymentLink { label: "Zambia", url: "https://example.org/zm" };
    assert_eq!(link.action().navigation(), Some(Navigation::OpenExternal("https://example.org/zm")));
}

#[test]
fn publication_without_link_performs_no_navigation() {
    let publication = Publication { title: "Untitled", authors: None, link: None };
    assert!(publication.action().navigation().is_none());
}

#[test]
fn investigator_opens_profile() {
    let person = DESDR.investigators[0];
    assert_eq!(person.action(), Action::External(person.link));
}

#[test]
fn blank_image_is_absent() {
    assert!(!Image { src: "  ", alt: "x" }.is_present());
    assert!(Image { src: "/images/a.png", alt: "x" }.is_present());
}
