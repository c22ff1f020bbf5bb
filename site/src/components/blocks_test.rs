use super::*;
use crate::catalog::{DESDR, SponsorAsset, TeamMemberName};

#[test]
fn render_blocks_produces_one_block_per_record_in_order() {
    let records = ["a", "b", "c"];
    let blocks = render_blocks(&records, |position, record| format!("{position}:{record}"));
    assert_eq!(blocks, vec!["0:a", "1:b", "2:c"]);
}

#[test]
fn render_blocks_on_empty_input_is_empty() {
    let records: [TeamMemberName; 0] = [];
    let blocks = render_blocks(&records, |_, member| member.0);
    assert!(blocks.is_empty());
}

#[test]
fn render_blocks_keeps_duplicates() {
    let a = SponsorAsset { image: crate::catalog::Image { src: "/a.png", alt: "a" } };
    let b = SponsorAsset { image: crate::catalog::Image { src: "/b.png", alt: "b" } };
    let blocks = render_blocks(&[a, b, a], |_, sponsor| sponsor.image.src);
    assert_eq!(blocks, vec!["/a.png", "/b.png", "/a.png"]);
}

#[test]
fn render_blocks_matches_length_of_every_builtin_collection() {
    assert_eq!(render_blocks(DESDR.sponsors, |_, _| ()).len(), DESDR.sponsors.len());
    assert_eq!(render_blocks(DESDR.toolkit, |_, _| ()).len(), DESDR.toolkit.len());
    assert_eq!(render_blocks(DESDR.investigators, |_, _| ()).len(), DESDR.investigators.len());
    assert_eq!(render_blocks(DESDR.members, |_, _| ()).len(), DESDR.members.len());
    assert_eq!(render_blocks(DESDR.publications, |_, _| ()).len(), DESDR.publications.len());
}

#[test]
fn numbered_title_pads_ordinal() {
    assert_eq!(numbered_title(0, "Survey Your Way"), "01. Survey Your Way \u{2192}");
    assert_eq!(numbered_title(11, "Twelve"), "12. Twelve \u{2192}");
}

#[test]
fn arrow_label_appends_arrow() {
    assert_eq!(arrow_label("Congo"), "Congo \u{2192}");
}
