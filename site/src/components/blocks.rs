//! List-to-block rendering shared by every catalog section.

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;

/// Map `records` to one block each, preserving order.
///
/// `to_block` receives the record's position, which doubles as its key:
/// catalog content never reorders, so position is stable. Empty input yields
/// an empty `Vec`.
pub fn render_blocks<'a, T, B>(records: &'a [T], mut to_block: impl FnMut(usize, &'a T) -> B) -> Vec<B> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| to_block(position, record))
        .collect()
}

/// Card title with its one-based ordinal, e.g. `"02. Reptile →"`.
#[must_use]
pub fn numbered_title(position: usize, name: &str) -> String {
    format!("{:02}. {name} \u{2192}", position + 1)
}

/// Link label with a trailing arrow, e.g. `"Zambia →"`.
#[must_use]
pub fn arrow_label(label: &str) -> String {
    format!("{label} \u{2192}")
}
