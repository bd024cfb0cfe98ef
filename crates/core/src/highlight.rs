//! Scroll-position bucketing: which section is the reader in?

use wayfinder_types::SectionId;

/// A heading as the highlight pass sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingEntry {
    pub id: SectionId,
    /// Pixels from the top of the document, as last read from the page.
    pub offset: f64,
}

impl HeadingEntry {
    pub fn new(id: impl Into<SectionId>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

/// Index of the current section: the last heading, in document order, whose offset
/// is at or above `scroll_y + bias`.
///
/// Returns `None` when the reader is above every heading.
pub fn current_section(headings: &[HeadingEntry], scroll_y: f64, bias: f64) -> Option<usize> {
    let position = scroll_y + bias;
    headings.iter().rposition(|h| h.offset <= position)
}
