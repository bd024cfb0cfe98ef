//! Heading identifiers and self-link anchors.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use wayfinder_types::SectionId;

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("BUG: invalid NON_SLUG_RE regex literal"));

/// Class given to every generated anchor link.
pub const ANCHOR_CLASS: &str = "anchor-link";

/// Visible text of every generated anchor link.
pub const ANCHOR_LABEL: &str = "link";

const FALLBACK_SLUG: &str = "section";

/// A heading as found in the page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingSource {
    /// The existing `id` attribute. Empty strings count as absent.
    pub id: Option<String>,
    pub text: String,
}

impl HeadingSource {
    pub fn new(id: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            id: id.map(str::to_string),
            text: text.into(),
        }
    }

    fn existing_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

/// What to do with one heading: the id it ends up with and the anchor to append.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorPlan {
    pub id: SectionId,
    /// `true` when the heading had no id and must be given `id`.
    pub assign_id: bool,
    pub href: String,
    pub title: String,
}

/// Derive an identifier from heading text: lower-case ASCII letters and digits
/// separated by single hyphens.
///
/// Anything outside `[a-z0-9]` after lower-casing is a separator, so non-ASCII
/// letters split words rather than being transliterated.
pub fn slugify_heading(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = slug::slugify(NON_SLUG_RE.replace_all(&lowered, "-"));
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Plan ids and anchors for the headings of a page, in document order.
///
/// Generated ids never collide with an id already present on the page or with one
/// generated earlier; collisions get `-2`, `-3`, ... appended.
pub fn plan_anchors(headings: &[HeadingSource]) -> Vec<AnchorPlan> {
    let mut taken: HashSet<String> = headings
        .iter()
        .filter_map(|h| h.existing_id().map(str::to_string))
        .collect();

    headings
        .iter()
        .map(|heading| {
            let (id, assign_id) = match heading.existing_id() {
                Some(id) => (id.to_string(), false),
                None => {
                    let id = unique_id(&slugify_heading(&heading.text), &taken);
                    taken.insert(id.clone());
                    (id, true)
                }
            };
            let id = SectionId::from(id);
            AnchorPlan {
                href: id.to_fragment(),
                title: format!("Link to {}", heading.text.trim()),
                id,
                assign_id,
            }
        })
        .collect()
}

fn unique_id(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}
