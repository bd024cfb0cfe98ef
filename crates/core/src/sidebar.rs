//! Scroll-synced, collapsible sidebar navigation.
//!
//! [`NavigationSync`] keeps two things consistent with the page:
//!
//! - **Highlight**: the sidebar link pointing at the section the reader is in carries
//!   the active class, and no other link does.
//! - **Visibility**: the nav list is collapsed on narrow viewports and expanded on wide
//!   ones, unless the reader toggles it. Crossing the breakpoint resets the choice.
//!
//! All writes go through [`PageElement`], and a failing write is logged and skipped:
//! nothing here can break the hosting page.

use crate::error::EnhanceError;
use crate::highlight::{HeadingEntry, current_section};
use log::{debug, trace, warn};
use std::collections::HashMap;
use wayfinder_traits::{PageDocument, PageElement, Viewport};
use wayfinder_types::{NavConfig, NavState, NavVisibility, SectionId, WidthClass};

/// The page elements a sidebar is built from.
#[derive(Debug, Clone)]
pub struct SidebarParts<E> {
    pub root: E,
    pub toggle: Option<E>,
    pub glyph: Option<E>,
    pub nav_list: Option<E>,
    pub links: Vec<E>,
    pub headings: Vec<E>,
}

impl<E: PageElement + Clone> SidebarParts<E> {
    /// Look up the sidebar's elements using the configured selectors.
    ///
    /// Returns `None` when the page has no sidebar root; every other part is optional.
    pub fn discover<D>(document: &D, config: &NavConfig) -> Option<Self>
    where
        D: PageDocument<Element = E>,
    {
        let Some(root) = document.query(&config.sidebar_selector) else {
            debug!(
                "No sidebar matching '{}'; navigation sync disabled",
                config.sidebar_selector
            );
            return None;
        };
        let toggle = document.query(&config.toggle_selector);
        let glyph = toggle.as_ref().and_then(|_| {
            document.query(&format!(
                "{} {}",
                config.toggle_selector, config.glyph_selector
            ))
        });
        Some(Self {
            root,
            toggle,
            glyph,
            nav_list: document.query(&config.nav_list_selector),
            links: document.query_all(&config.link_selector),
            headings: document.query_all(&config.heading_selector),
        })
    }
}

/// A sidebar link and the section it points at.
#[derive(Debug, Clone)]
pub struct SidebarLinkEntry<E> {
    /// `None` when the link's `href` is not a same-page fragment.
    pub target: Option<SectionId>,
    pub element: E,
}

/// Keeps the sidebar's highlight and visibility in step with scroll and viewport width.
#[derive(Debug)]
pub struct NavigationSync<E, V> {
    config: NavConfig,
    viewport: V,
    headings: Vec<HeadingEntry>,
    heading_elements: Vec<E>,
    links: Vec<SidebarLinkEntry<E>>,
    link_index: HashMap<SectionId, usize>,
    active: Option<usize>,
    toggle: Option<E>,
    glyph: Option<E>,
    nav_list: Option<E>,
    state: NavState,
}

impl<E: PageElement, V: Viewport> NavigationSync<E, V> {
    /// Build the sync from discovered parts and bring the page into a consistent state:
    /// apply the width-class default visibility, clear any pre-set highlight, then run
    /// one highlight pass for pages that load already scrolled.
    pub fn new(parts: SidebarParts<E>, viewport: V, config: NavConfig) -> Self {
        let mut headings = Vec::with_capacity(parts.headings.len());
        let mut heading_elements = Vec::with_capacity(parts.headings.len());
        for element in parts.headings {
            match element.attribute("id").filter(|id| !id.is_empty()) {
                Some(id) => {
                    headings.push(HeadingEntry::new(id, element.offset_top()));
                    heading_elements.push(element);
                }
                None => trace!("Skipping heading without id"),
            }
        }

        let links: Vec<SidebarLinkEntry<E>> = parts
            .links
            .into_iter()
            .map(|element| SidebarLinkEntry {
                target: element
                    .attribute("href")
                    .and_then(|href| SectionId::from_fragment(&href)),
                element,
            })
            .collect();

        let mut link_index = HashMap::new();
        for (i, link) in links.iter().enumerate() {
            if let Some(target) = &link.target {
                link_index.entry(target.clone()).or_insert(i);
            }
        }

        let width = WidthClass::classify(viewport.inner_width(), config.narrow_max_width);
        let mut sync = Self {
            config,
            viewport,
            headings,
            heading_elements,
            links,
            link_index,
            active: None,
            toggle: parts.toggle,
            glyph: parts.glyph,
            nav_list: parts.nav_list,
            state: NavState::for_width(width),
        };
        debug!(
            "Sidebar attached: {} headings, {} links, initial state {:?}",
            sync.headings.len(),
            sync.links.len(),
            sync.state
        );

        sync.report(sync.apply_visibility());
        sync.report(sync.clear_all_links());
        sync.highlight();
        sync
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn headings(&self) -> &[HeadingEntry] {
        &self.headings
    }

    pub fn links(&self) -> &[SidebarLinkEntry<E>] {
        &self.links
    }

    /// The section whose link is currently highlighted.
    pub fn active_target(&self) -> Option<&SectionId> {
        self.active
            .and_then(|i| self.links.get(i))
            .and_then(|link| link.target.as_ref())
    }

    /// Highlight pass: mark the link for the section at the current scroll position.
    ///
    /// Repeating the pass at an unchanged scroll position writes nothing.
    pub fn highlight(&mut self) -> Option<&SectionId> {
        let scroll_y = self.viewport.scroll_y();
        let current = current_section(&self.headings, scroll_y, self.config.lookahead_bias);
        let section = current.map(|i| self.headings[i].id.clone());
        trace!("Highlight pass at scroll {}: {:?}", scroll_y, section);

        let link = section
            .as_ref()
            .and_then(|id| self.link_index.get(id).copied());
        let result = self.set_active(link);
        self.report(result);
        self.active_target()
    }

    /// Mark the link for `target` active regardless of scroll position.
    ///
    /// Used when the reader clicks a sidebar link; the browser's own fragment
    /// navigation moves the scroll position afterwards.
    pub fn activate(&mut self, target: &str) {
        let link = self.link_index.get(target).copied();
        if link.is_none() {
            debug!("No sidebar link targets '{}'", target);
        }
        let result = self.set_active(link);
        self.report(result);
    }

    /// Flip the nav list between collapsed and expanded.
    ///
    /// Does nothing on pages without both a toggle control and a nav list.
    pub fn toggle(&mut self) {
        if self.toggle.is_none() || self.nav_list.is_none() {
            trace!("Toggle ignored: no toggle control or nav list");
            return;
        }
        self.state.visibility = self.state.visibility.toggled();
        debug!("Sidebar toggled to {:?}", self.state);
        let result = self.apply_visibility();
        self.report(result);
    }

    /// React to a viewport resize.
    ///
    /// Only a change of width class resets visibility; returns whether one happened.
    pub fn handle_resize(&mut self) -> bool {
        let width = WidthClass::classify(
            self.viewport.inner_width(),
            self.config.narrow_max_width,
        );
        if width == self.state.width {
            return false;
        }
        self.state = NavState::for_width(width);
        debug!("Viewport crossed breakpoint; sidebar now {:?}", self.state);
        let result = self.apply_visibility();
        self.report(result);
        true
    }

    /// Re-read heading offsets from the page, e.g. after a reflow.
    pub fn refresh_offsets(&mut self) {
        for (entry, element) in self.headings.iter_mut().zip(&self.heading_elements) {
            entry.offset = element.offset_top();
        }
    }

    fn set_active(&mut self, link: Option<usize>) -> Result<(), EnhanceError> {
        if link == self.active {
            return Ok(());
        }
        let class = &self.config.active_class;
        if let Some(previous) = self.active {
            self.links[previous].element.remove_class(class)?;
            self.active = None;
        }
        if let Some(next) = link {
            self.links[next].element.add_class(class)?;
            self.active = Some(next);
        }
        Ok(())
    }

    fn clear_all_links(&self) -> Result<(), EnhanceError> {
        for link in &self.links {
            if link.element.has_class(&self.config.active_class) {
                link.element.remove_class(&self.config.active_class)?;
            }
        }
        Ok(())
    }

    fn apply_visibility(&self) -> Result<(), EnhanceError> {
        let expanded = self.state.visibility == NavVisibility::Expanded;
        if let Some(nav_list) = &self.nav_list {
            nav_list.set_display(if expanded { None } else { Some("none") })?;
        }
        if let Some(glyph) = &self.glyph {
            glyph.set_text(if expanded {
                &self.config.expanded_glyph
            } else {
                &self.config.collapsed_glyph
            });
        }
        Ok(())
    }

    fn report(&self, result: Result<(), EnhanceError>) {
        if let Err(e) = result {
            warn!("Sidebar update skipped: {}", e);
        }
    }
}
