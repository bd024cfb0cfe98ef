//! Event wiring for the sidebar.
//!
//! The host forwards its notifications here: scroll (debounced), resize, toggle and
//! link clicks. Everything runs on the thread that delivers the notification.

use crate::debounce::Debouncer;
use crate::error::EnhanceError;
use crate::sidebar::{NavigationSync, SidebarParts};
use log::debug;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use wayfinder_traits::{PageDocument, PageElement, TaskScheduler, Viewport};
use wayfinder_types::{NavConfig, SectionId};

/// Reject settings that would leave the sidebar unable to find or mark anything.
pub fn validate_config(config: &NavConfig) -> Result<(), EnhanceError> {
    let selectors = [
        ("sidebarSelector", &config.sidebar_selector),
        ("linkSelector", &config.link_selector),
        ("headingSelector", &config.heading_selector),
        ("activeClass", &config.active_class),
    ];
    if let Some((name, _)) = selectors.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(EnhanceError::Config(format!("{} must not be empty", name)));
    }
    if config.active_class.chars().any(char::is_whitespace) {
        return Err(EnhanceError::Config(format!(
            "activeClass must be a single class name, got '{}'",
            config.active_class
        )));
    }
    if !config.lookahead_bias.is_finite() || !config.narrow_max_width.is_finite() {
        return Err(EnhanceError::Config(
            "lookaheadBias and narrowMaxWidth must be finite".to_string(),
        ));
    }
    Ok(())
}

/// Routes page notifications to a shared [`NavigationSync`].
#[derive(Debug)]
pub struct SidebarController<E, V, S: TaskScheduler> {
    sync: Rc<RefCell<NavigationSync<E, V>>>,
    scroll: Debouncer<S>,
}

impl<E, V, S> SidebarController<E, V, S>
where
    E: PageElement + Clone + 'static,
    V: Viewport + 'static,
    S: TaskScheduler,
{
    pub fn new(sync: NavigationSync<E, V>, scheduler: S) -> Self {
        let delay = sync.config().debounce_delay();
        Self {
            sync: Rc::new(RefCell::new(sync)),
            scroll: Debouncer::new(scheduler, delay),
        }
    }

    /// Discover the sidebar in `document` and set it up.
    ///
    /// Returns `None` for pages without a sidebar root.
    pub fn attach<D>(document: &D, viewport: V, scheduler: S, config: NavConfig) -> Option<Self>
    where
        D: PageDocument<Element = E>,
    {
        let parts = SidebarParts::discover(document, &config)?;
        Some(Self::new(NavigationSync::new(parts, viewport, config), scheduler))
    }

    pub fn sync(&self) -> Ref<'_, NavigationSync<E, V>> {
        self.sync.borrow()
    }

    /// Scroll notification: schedule a highlight pass, superseding any pending one.
    ///
    /// The pass reads the scroll offset when it runs, not when it was scheduled.
    pub fn on_scroll(&self) {
        let sync = Rc::clone(&self.sync);
        self.scroll.call_or_log(move || {
            sync.borrow_mut().highlight();
        });
    }

    pub fn on_resize(&self) {
        let mut sync = self.sync.borrow_mut();
        sync.refresh_offsets();
        sync.handle_resize();
    }

    pub fn on_toggle(&self) {
        self.sync.borrow_mut().toggle();
    }

    /// Click on a sidebar link with the given `href`.
    pub fn on_link_click(&self, href: &str) {
        match SectionId::from_fragment(href) {
            Some(target) => self.sync.borrow_mut().activate(target.as_str()),
            None => debug!("Ignoring click on non-fragment link '{}'", href),
        }
    }

    pub fn has_pending_highlight(&self) -> bool {
        self.scroll.is_pending()
    }
}
