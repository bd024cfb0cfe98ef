use std::time::Duration;
use wayfinder::{
    ManualScheduler, MemoryDocument, MemoryElement, MemoryViewport, NavConfig, PageElement,
    SidebarController,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub type MemorySidebar = SidebarController<MemoryElement, MemoryViewport, ManualScheduler>;

/// A page with a sidebar, built entirely from in-memory elements.
pub struct SidebarPage {
    pub viewport: MemoryViewport,
    pub scheduler: ManualScheduler,
    pub links: Vec<MemoryElement>,
    pub headings: Vec<MemoryElement>,
    pub nav_list: MemoryElement,
    pub glyph: MemoryElement,
    pub document: MemoryDocument,
    pub config: NavConfig,
}

impl SidebarPage {
    /// Headings at the given offsets, each with one sidebar link pointing at it.
    pub fn new(sections: &[(&str, f64)], width: f64) -> Self {
        Self::with_config(sections, width, NavConfig::default())
    }

    pub fn with_config(sections: &[(&str, f64)], width: f64, config: NavConfig) -> Self {
        let headings: Vec<_> = sections
            .iter()
            .map(|(id, offset)| MemoryElement::heading(*id, *offset))
            .collect();
        let links: Vec<_> = sections
            .iter()
            .map(|(id, _)| MemoryElement::with_attribute("href", format!("#{}", id)))
            .collect();
        let nav_list = MemoryElement::new();
        let glyph = MemoryElement::new();
        let document = MemoryDocument::new()
            .with(config.sidebar_selector.clone(), vec![MemoryElement::new()])
            .with(config.toggle_selector.clone(), vec![MemoryElement::new()])
            .with(
                format!("{} {}", config.toggle_selector, config.glyph_selector),
                vec![glyph.clone()],
            )
            .with(config.nav_list_selector.clone(), vec![nav_list.clone()])
            .with(config.link_selector.clone(), links.clone())
            .with(config.heading_selector.clone(), headings.clone());

        Self {
            viewport: MemoryViewport::new(width),
            scheduler: ManualScheduler::new(),
            links,
            headings,
            nav_list,
            glyph,
            document,
            config,
        }
    }

    /// The three-section page used throughout the scenarios.
    pub fn scenario(width: f64) -> Self {
        Self::new(&[("intro", 0.0), ("detail", 500.0), ("summary", 1200.0)], width)
    }

    pub fn attach(&self) -> Option<MemorySidebar> {
        SidebarController::attach(
            &self.document,
            self.viewport.clone(),
            self.scheduler.clone(),
            self.config.clone(),
        )
    }

    /// Scroll and let the debounced highlight pass run.
    pub fn scroll_to(&self, controller: &MemorySidebar, y: f64) {
        self.viewport.set_scroll_y(y);
        controller.on_scroll();
        self.settle();
    }

    /// Advance the clock past the debounce delay.
    pub fn settle(&self) {
        self.scheduler
            .advance(self.config.debounce_delay() + Duration::from_millis(1));
    }

    pub fn resize_to(&self, controller: &MemorySidebar, width: f64) {
        self.viewport.set_inner_width(width);
        controller.on_resize();
    }

    /// `href`s of the links currently carrying the active class.
    pub fn active_links(&self) -> Vec<String> {
        self.links
            .iter()
            .filter(|l| l.has_class(&self.config.active_class))
            .filter_map(|l| l.attribute("href"))
            .collect()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
