mod common;

use common::{SidebarPage, TestResult, init_logging};
use std::time::Duration;
use wayfinder::{
    ManualScheduler, MemoryDocument, MemoryViewport, NavConfig, NavState, NavVisibility,
    PageElement, SectionId, SidebarController, WidthClass,
};

#[test]
fn test_scroll_scenarios() -> TestResult {
    init_logging();
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;

    page.scroll_to(&controller, 550.0);
    assert_eq!(page.active_links(), vec!["#detail"]);

    page.scroll_to(&controller, 50.0);
    assert_eq!(page.active_links(), vec!["#intro"]);

    page.scroll_to(&controller, 1150.0);
    assert_eq!(page.active_links(), vec!["#summary"]);
    Ok(())
}

#[test]
fn test_top_of_page_has_no_active_link() -> TestResult {
    init_logging();
    // Headings start below the lookahead window.
    let page = SidebarPage::new(&[("intro", 300.0), ("detail", 900.0)], 1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;

    page.scroll_to(&controller, 850.0);
    assert_eq!(page.active_links(), vec!["#detail"]);

    page.scroll_to(&controller, -10.0);
    assert!(page.active_links().is_empty());
    assert_eq!(controller.sync().active_target(), None);
    Ok(())
}

#[test]
fn test_initial_pass_covers_preloaded_scroll() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    page.viewport.set_scroll_y(1300.0);

    let controller = page.attach().ok_or("sidebar should attach")?;

    assert_eq!(page.active_links(), vec!["#summary"]);
    assert_eq!(
        controller.sync().active_target(),
        Some(&SectionId::new("summary"))
    );
    assert_eq!(page.scheduler.executed_count(), 0);
    Ok(())
}

#[test]
fn test_passes_within_a_section_match_a_single_pass() -> TestResult {
    for (first, second) in [(420.0, 480.0), (500.0, 1050.0), (0.0, 350.0)] {
        let stepped = SidebarPage::scenario(1024.0);
        let stepped_controller = stepped.attach().ok_or("sidebar should attach")?;
        stepped.scroll_to(&stepped_controller, first);
        stepped.scroll_to(&stepped_controller, second);

        let direct = SidebarPage::scenario(1024.0);
        let direct_controller = direct.attach().ok_or("sidebar should attach")?;
        direct.scroll_to(&direct_controller, second);

        assert_eq!(stepped.active_links(), direct.active_links());
    }
    Ok(())
}

#[test]
fn test_at_most_one_link_active_across_scroll_sweep() -> TestResult {
    let page = SidebarPage::new(
        &[
            ("a", 0.0),
            ("b", 180.0),
            ("c", 181.0),
            ("d", 960.0),
            ("e", 2400.0),
        ],
        1280.0,
    );
    let controller = page.attach().ok_or("sidebar should attach")?;

    let mut y = -200.0;
    while y < 3000.0 {
        page.scroll_to(&controller, y);
        assert!(page.active_links().len() <= 1, "several active at {}", y);
        y += 37.0;
    }
    Ok(())
}

#[test]
fn test_scroll_burst_runs_one_pass_with_final_offset() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;

    for y in [0.0, 100.0, 200.0, 1300.0, 1400.0, 700.0, 800.0, 900.0, 1000.0, 1250.0] {
        page.viewport.set_scroll_y(y);
        controller.on_scroll();
        page.scheduler.advance(Duration::from_millis(1));
    }
    assert_eq!(page.scheduler.executed_count(), 0);
    page.viewport.set_scroll_y(560.0);
    page.settle();

    assert_eq!(page.scheduler.executed_count(), 1);
    assert_eq!(page.active_links(), vec!["#detail"]);
    Ok(())
}

#[test]
fn test_click_overrides_scroll_state() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;
    page.scroll_to(&controller, 0.0);

    for target in ["summary", "detail", "intro"] {
        controller.on_link_click(&format!("#{}", target));
        assert_eq!(page.active_links(), vec![format!("#{}", target)]);
    }
    Ok(())
}

#[test]
fn test_width_scenario() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;
    assert_eq!(
        controller.sync().state(),
        NavState {
            width: WidthClass::Wide,
            visibility: NavVisibility::Expanded
        }
    );
    assert_eq!(page.nav_list.display(), None);

    page.resize_to(&controller, 600.0);
    assert_eq!(
        controller.sync().state(),
        NavState {
            width: WidthClass::Narrow,
            visibility: NavVisibility::Collapsed
        }
    );
    assert_eq!(page.nav_list.display().as_deref(), Some("none"));
    assert_eq!(page.glyph.text(), "+");

    page.resize_to(&controller, 900.0);
    assert_eq!(controller.sync().state().visibility, NavVisibility::Expanded);
    assert_eq!(page.nav_list.display(), None);
    assert_eq!(page.glyph.text(), "\u{2212}");
    Ok(())
}

#[test]
fn test_crossing_to_wide_expands_even_after_manual_collapse() -> TestResult {
    let page = SidebarPage::scenario(600.0);
    let controller = page.attach().ok_or("sidebar should attach")?;
    assert_eq!(page.nav_list.display().as_deref(), Some("none"));

    controller.on_toggle();
    controller.on_toggle();
    assert_eq!(controller.sync().state().visibility, NavVisibility::Collapsed);

    page.resize_to(&controller, 1100.0);
    assert_eq!(controller.sync().state().visibility, NavVisibility::Expanded);

    controller.on_toggle();
    assert_eq!(controller.sync().state().visibility, NavVisibility::Collapsed);
    page.resize_to(&controller, 320.0);
    assert_eq!(controller.sync().state().visibility, NavVisibility::Collapsed);
    Ok(())
}

#[test]
fn test_resizes_within_class_write_nothing() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;
    controller.on_toggle();
    let nav_writes = page.nav_list.write_count();
    let glyph_writes = page.glyph.write_count();

    for width in [1000.0, 800.0, 769.0, 1920.0] {
        page.resize_to(&controller, width);
    }

    assert_eq!(controller.sync().state().visibility, NavVisibility::Collapsed);
    assert_eq!(page.nav_list.write_count(), nav_writes);
    assert_eq!(page.glyph.write_count(), glyph_writes);
    Ok(())
}

#[test]
fn test_resize_rereads_heading_offsets() -> TestResult {
    let page = SidebarPage::scenario(1024.0);
    let controller = page.attach().ok_or("sidebar should attach")?;

    // Reflow on a narrower window pushes the last section up.
    page.headings[2].set_offset_top(700.0);
    page.resize_to(&controller, 1000.0);
    page.scroll_to(&controller, 650.0);

    assert_eq!(page.active_links(), vec!["#summary"]);
    Ok(())
}

#[test]
fn test_configured_bias_and_breakpoint() -> TestResult {
    let config = NavConfig::from_json(r#"{ "lookaheadBias": 0, "narrowMaxWidth": 1024 }"#)?;
    let page = SidebarPage::with_config(
        &[("intro", 0.0), ("detail", 500.0), ("summary", 1200.0)],
        1024.0,
        config,
    );
    let controller = page.attach().ok_or("sidebar should attach")?;
    assert_eq!(controller.sync().state().width, WidthClass::Narrow);

    page.scroll_to(&controller, 450.0);
    assert_eq!(page.active_links(), vec!["#intro"]);
    Ok(())
}

#[test]
fn test_page_without_sidebar_is_left_alone() {
    let document = MemoryDocument::new();
    let controller = SidebarController::attach(
        &document,
        MemoryViewport::new(1024.0),
        ManualScheduler::new(),
        NavConfig::default(),
    );
    assert!(controller.is_none());
}

#[test]
fn test_sidebar_without_toggle_or_headings_degrades() -> TestResult {
    let config = NavConfig::default();
    let link = wayfinder::MemoryElement::with_attribute("href", "#intro");
    let document = MemoryDocument::new()
        .with(config.sidebar_selector.clone(), vec![wayfinder::MemoryElement::new()])
        .with(config.link_selector.clone(), vec![link.clone()]);
    let viewport = MemoryViewport::new(500.0);
    let scheduler = ManualScheduler::new();
    let controller =
        SidebarController::attach(&document, viewport.clone(), scheduler.clone(), config)
            .ok_or("sidebar should attach")?;

    controller.on_toggle();
    viewport.set_scroll_y(900.0);
    controller.on_scroll();
    scheduler.advance(Duration::from_millis(50));
    viewport.set_inner_width(1200.0);
    controller.on_resize();

    assert!(!link.has_class("active"));
    assert_eq!(controller.sync().state().width, WidthClass::Wide);
    Ok(())
}
