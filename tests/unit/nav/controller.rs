use super::*;
use crate::content::data::default_sections;
use crate::foundation::core::Span;
use crate::host::{PageLayout, SimulatedWindow};

const SECTION_HEIGHT: f64 = 900.0;

fn window() -> Rc<SimulatedWindow> {
    Rc::new(SimulatedWindow::new(PageLayout::stacked(
        &default_sections(),
        SECTION_HEIGHT,
        800.0,
    )))
}

fn controller(w: &Rc<SimulatedWindow>) -> NavController {
    NavController::attach(default_sections(), w.clone(), &FolioConfig::default()).unwrap()
}

fn current(ctrl: &NavController) -> Vec<String> {
    ctrl.links()
        .into_iter()
        .filter(|l| l.is_current)
        .map(|l| l.id.to_string())
        .collect()
}

#[test]
fn page_load_at_top_starts_on_home() {
    let w = window();
    let ctrl = controller(&w);
    let s = ctrl.state();
    assert_eq!(s.active_section_id, "home");
    assert!(!s.is_scrolled);
    assert!(!s.is_mobile_menu_open);
    assert_eq!(current(&ctrl), vec!["home"]);
    assert!(ctrl.is_attached());
    assert_eq!(w.listener_count(), 1);
}

#[test]
fn mount_syncs_with_restored_scroll_offset() {
    let w = window();
    w.user_scroll_to(2000.0);
    let ctrl = controller(&w);
    assert_eq!(ctrl.active_section_id(), "experience");
    assert!(ctrl.is_scrolled());
}

#[test]
fn scroll_events_update_active_section_and_style() {
    let w = window();
    let ctrl = controller(&w);

    w.user_scroll_to(30.0);
    assert!(!ctrl.is_scrolled());
    assert_eq!(ctrl.active_section_id(), "home");

    w.user_scroll_to(51.0);
    assert!(ctrl.is_scrolled());

    w.user_scroll_to(SECTION_HEIGHT * 3.0);
    assert_eq!(ctrl.active_section_id(), "projects");
    assert_eq!(current(&ctrl), vec!["projects"]);

    w.user_scroll_to(0.0);
    assert_eq!(ctrl.active_section_id(), "home");
    assert!(!ctrl.is_scrolled());
}

#[test]
fn navigate_to_every_known_section_is_immediate() {
    let w = window();
    let mut ctrl = controller(&w);
    for s in default_sections() {
        assert!(ctrl.navigate_to(s.id.as_str()));
        assert_eq!(ctrl.active_section_id(), s.id);
        assert_eq!(current(&ctrl), vec![s.id.to_string()]);
    }
}

#[test]
fn navigate_requests_smooth_scroll_to_section_top() {
    let w = window();
    let mut ctrl = controller(&w);
    assert!(ctrl.navigate_to("projects"));
    assert_eq!(w.scroll_requests(), vec![SECTION_HEIGHT * 3.0]);
    // Optimistic: still at the top of the page, yet already active.
    assert_eq!(w.scroll_y(), 0.0);
    assert_eq!(ctrl.active_section_id(), "projects");

    assert!(w.finish_smooth_scroll(20));
    assert_eq!(ctrl.active_section_id(), "projects");
    assert!(ctrl.is_scrolled());
}

#[test]
fn navigate_closes_the_mobile_menu() {
    let w = window();
    let mut ctrl = controller(&w);
    assert!(ctrl.toggle_mobile_menu());
    assert!(ctrl.navigate_to("about"));
    assert!(!ctrl.is_mobile_menu_open());
}

#[test]
fn unknown_or_missing_targets_are_silent_no_ops() {
    let w = window();
    let mut ctrl = controller(&w);
    ctrl.toggle_mobile_menu();
    let before = ctrl.state();

    assert!(!ctrl.navigate_to("blog"));
    assert_eq!(ctrl.state(), before);

    w.remove_section(&SectionId::new("skills"));
    assert!(!ctrl.navigate_to("skills"));
    assert_eq!(ctrl.state(), before);
    assert!(w.scroll_requests().is_empty());
}

#[test]
fn toggle_twice_restores_menu_state() {
    let w = window();
    let mut ctrl = controller(&w);
    let initial = ctrl.is_mobile_menu_open();
    assert!(ctrl.toggle_mobile_menu());
    assert!(!ctrl.toggle_mobile_menu());
    assert_eq!(ctrl.is_mobile_menu_open(), initial);
}

#[test]
fn active_section_is_sticky_in_gaps() {
    let w = Rc::new(SimulatedWindow::new(PageLayout::stacked(
        &default_sections()[..2],
        SECTION_HEIGHT,
        800.0,
    )));
    let ctrl = NavController::attach(default_sections(), w.clone(), &FolioConfig::default())
        .unwrap();

    w.user_scroll_to(SECTION_HEIGHT);
    assert_eq!(ctrl.active_section_id(), "about");

    // Leave a gap between `about` (ends at 1800) and `experience`.
    w.set_section_span(
        SectionId::new("experience"),
        Span::new(3000.0, 900.0).unwrap(),
    );
    w.user_scroll_to(1900.0);
    assert_eq!(ctrl.active_section_id(), "about");
    assert!(ctrl.is_scrolled());

    w.user_scroll_to(2950.0);
    assert_eq!(ctrl.active_section_id(), "experience");
}

#[test]
fn dropping_the_controller_detaches_its_listener() {
    let w = window();
    let ctrl = controller(&w);
    assert_eq!(w.listener_count(), 1);
    drop(ctrl);
    assert_eq!(w.listener_count(), 0);
    w.user_scroll_to(1000.0);
}

#[test]
fn dispose_freezes_scroll_driven_state() {
    let w = window();
    let mut ctrl = controller(&w);
    ctrl.dispose();
    assert!(!ctrl.is_attached());
    assert_eq!(w.listener_count(), 0);
    w.user_scroll_to(SECTION_HEIGHT * 2.0);
    ctrl.resync();
    assert_eq!(ctrl.active_section_id(), "home");
    assert!(!ctrl.is_scrolled());
}

#[test]
fn indicator_glides_to_the_new_link() {
    let w = window();
    let mut ctrl = controller(&w);
    assert_eq!(ctrl.indicator_position(), 0.0);

    ctrl.navigate_to("projects");
    assert_eq!(ctrl.indicator_position(), 0.0);
    w.advance_time(0.05);
    let mid = ctrl.indicator_position();
    assert!(mid > 0.0 && mid < 3.0);
    w.advance_time(3.0);
    assert!((ctrl.indicator_position() - 3.0).abs() < 1e-3);

    let slots: Vec<LinkSlot> = (0..6)
        .map(|i| LinkSlot {
            left: 80.0 * f64::from(i),
            width: 70.0,
        })
        .collect();
    let b = ctrl.indicator_box(&slots).unwrap();
    assert!((b.left - 240.0).abs() < 0.1);
}

#[test]
fn attach_rejects_invalid_sections() {
    let w = window();
    let mut sections = default_sections();
    sections.push(SectionDescriptor::new("home", "Again"));
    assert!(NavController::attach(sections, w.clone(), &FolioConfig::default()).is_err());
    assert!(NavController::attach(vec![], w.clone(), &FolioConfig::default()).is_err());
    assert_eq!(w.listener_count(), 0);
}
