use super::*;
use crate::content::data::default_sections;
use crate::foundation::core::Span;
use crate::host::PageLayout;

fn layout() -> PageLayout {
    // home [0,900) about [900,1800) ... contact [4500,5400)
    PageLayout::stacked(&default_sections(), 900.0, 800.0)
}

fn active(y: f64, layout: &PageLayout) -> Option<String> {
    let sections = default_sections();
    ScrollTracker::default()
        .active_section(y, &sections, layout)
        .map(|id| id.to_string())
}

#[test]
fn scrolled_flag_is_strictly_past_threshold() {
    let t = ScrollTracker::default();
    assert!(!t.is_scrolled(0.0));
    assert!(!t.is_scrolled(50.0));
    assert!(t.is_scrolled(50.5));
    assert!(t.is_scrolled(3000.0));
    for _ in 0..3 {
        assert!(t.is_scrolled(51.0));
    }
}

#[test]
fn offsets_inside_a_span_report_that_section() {
    let l = layout();
    let sections = default_sections();
    for (i, s) in sections.iter().enumerate() {
        let top = i as f64 * 900.0;
        // Look-ahead shifts the window up by 100px.
        for y in [top - 100.0, top, top + 400.0, top + 799.0] {
            if y < 0.0 {
                continue;
            }
            assert_eq!(active(y, &l).as_deref(), Some(s.id.as_str()), "y={y}");
        }
    }
}

#[test]
fn look_ahead_boundary_is_half_open() {
    let l = layout();
    assert_eq!(active(799.0, &l).as_deref(), Some("home"));
    assert_eq!(active(800.0, &l).as_deref(), Some("about"));
}

#[test]
fn first_match_wins_on_overlap() {
    let mut l = layout();
    l.sections
        .insert(SectionId::new("about"), Span::new(500.0, 900.0).unwrap());
    // 700 + 100 lies in both home and about; home is earlier in the list.
    assert_eq!(active(700.0, &l).as_deref(), Some("home"));
}

#[test]
fn gaps_and_missing_elements_match_nothing() {
    let mut l = layout();
    l.sections.remove(&SectionId::new("about"));
    assert_eq!(active(1000.0, &l), None);
    assert_eq!(active(10_000.0, &l), None);
}

#[test]
fn apply_keeps_previous_section_when_nothing_matches() {
    let t = ScrollTracker::default();
    let mut state = NavState::new(SectionId::new("projects"));
    let sample = ScrollSample {
        scroll_y: 10_000.0,
        is_scrolled: true,
        active: None,
    };
    assert!(!t.apply(&sample, &mut state));
    assert_eq!(state.active_section_id, "projects");
    assert!(state.is_scrolled);
}

#[test]
fn apply_reports_changes_only() {
    let t = ScrollTracker::default();
    let l = layout();
    let sections = default_sections();
    let mut state = NavState::new(SectionId::new("home"));

    assert!(!t.apply(&t.sample(0.0, &sections, &l), &mut state));
    assert!(!state.is_scrolled);
    assert!(t.apply(&t.sample(1000.0, &sections, &l), &mut state));
    assert_eq!(state.active_section_id, "about");
    assert!(!t.apply(&t.sample(1001.0, &sections, &l), &mut state));
}

#[test]
fn custom_thresholds_are_honoured() {
    let t = ScrollTracker::new(TrackerConfig {
        scrolled_threshold: 10.0,
        look_ahead: 0.0,
    });
    let l = layout();
    let sections = default_sections();
    assert!(t.is_scrolled(11.0));
    assert_eq!(
        t.active_section(850.0, &sections, &l).map(|id| id.as_str()),
        Some("home")
    );
}
