use super::*;

fn span(top: f64, height: f64) -> Span {
    Span::new(top, height).unwrap()
}

fn cfg() -> RevealConfig {
    RevealConfig {
        delay_children: 0.2,
        stagger_children: 0.1,
        ..RevealConfig::default()
    }
}

#[test]
fn child_delays_grow_with_declaration_index() {
    let c = RevealCascade::new(&cfg(), 4);
    assert_eq!(c.len(), 4);
    let delays: Vec<f64> = (0..4).map(|i| c.child_delay(i).unwrap()).collect();
    assert!((delays[0] - 0.2).abs() < 1e-12);
    assert!((delays[3] - 0.5).abs() < 1e-12);
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(c.child_delay(4), None);
}

#[test]
fn children_stay_hidden_until_parent_reveals() {
    let c = RevealCascade::new(&cfg(), 3);
    for i in 0..3 {
        assert_eq!(c.child_pose(i, 100.0).unwrap().opacity, 0.0);
    }
    assert_eq!(c.parent_pose(100.0).opacity, 0.0);
    assert!(!c.is_settled_at(100.0));
}

#[test]
fn earlier_children_lead_later_ones() {
    let mut c = RevealCascade::new(&cfg(), 3);
    let vp = span(0.0, 800.0);
    assert_eq!(c.observe(vp, span(200.0, 300.0), 5.0), RevealEvent::Revealed);

    let now = 5.0 + 0.45;
    let o: Vec<f64> = (0..3).map(|i| c.child_pose(i, now).unwrap().opacity).collect();
    assert!(o[0] > o[1]);
    assert!(o[1] > o[2]);

    assert!(!c.is_settled_at(5.0 + 0.8));
    assert!(c.is_settled_at(5.0 + 1.1));
    assert_eq!(c.child_pose(2, 10.0).unwrap(), Pose::SETTLED);
}

#[test]
fn scrolling_back_does_not_restart_children() {
    let mut c = RevealCascade::new(&cfg(), 2);
    c.observe(span(0.0, 800.0), span(200.0, 300.0), 1.0);
    let settled = c.child_pose(1, 3.0).unwrap();

    assert_eq!(
        c.observe(span(5000.0, 800.0), span(200.0, 300.0), 4.0),
        RevealEvent::AlreadyRevealed
    );
    assert_eq!(
        c.observe(span(0.0, 800.0), span(200.0, 300.0), 6.0),
        RevealEvent::AlreadyRevealed
    );
    assert_eq!(c.child_pose(1, 6.0).unwrap(), settled);
}
