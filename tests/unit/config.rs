use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = FolioConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.tracker.scrolled_threshold, 50.0);
    assert_eq!(cfg.tracker.look_ahead, 100.0);
    assert!(cfg.reveal.margin < 0.0);
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let json = r#"{ "tracker": { "look_ahead": 64 }, "letters": { "stagger": 0.05 } }"#;
    let cfg = FolioConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.tracker.look_ahead, 64.0);
    assert_eq!(cfg.tracker.scrolled_threshold, 50.0);
    assert_eq!(cfg.letters.stagger, 0.05);
    assert_eq!(cfg.letters.spring, LettersConfig::default().spring);
    assert_eq!(cfg.reveal, RevealConfig::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let json = r#"{ "tracker": { "lookahead": 64 } }"#;
    let err = FolioConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"));
}

#[test]
fn out_of_range_values_fail_validation() {
    let json = r#"{ "reveal": { "amount": 1.5 } }"#;
    assert!(FolioConfig::from_reader(json.as_bytes()).is_err());

    let json = r#"{ "letters": { "spring": { "stiffness": 0, "damping": 1, "mass": 1 } } }"#;
    let err = FolioConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Animation(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = FolioConfig::from_path("definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.json"));
}

#[test]
fn reveal_motion_accepts_spring() {
    let json = r#"{ "reveal": { "motion": { "type": "spring", "stiffness": 120, "damping": 14, "mass": 1 } } }"#;
    let cfg = FolioConfig::from_reader(json.as_bytes()).unwrap();
    assert!(matches!(cfg.reveal.motion, Motion::Spring(_)));
}
