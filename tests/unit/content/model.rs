use super::*;
use crate::content::data::{EMAIL_ADDRESS, GITHUB_URL, builtin_content, default_sections};

#[test]
fn builtin_content_is_valid_and_ordered() {
    let c = builtin_content();
    c.validate().unwrap();
    let ids: Vec<&str> = c.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["home", "about", "experience", "projects", "skills", "contact"]
    );
    assert_eq!(c.section("projects").unwrap().label, "Projects");
    assert!(c.section("blog").is_none());
}

#[test]
fn duplicate_or_empty_ids_are_rejected() {
    let mut sections = default_sections();
    sections.push(SectionDescriptor::new("about", "Again"));
    let err = validate_sections(&sections).unwrap_err();
    assert!(err.to_string().contains("duplicate section id 'about'"));

    assert!(validate_sections(&[SectionDescriptor::new(" ", "Blank")]).is_err());
    assert!(validate_sections(&[]).is_err());
}

#[test]
fn contacts_map_to_outbound_actions() {
    let c = builtin_content();
    let email = c
        .contacts
        .iter()
        .find(|c| c.kind == ContactKind::Email)
        .unwrap();
    assert_eq!(
        email.outbound(),
        OutboundAction::ComposeEmail(format!("mailto:{EMAIL_ADDRESS}"))
    );

    let gh = c
        .contacts
        .iter()
        .find(|c| c.kind == ContactKind::GitHub)
        .unwrap();
    assert_eq!(
        gh.outbound(),
        OutboundAction::OpenInNewContext(GITHUB_URL.to_owned())
    );
}

#[test]
fn malformed_contact_targets_fail_validation() {
    let mut c = builtin_content();
    c.contacts[0].target = "mailto:someone@example.com".to_owned();
    assert!(c.validate().is_err());

    let mut c = builtin_content();
    c.contacts[1].target = "http://insecure.example".to_owned();
    assert!(c.validate().is_err());
}

#[test]
fn content_survives_json() {
    let c = builtin_content();
    let json = serde_json::to_string(&c).unwrap();
    let back = SiteContent::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, c);
}
