use super::*;

#[test]
fn accepts_site_slugs() {
    for raw in ["marketing", "ads", "web-development", "client-1", "web-3"] {
        assert_eq!(Slug::parse(raw).unwrap().as_str(), raw);
    }
}

#[test]
fn rejects_malformed_slugs() {
    assert_eq!(Slug::parse(""), Err(SlugError::Empty));
    assert!(matches!(
        Slug::parse("Web"),
        Err(SlugError::InvalidCharacter { ch: 'W', .. })
    ));
    assert!(matches!(
        Slug::parse("web dev"),
        Err(SlugError::InvalidCharacter { ch: ' ', .. })
    ));
    assert!(matches!(Slug::parse("-ads"), Err(SlugError::MisplacedDash { .. })));
    assert!(matches!(Slug::parse("web--dev"), Err(SlugError::MisplacedDash { .. })));
}

#[test]
fn parses_through_from_str() {
    let slug: Slug = "client-2".parse().unwrap();
    assert_eq!(slug.to_string(), "client-2");
}
