use super::*;

#[test]
fn parses_site_routes() {
    assert_eq!(Route::parse("/"), Route::Landing);
    assert_eq!(Route::parse(""), Route::Landing);
    assert_eq!(Route::parse("/#services"), Route::Landing);
    assert_eq!(
        Route::parse("/services/ads"),
        Route::Service("ads".to_string())
    );
    assert_eq!(
        Route::parse("/work/web-2/?ref=home"),
        Route::Project("web-2".to_string())
    );
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(
        Route::parse("/about"),
        Route::NotFound("/about".to_string())
    );
    assert!(matches!(Route::parse("/services"), Route::NotFound(_)));
    assert!(matches!(Route::parse("/work/a/b"), Route::NotFound(_)));
}

#[test]
fn href_round_trips_detail_routes() {
    for path in ["/", "/services/web-development", "/work/client-3"] {
        assert_eq!(Route::parse(path).href(), path);
    }
}

#[test]
fn detail_pages_link_back_to_their_section() {
    let service = Route::parse("/services/marketing");
    let project = Route::parse("/work/client-1");
    assert_eq!(
        service.back_anchor().map(Anchor::landing_href).as_deref(),
        Some("/#services")
    );
    assert_eq!(
        project.back_anchor().map(Anchor::landing_href).as_deref(),
        Some("/#work")
    );
    assert_eq!(Route::Landing.back_anchor(), None);
}

#[test]
fn anchors() {
    assert_eq!(Anchor::Contact.href(), "#contact");
    assert_eq!(Anchor::from_fragment("#work"), Some(Anchor::Work));
    assert_eq!(Anchor::from_fragment("services"), Some(Anchor::Services));
    assert_eq!(Anchor::from_fragment("#pricing"), None);
}
