use super::*;
use crate::{copyright, Anchor, FOOTER, SITE};
use zenai_ui_graphics::Palette;

fn catalog() -> StudioCatalog {
    StudioCatalog::studio().expect("catalog builds")
}

#[test]
fn services_are_keyed_by_slug() {
    let catalog = catalog();
    assert_eq!(catalog.service(Some("ads")).title, "ADS");
    assert_eq!(
        catalog.service(Some("web-development")).pricing,
        "Starting at $10,000/project"
    );
    assert_eq!(catalog.service(Some("marketing")).color, Palette::MARKETING);
    for (_, service) in catalog.services().iter() {
        assert_eq!(service.process.len(), 4);
        assert_eq!(service.features.len(), 6);
    }
}

#[test]
fn unknown_service_falls_back_to_marketing() {
    let catalog = catalog();
    let fallback = catalog.service(None);
    assert_eq!(fallback.title, "MARKETING");
    assert_eq!(catalog.service(Some("seo")), fallback);
}

#[test]
fn unknown_project_falls_back_to_first_client() {
    let catalog = catalog();
    let fallback = catalog.project(None);
    assert_eq!(fallback.client, "TechCorp");
    assert_eq!(catalog.project(Some("web-9")), fallback);
    assert_eq!(catalog.projects().default_slug().as_str(), "client-1");
}

#[test]
fn projects_split_into_design_and_web() {
    let catalog = catalog();
    let design: Vec<&str> = catalog
        .projects_of_kind(ProjectKind::Design)
        .map(|(slug, _)| slug.as_str())
        .collect();
    let web: Vec<&str> = catalog
        .projects_of_kind(ProjectKind::WebApp)
        .map(|(slug, _)| slug.as_str())
        .collect();
    assert_eq!(design, ["client-1", "client-2", "client-3"]);
    assert_eq!(web, ["web-1", "web-2", "web-3"]);
    assert_eq!(catalog.project(Some("web-1")).tech, Some("Next.js, Shopify"));
}

#[test]
fn testimonials_and_reels() {
    let catalog = catalog();
    let testimonials = catalog.testimonials();
    assert_eq!(testimonials.len(), 5);
    assert_eq!(testimonials[0].byline(), "CEO at TechStart Inc.");
    assert_eq!(testimonials[4].initial(), Some('L'));
    assert_eq!(catalog.reels()[0].src, "/videos/dog.mp4");
    assert_eq!(catalog.reels().len(), 5);
}

#[test]
fn routes_resolve_to_pages() {
    let catalog = catalog();
    match catalog.page(&Route::parse("/services/nope")) {
        Page::Service { slug, service } => {
            assert_eq!(slug.as_str(), "marketing");
            assert_eq!(service.title, "MARKETING");
        }
        other => panic!("unexpected page {other:?}"),
    }
    match catalog.page(&Route::parse("/work/web-3")) {
        Page::Project { project, .. } => assert_eq!(project.title, "Mobile App"),
        other => panic!("unexpected page {other:?}"),
    }
    assert_eq!(catalog.page(&Route::parse("/pricing")), Page::Landing);
}

#[test]
fn site_metadata_and_footer() {
    assert_eq!(SITE.title, "ZenAI - Creative x Tech Studio");
    assert_eq!(SITE.description, "Where Creativity meets Intelligence");
    assert_eq!(SITE.theme.secondary.to_css(), "rgba(10, 10, 10, 1)");
    assert_eq!(
        FOOTER.quick_links.map(|(_, anchor)| anchor),
        [Anchor::Work, Anchor::Services, Anchor::Contact]
    );
    assert!(FOOTER.social.iter().all(|link| link.external));
    assert_eq!(copyright(2026), "© 2026 ZenAI. All rights reserved.");
}
