use zenai_app::{AppLauncher, ElementId, SectionId};
use zenai_site::{HeadlessHost, Walkthrough};
use zenai_testing::assert_approx_eq;

#[test]
fn landing_visit_reveals_every_section_in_order() {
    let report = Walkthrough::new("/").run().expect("walkthrough runs");
    assert_eq!(report.carousel_advances, 2);
    assert_eq!(report.revealed, SectionId::ALL.to_vec());
    assert!(report.magnetic_settled);
    assert_eq!(report.final_route, "/");
    assert_eq!(report.active_timers, 1);
}

#[test]
fn follow_up_visit_stops_the_carousel() {
    let report = Walkthrough::new("/")
        .with_duration(6_000)
        .then_visit("/services/ads")
        .run()
        .expect("walkthrough runs");
    assert_eq!(report.carousel_advances, 1);
    assert_eq!(report.final_route, "/services/ads");
    assert_eq!(report.active_timers, 0);
}

#[test]
fn detail_page_has_no_landing_sections() {
    let report = Walkthrough::new("/work/client-3")
        .with_duration(2_000)
        .run()
        .expect("walkthrough runs");
    assert_eq!(report.carousel_advances, 0);
    assert!(report.revealed.is_empty());
    assert_eq!(report.active_timers, 0);
}

#[test]
fn headless_host_runs_timers_before_the_shell() {
    let mut host = HeadlessHost::launch(AppLauncher::new()).expect("launches");
    let mut scene = host.step();
    while host.now_millis() < 5_000 {
        scene = host.step();
    }
    assert_eq!(host.shell().testimonials().map(|c| c.current_index()), Some(1));
    let slide = scene
        .layer(ElementId::TestimonialSlide)
        .expect("landing shows the slide");
    assert_approx_eq(slide.translation_x, 1_000.0, 0.001, "slide enters from the right");
}
