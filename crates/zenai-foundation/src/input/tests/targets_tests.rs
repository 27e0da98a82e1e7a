use super::*;

fn scan(items: &[(&str, &str, Option<&str>)]) -> Vec<TargetDescriptor> {
    items
        .iter()
        .map(|(key, tag, role)| {
            let descriptor = TargetDescriptor::new(*key, *tag);
            match role {
                Some(role) => descriptor.with_role(*role),
                None => descriptor,
            }
        })
        .collect()
}

#[test]
fn selector_matches_links_buttons_and_button_roles() {
    assert!(is_interactive("a", None));
    assert!(is_interactive("BUTTON", None));
    assert!(is_interactive("div", Some("button")));
    assert!(!is_interactive("div", Some("link")));
    assert!(!is_interactive("section", None));
}

#[test]
fn first_sync_binds_every_interactive_element() {
    let mut targets = InteractiveTargets::new();
    let sync = targets.sync(scan(&[
        ("nav-work", "a", None),
        ("hero", "section", None),
        ("cta", "button", None),
        ("card", "div", Some("button")),
    ]));

    let keys: Vec<&str> = sync.added.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, ["nav-work", "cta", "card"]);
    assert!(sync.removed.is_empty());
    assert_eq!(targets.len(), 3);
}

#[test]
fn resync_reports_only_the_difference() {
    let mut targets = InteractiveTargets::new();
    targets.sync(scan(&[("a1", "a", None), ("b1", "button", None)]));
    let kept_id = targets.id_for("a1");

    let sync = targets.sync(scan(&[("a1", "a", None), ("b2", "button", None)]));
    assert_eq!(sync.added.len(), 1);
    assert_eq!(sync.added[0].key, "b2");
    assert_eq!(sync.removed.len(), 1);
    assert_eq!(sync.removed[0].key, "b1");
    assert_eq!(targets.id_for("a1"), kept_id);

    let unchanged = targets.sync(scan(&[("a1", "a", None), ("b2", "button", None)]));
    assert!(unchanged.is_empty());
}

#[test]
fn duplicate_keys_bind_once() {
    let mut targets = InteractiveTargets::new();
    let sync = targets.sync(scan(&[("x", "a", None), ("x", "a", None)]));
    assert_eq!(sync.added.len(), 1);
}

#[test]
fn clear_releases_everything() {
    let mut targets = InteractiveTargets::new();
    targets.sync(scan(&[("a1", "a", None), ("b1", "button", None)]));
    let released = targets.clear();
    assert_eq!(released.len(), 2);
    assert!(released[0].id < released[1].id);
    assert!(targets.is_empty());
}
