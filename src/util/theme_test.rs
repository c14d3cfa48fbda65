use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn toggled_from_only_dark_goes_light() {
    assert_eq!(Theme::toggled_from(Some("dark")), Theme::Light);
    assert_eq!(Theme::toggled_from(Some("light")), Theme::Dark);
    assert_eq!(Theme::toggled_from(Some("weird")), Theme::Dark);
    assert_eq!(Theme::toggled_from(None), Theme::Dark);
}

#[test]
fn toggle_icon_advertises_opposite_theme() {
    assert_eq!(Theme::Dark.toggle_icon(), "☀️");
    assert_eq!(Theme::Dark.toggle_title(), "Switch to light mode");
    assert_eq!(Theme::Light.toggle_icon(), "🌙");
    assert_eq!(Theme::Light.toggle_title(), "Switch to dark mode");
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
}

// =============================================================
// apply / toggle
// =============================================================

#[test]
fn apply_sets_attribute_and_persists() {
    let host = MemoryThemeHost::new();
    apply(&host, Theme::Dark);
    assert_eq!(host.document_theme().as_deref(), Some("dark"));
    assert_eq!(host.stored_theme().as_deref(), Some("dark"));
}

#[test]
fn apply_without_control_does_not_create_one() {
    let host = MemoryThemeHost::new();
    apply(&host, Theme::Light);
    assert!(host.control().is_none());
    assert_eq!(host.mount_count(), 0);
}

#[test]
fn toggle_twice_is_identity_from_any_start() {
    for start in [None, Some("light"), Some("dark")] {
        let host = start.map_or_else(MemoryThemeHost::new, MemoryThemeHost::with_stored);
        let initial = init(&host);
        let once = toggle(&host);
        assert_eq!(once, initial.opposite());
        let twice = toggle(&host);
        assert_eq!(twice, initial);
        assert_eq!(host.document_theme().as_deref(), Some(initial.as_str()));
        assert_eq!(host.stored_theme().as_deref(), Some(initial.as_str()));
    }
}

#[test]
fn toggle_with_unset_attribute_goes_dark() {
    let host = MemoryThemeHost::new();
    assert_eq!(toggle(&host), Theme::Dark);
}

// =============================================================
// init / control
// =============================================================

#[test]
fn init_defaults_to_light_and_mounts_control() {
    let host = MemoryThemeHost::new();
    assert_eq!(init(&host), Theme::Light);
    assert_eq!(host.document_theme().as_deref(), Some("light"));
    assert_eq!(
        host.control(),
        Some(ToggleControl { icon: "🌙".to_owned(), title: "Switch to dark mode".to_owned() })
    );
}

#[test]
fn inject_toggle_control_mounts_once() {
    let host = MemoryThemeHost::new();
    assert!(inject_toggle_control(&host));
    assert!(!inject_toggle_control(&host));
    init(&host);
    assert_eq!(host.mount_count(), 1);
}

#[test]
fn click_toggle_updates_icon() {
    let host = MemoryThemeHost::new();
    assert_eq!(host.click_toggle(), None);

    init(&host);
    assert_eq!(host.click_toggle(), Some(Theme::Dark));
    let control = host.control().unwrap();
    assert_eq!(control.icon, "☀️");
    assert_eq!(control.title, "Switch to light mode");
}

#[test]
fn reload_restores_persisted_theme() {
    let host = MemoryThemeHost::new();
    init(&host);
    apply(&host, Theme::Dark);

    let reloaded = host.reload();
    assert_eq!(reloaded.document_theme(), None);
    assert!(reloaded.control().is_none());
    assert_eq!(read_preference(&reloaded), Theme::Dark);
    assert_eq!(init(&reloaded), Theme::Dark);
    assert_eq!(reloaded.document_theme().as_deref(), Some("dark"));
    assert_eq!(reloaded.control().map(|c| c.icon).as_deref(), Some("☀️"));
}
