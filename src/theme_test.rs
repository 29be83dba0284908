use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_inverse_flips_and_returns() {
    assert_eq!(Theme::Light.inverse(), Theme::Dark);
    assert_eq!(Theme::Dark.inverse(), Theme::Light);
    assert_eq!(Theme::Dark.inverse().inverse(), Theme::Dark);
}

#[test]
fn theme_as_str_matches_stored_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn theme_parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn control_appearance_describes_the_other_theme() {
    let config = ThemeConfig::default();
    assert_eq!(Theme::Light.control_appearance(&config).label, "Dark Mode");
    assert_eq!(Theme::Light.control_appearance(&config).icon_class, "fas fa-moon");
    assert_eq!(Theme::Dark.control_appearance(&config).label, "Light Mode");
    assert_eq!(Theme::Dark.control_appearance(&config).icon_class, "fas fa-sun");
}

// =============================================================
// MemoryThemeStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryThemeStore::new();
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn memory_store_returns_what_was_set() {
    let mut store = MemoryThemeStore::new();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.value("theme"), Some("dark"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let mut store = MemoryThemeStore::with_value("theme", "dark");
    store.set("theme", "light").unwrap();
    assert_eq!(store.value("theme"), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryThemeStore::with_value("theme", "dark");
    assert_eq!(store.get("other").unwrap(), None);
}
