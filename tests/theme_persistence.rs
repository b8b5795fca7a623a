use country_explorer::app::{ColorMode, ThemePreference};
use country_explorer::infrastructure::{ClassList, DocumentRoot, FixedAppearance};
use country_explorer::storage::{JsonPreferenceStore, PreferenceStore, THEME_KEY};
use country_explorer::{initialize, Config};
use std::path::Path;
use std::sync::Arc;

fn open_theme(path: &Path, system_dark: Option<bool>) -> (ThemePreference, ClassList) {
    let store = JsonPreferenceStore::new(path.to_path_buf()).unwrap();
    let document = ClassList::default();
    let theme = ThemePreference::initialize(
        Box::new(store),
        &FixedAppearance(system_dark),
        Arc::new(document.clone()),
    );
    (theme, document)
}

fn persisted(path: &Path) -> Option<String> {
    JsonPreferenceStore::new(path.to_path_buf())
        .unwrap()
        .get(THEME_KEY)
        .unwrap()
}

#[test]
fn toggle_persists_each_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let (mut theme, document) = open_theme(&path, None);
    assert_eq!(theme.mode(), ColorMode::Light);
    assert_eq!(persisted(&path), None);

    assert!(theme.toggle());
    assert_eq!(persisted(&path).as_deref(), Some("dark"));
    assert!(document.has_class("dark"));

    assert!(!theme.toggle());
    assert_eq!(persisted(&path).as_deref(), Some("light"));
    assert!(!document.has_class("dark"));
}

#[test]
fn toggling_twice_restores_persisted_file_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    for seed in ["dark", "light"] {
        JsonPreferenceStore::new(path.clone())
            .unwrap()
            .set(THEME_KEY, seed)
            .unwrap();

        let (mut theme, document) = open_theme(&path, None);
        let was_dark = theme.is_dark();
        assert_eq!(was_dark, seed == "dark");

        theme.toggle();
        assert_ne!(persisted(&path).as_deref(), Some(seed));
        theme.toggle();

        assert_eq!(theme.is_dark(), was_dark);
        assert_eq!(document.has_class("dark"), was_dark);
        assert_eq!(persisted(&path).as_deref(), Some(seed));
    }
}

#[test]
fn persisted_choice_overrides_system_signal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let (mut theme, _) = open_theme(&path, Some(true));
        assert!(theme.is_dark());
        theme.set_dark(false);
    }

    let (theme, document) = open_theme(&path, Some(true));
    assert!(!theme.is_dark());
    assert!(!document.has_class("dark"));
}

#[test]
fn system_signal_is_not_persisted_until_user_chooses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let (theme, document) = open_theme(&path, Some(true));
    assert!(theme.is_dark());
    assert!(document.has_class("dark"));
    assert_eq!(persisted(&path), None);
}

#[test]
fn unrecognized_persisted_value_means_light() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    JsonPreferenceStore::new(path.clone())
        .unwrap()
        .set(THEME_KEY, "sepia")
        .unwrap();

    let (theme, _) = open_theme(&path, Some(true));
    assert_eq!(theme.mode(), ColorMode::Light);
}

#[test]
fn initialize_wires_preferences_into_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().to_string_lossy().into_owned()),
        prefers_dark: Some(true),
        ..Config::default()
    };

    let document = ClassList::default();
    let mut ctx = initialize(&config, Arc::new(document.clone())).unwrap();
    assert!(ctx.theme.is_dark());
    assert!(document.has_class("dark"));
    assert!(ctx.directory.is_loading());
    assert_eq!(ctx.directory.total_count(), 0);

    assert!(!ctx.toggle_theme());
    drop(ctx);

    let document = ClassList::default();
    let ctx = initialize(&config, Arc::new(document.clone())).unwrap();
    assert_eq!(ctx.theme.mode(), ColorMode::Light);
    assert!(document.classes().is_empty());
}
