// SPDX-License-Identifier: MPL-2.0
use souq_gallery::app::persisted_state::AppState;
use souq_gallery::config::{self, CategoryOption, Config};
use souq_gallery::i18n::fluent::I18n;
use souq_gallery::listings::{FilterValues, ListingsClient, SortBy};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french_config = loaded;
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("filter-apply"), i18n_en.tr("filter-apply"));
}

#[test]
fn categories_survive_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.listings.categories = vec![
        CategoryOption {
            id: "3".into(),
            name: "Electronics".into(),
        },
        CategoryOption {
            id: "7".into(),
            name: "Furniture".into(),
        },
    ];
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.listings.categories, config.listings.categories);
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[server\nbase_url = 3")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn last_query_is_restored_on_next_start() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let query = FilterValues {
        q: "sofa".into(),
        location: "nairobi".into(),
        sort_by: SortBy::PriceLow,
        page: 4,
        ..FilterValues::default()
    };

    let mut state = AppState::default();
    assert!(state.remember_query(&query));
    assert!(!state.remember_query(&query));
    assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());

    let (restored, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let restored_query = restored.last_query.expect("query persisted");
    assert_eq!(restored_query.q, "sofa");
    assert_eq!(restored_query.sort_by, SortBy::PriceLow);
    assert_eq!(restored_query.page, 1);
}

#[test]
fn listings_url_reflects_restored_filters() {
    let client = ListingsClient::new(&Config::default().server).expect("default server is valid");
    let query = FilterValues {
        category: "3".into(),
        min_price: "5000".into(),
        page: 2,
        ..FilterValues::default()
    };

    let url = client.listings_url(&query);
    assert_eq!(url.path(), "/all-listings/");
    assert_eq!(
        url.query(),
        Some("category=3&min_price=5000&sort_by=newest&page=2")
    );
}
