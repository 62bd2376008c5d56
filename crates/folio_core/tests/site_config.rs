use folio_core::{ConfigError, SiteConfig, DEFAULT_BASE_PATH};

#[test]
fn deployment_base_path_is_normalized_with_trailing_slash() {
    let config = SiteConfig::new("  /portfolio ").unwrap();
    assert_eq!(config.base_path(), "/portfolio/");
    assert_eq!(SiteConfig::new("/portfolio/").unwrap(), config);
}

#[test]
fn assets_resolve_under_base_path() {
    let config = SiteConfig::new("/portfolio/").unwrap();
    assert_eq!(config.resolve_asset("sanam.jpg"), "/portfolio/sanam.jpg");
    assert_eq!(config.resolve_asset("/vid3.mp4"), "/portfolio/vid3.mp4");
}

#[test]
fn absolute_url_bases_are_accepted() {
    let config = SiteConfig::new("https://cdn.example.com/site").unwrap();
    assert_eq!(
        config.resolve_asset("vid3.mp4"),
        "https://cdn.example.com/site/vid3.mp4"
    );
}

#[test]
fn blank_or_malformed_base_paths_are_rejected() {
    assert_eq!(SiteConfig::new("   ").unwrap_err(), ConfigError::EmptyBasePath);
    assert!(matches!(
        SiteConfig::new("/my site/").unwrap_err(),
        ConfigError::InvalidBasePath(_)
    ));
    assert!(matches!(
        SiteConfig::new("../up").unwrap_err(),
        ConfigError::InvalidBasePath(_)
    ));
}

#[test]
fn default_config_uses_root() {
    assert_eq!(SiteConfig::default().base_path(), DEFAULT_BASE_PATH);
}
