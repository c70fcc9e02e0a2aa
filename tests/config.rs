use cappy_site::logging::LogLevel;
use cappy_site::{SiteConfig, SiteError};

#[test]
fn defaults_match_page_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.nav_breakpoint_px, 992.0);
    assert_eq!(config.reveal_threshold, 0.2);
    assert_eq!(config.hero_refresh_ms, 4000);
    assert_eq!(config.hero_points, 120);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn empty_object_keeps_defaults() {
    assert_eq!(SiteConfig::from_json("{}"), Ok(SiteConfig::default()));
}

#[test]
fn partial_overrides_apply() {
    let config =
        SiteConfig::from_json(r#"{ "hero_refresh_ms": 2500, "log_level": "warn" }"#).unwrap();
    assert_eq!(config.hero_refresh_ms, 2500);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.nav_breakpoint_px, 992.0);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(matches!(
        SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#),
        Err(SiteError::Config(_))
    ));
    assert!(matches!(
        SiteConfig::from_json(r#"{ "hero_points": 1 }"#),
        Err(SiteError::Config(_))
    ));
    assert!(matches!(
        SiteConfig::from_json("{ not json"),
        Err(SiteError::Config(_))
    ));
}

#[test]
fn tailwind_lg_screen_matches_nav_breakpoint() {
    let tailwind = include_str!("../tailwind.config.js");
    let expected = format!("lg: '{}px'", SiteConfig::default().nav_breakpoint_px);
    assert!(tailwind.contains(&expected), "tailwind.config.js lacks {expected}");
}
