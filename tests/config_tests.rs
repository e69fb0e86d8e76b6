mod common;

use common::viewport;
use tunnel_core::constants::*;
use tunnel_core::{ConfigError, Simulation, TunnelConfig, DEFAULT_PHRASES};

#[test]
fn default_config_is_valid() {
    let config = TunnelConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.z_near, Z_NEAR);
    assert_eq!(config.z_far, Z_FAR);
    assert_eq!(config.quote_cap, QUOTE_CAP);
    assert_eq!(config.phrases.len(), DEFAULT_PHRASES.len());
}

#[test]
fn empty_phrase_list_is_rejected() {
    let config = TunnelConfig {
        phrases: &[],
        ..TunnelConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::EmptyPhrases));
}

#[test]
fn inverted_depth_range_is_rejected() {
    let config = TunnelConfig {
        z_near: 3000.0,
        ..TunnelConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvertedDepthRange { .. })
    ));
}

#[test]
fn non_positive_values_name_the_field() {
    let config = TunnelConfig {
        fov: 0.0,
        ..TunnelConfig::default()
    };
    match config.validate() {
        Err(ConfigError::NonPositive { name, .. }) => assert_eq!(name, "fov"),
        other => panic!("unexpected {other:?}"),
    }
    let config = TunnelConfig {
        base_speed: f32::NAN,
        ..TunnelConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositive { name: "base_speed", .. })
    ));
}

#[test]
fn quality_and_pool_bounds_must_be_ordered() {
    let config = TunnelConfig {
        quality_min: 1.2,
        quality_max: 1.0,
        ..TunnelConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::QualityBounds { .. })
    ));
    let config = TunnelConfig {
        pool_base_min: 300.0,
        ..TunnelConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::PoolBounds { .. })));
}

#[test]
fn zero_quote_cap_is_rejected() {
    let config = TunnelConfig {
        quote_cap: 0,
        ..TunnelConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroQuoteCap));
}

#[test]
fn simulation_refuses_invalid_config() {
    let config = TunnelConfig {
        phrases: &[],
        ..TunnelConfig::default()
    };
    assert!(Simulation::new(config, viewport(), 0).is_err());
}

#[test]
fn errors_render_readable_messages() {
    let msg = ConfigError::EmptyPhrases.to_string();
    assert!(!msg.is_empty());
    let msg = ConfigError::NonPositive {
        name: "fov",
        value: -1.0,
    }
    .to_string();
    assert!(msg.contains("fov"));
}

#[test]
fn bounds_mirror_config() {
    let config = TunnelConfig::default();
    let b = config.bounds();
    assert_eq!(b.radius, TUNNEL_RADIUS);
    assert_eq!(b.z_near, Z_NEAR);
    assert_eq!(b.z_far, Z_FAR);
}
