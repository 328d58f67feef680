use super::*;

#[test]
fn verbosity_maps_to_level() {
    assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
    assert_eq!(level_for_verbosity(1), LevelFilter::Info);
    assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
    assert_eq!(level_for_verbosity(3), LevelFilter::Trace);
    assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
}

#[test]
fn no_config_loads_bundled_rules() {
    let cli = Cli::parse_from(["dockerfile-guard", "--no-config", "Dockerfile"]);
    let loaded = load_rules(&cli).unwrap();
    assert_eq!(loaded.origin, dockerfile_guard::config::RulesOrigin::Bundled);
}

#[test]
fn explicit_missing_rules_is_an_error() {
    let cli = Cli::parse_from([
        "dockerfile-guard",
        "--rules",
        "/nonexistent/rules.toml",
        "Dockerfile",
    ]);
    let err = load_rules(&cli).unwrap_err();
    assert!(err.is_config_error());
}
