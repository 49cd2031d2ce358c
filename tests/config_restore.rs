use std::fs;
use std::path::PathBuf;

use driftscope::config::AnimationConfig;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "driftscope_config_restore_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn missing_file_writes_commented_defaults() {
    let path = unique_path("defaults.toml");
    let path_str = path.to_string_lossy().to_string();
    let _ = fs::remove_file(&path);

    let cfg = AnimationConfig::load_or_default(&path_str);
    assert!(path.exists(), "config file should be created");
    assert_eq!(cfg, AnimationConfig::default());
    assert_eq!(cfg.sample_count, 1000);
    assert_eq!(cfg.trend_strength, 0.5);
    assert_eq!(cfg.volatility, 1.0);
    assert_eq!(cfg.animation_delay_seconds, 1.0);
    assert_eq!(cfg.seed, 42);

    let contents = fs::read_to_string(&path).expect("read written config");
    assert!(
        contents.contains("# sample_count = 1000"),
        "should write commented sample_count"
    );
    assert!(
        contents.contains("# volatility = 1.0"),
        "should write commented volatility"
    );
    assert!(
        contents.lines().all(|l| l.trim().is_empty() || l.starts_with("# ")),
        "every value line should be commented out"
    );

    // The commented template parses back to pure defaults.
    let reread = AnimationConfig::load_or_default(&path_str);
    assert_eq!(reread, AnimationConfig::default());

    let _ = fs::remove_file(&path);
}

#[test]
fn existing_file_round_trips() {
    let path = unique_path("custom.toml");
    let path_str = path.to_string_lossy().to_string();
    let custom = AnimationConfig {
        sample_count: 250,
        trend_strength: 1.5,
        volatility: 0.3,
        animation_delay_seconds: 0.5,
        seed: 7,
    };
    let text = toml::to_string_pretty(&custom).expect("serialize custom config");
    fs::write(&path, text).expect("write custom config");

    let cfg = AnimationConfig::load_or_default(&path_str);
    assert_eq!(cfg, custom);

    let _ = fs::remove_file(&path);
}

#[test]
fn unparsable_file_falls_back_to_defaults() {
    let path = unique_path("broken.toml");
    let path_str = path.to_string_lossy().to_string();
    fs::write(&path, "volatility = \"not a number\"\n").expect("write broken config");

    let cfg = AnimationConfig::load_or_default(&path_str);
    assert_eq!(cfg, AnimationConfig::default());

    let _ = fs::remove_file(&path);
}
