use std::path::PathBuf;

use super::*;

fn temp_config_path(test_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("{APP_NAME}-{test_name}-{}", std::process::id()))
        .join("config.yaml")
}

#[test]
fn partial_config_uses_defaults_test() {
    let config = serde_yaml::from_str::<Config>("output: yaml\n").unwrap();

    assert_eq!(OutputFormat::Yaml, config.output);
    assert!(config.enable_scaling);
    assert!(config.check_access);
    assert_eq!(None, config.impersonate);
}

#[test]
fn impersonate_is_skipped_when_empty_test() {
    let yaml = serde_yaml::to_string(&Config::default()).unwrap();

    assert!(!yaml.contains("impersonate"));
    assert!(yaml.contains("output: text"));
}

#[tokio::test]
async fn missing_config_is_created_test() {
    let path = temp_config_path("missing");
    let _ = std::fs::remove_file(&path);

    let config = load_or_create_default::<Config>(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert!(path.exists());
    assert_eq!(config, Config::load(&path).await.unwrap());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn malformed_config_falls_back_to_default_test() {
    let path = temp_config_path("malformed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "output: [not, a, format]\n").unwrap();

    let config = load_or_create_default::<Config>(&path).await.unwrap();

    assert_eq!(Config::default(), config);
    assert_eq!("output: [not, a, format]\n", std::fs::read_to_string(&path).unwrap());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
