use super::*;

#[test]
fn defaults_match_documented_values() {
    let options = SegmentOptions::default();
    assert!(options.show_kube_logo);
    assert!(options.show_cluster);
    assert!(options.show_namespace);
    assert!(!options.show_default_namespace);
    assert!(!options.api_server_check);
    assert_eq!(options.api_server_check_interval, 15);
    assert!(options.alerts.is_empty());
}

#[test]
fn parse_snake_case_toml() {
    let raw = r#"
show_cluster = false
api_server_check = true
alerts = ["prod", "prod:kube-system"]
"#;
    let options: SegmentOptions = toml::from_str(raw).unwrap();
    assert!(!options.show_cluster);
    assert!(options.api_server_check);
    assert_eq!(options.alerts, vec!["prod".to_string(), "prod:kube-system".to_string()]);
    assert!(options.show_namespace);
}

#[test]
fn parse_kebab_case_aliases() {
    let raw = r#"
show-kube-logo = false
show-default-namespace = true
api-server-check-interval = 60
"#;
    let options: SegmentOptions = toml::from_str(raw).unwrap();
    assert!(!options.show_kube_logo);
    assert!(options.show_default_namespace);
    assert_eq!(options.api_server_check_interval, 60);
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = r#"
show_cluster = true
some_future_option = "whatever"
"#;
    assert!(toml::from_str::<SegmentOptions>(raw).is_ok());
}

#[test]
fn from_json_accepts_a_host_bag() {
    let bag = serde_json::json!({
        "show_kube_logo": false,
        "alerts": ["prod-cluster"],
        "api_server_check_interval": 30,
    });
    let options = SegmentOptions::from_json(bag).unwrap();
    assert!(!options.show_kube_logo);
    assert_eq!(options.alerts, vec!["prod-cluster".to_string()]);
    assert_eq!(options.check_interval(), Duration::from_secs(30));
}

#[test]
fn from_json_rejects_wrongly_typed_values() {
    let bag = serde_json::json!({ "alerts": "not-a-list" });
    assert!(SegmentOptions::from_json(bag).is_err());
}

#[test]
fn load_from_reads_a_file_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "show_namespace = false\n").unwrap();

    let options = SegmentOptions::load_from(&path).unwrap();
    assert!(!options.show_namespace);
    assert!(options.show_cluster);
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SegmentOptions::load_from(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn alert_matches_context_name() {
    let options = SegmentOptions { alerts: vec!["prod".into()], ..Default::default() };
    assert!(options.is_alert("prod", "default"));
    assert!(!options.is_alert("staging", "default"));
}

#[test]
fn alert_matches_namespace_name() {
    let options = SegmentOptions { alerts: vec!["kube-system".into()], ..Default::default() };
    assert!(options.is_alert("anything", "kube-system"));
}

#[test]
fn alert_matches_compound_key() {
    let options = SegmentOptions { alerts: vec!["prod:kube-system".into()], ..Default::default() };
    assert!(options.is_alert("prod", "kube-system"));
    assert!(!options.is_alert("prod", "payments"));
    assert!(!options.is_alert("staging", "kube-system"));
}

#[test]
fn alert_match_is_exact_not_prefix() {
    let options = SegmentOptions { alerts: vec!["prod".into()], ..Default::default() };
    assert!(!options.is_alert("prod-cluster", "default"));
    assert!(!options.is_alert("pro", "default"));
}
