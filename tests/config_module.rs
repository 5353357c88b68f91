use giftdesk::config::{
    default_settings_path, load_settings, save_settings_template, ConfigError, Settings,
    DEFAULT_API_BASE,
};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct HomeGuard {
    old_home: Option<std::ffi::OsString>,
}

impl HomeGuard {
    fn set(home: &Path) -> Self {
        let old_home = std::env::var_os("HOME");
        std::env::set_var("HOME", home);
        Self { old_home }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        if let Some(old_home) = self.old_home.take() {
            std::env::set_var("HOME", old_home);
        } else {
            std::env::remove_var("HOME");
        }
    }
}

#[test]
fn config_module_template_round_trips_through_init() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let temp = tempdir().expect("tempdir");
    let _home = HomeGuard::set(temp.path());

    let written = save_settings_template(&Settings::template("webpack")).expect("write template");
    assert_eq!(written, default_settings_path().expect("settings path"));

    let parsed = Settings::from_path(&written).expect("parse template");
    assert_eq!(parsed.collective_slug, "webpack");
    assert_eq!(parsed.api_base, DEFAULT_API_BASE);
    // the template is a skeleton and fails validation until filled in
    assert!(parsed.validate().is_err());
}

#[test]
fn config_module_load_reports_missing_settings() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let temp = tempdir().expect("tempdir");
    let _home = HomeGuard::set(temp.path());

    let err = load_settings().expect_err("no settings yet");
    assert!(matches!(err, ConfigError::MissingSettings { .. }));
}

#[test]
fn config_module_load_returns_validated_settings() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let temp = tempdir().expect("tempdir");
    let _home = HomeGuard::set(temp.path());

    let path = default_settings_path().expect("settings path");
    fs::create_dir_all(path.parent().expect("parent")).expect("create state root");
    fs::write(
        &path,
        r#"
api_token: secret
collective_id: 42
collective_slug: webpack
page_limit: 20
"#,
    )
    .expect("write settings");

    let settings = load_settings().expect("load settings");
    assert_eq!(settings.collective_id, 42);
    assert_eq!(settings.page_limit, Some(20));
    assert_eq!(settings.currency, "USD");
}

#[test]
fn config_module_load_rejects_invalid_yaml() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let temp = tempdir().expect("tempdir");
    let _home = HomeGuard::set(temp.path());

    let path = default_settings_path().expect("settings path");
    fs::create_dir_all(path.parent().expect("parent")).expect("create state root");
    fs::write(&path, "api_token: [unclosed").expect("write settings");

    assert!(matches!(
        load_settings().expect_err("bad yaml"),
        ConfigError::Parse { .. }
    ));
}
