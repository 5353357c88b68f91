use super::{default_settings_path, ConfigError, Settings};

pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = default_settings_path()?;
    if !path.exists() {
        return Err(ConfigError::MissingSettings {
            path: path.display().to_string(),
        });
    }
    let settings = Settings::from_path(&path)?;
    settings.validate()?;
    Ok(settings)
}
