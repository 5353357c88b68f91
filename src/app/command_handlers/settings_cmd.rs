use crate::config::{default_settings_path, load_settings, save_settings_template, Settings};

pub(crate) fn cmd_config(args: &[String]) -> Result<String, String> {
    match args.first().map(String::as_str) {
        Some("show") => cmd_config_show(),
        Some("init") => cmd_config_init(args.get(1).map(String::as_str)),
        _ => Err("usage: giftdesk config show|init <collective-slug>".to_string()),
    }
}

fn cmd_config_show() -> Result<String, String> {
    let settings = load_settings().map_err(|e| e.to_string())?;
    let path = default_settings_path().map_err(|e| e.to_string())?;
    Ok(format!(
        "settings at {}\ncollective: {} (id {})\napi_base: {}\ncurrency: {}\npage_limit: {}",
        path.display(),
        settings.collective_slug,
        settings.collective_id,
        settings.api_base,
        settings.currency,
        settings
            .page_limit
            .map(|limit| limit.to_string())
            .unwrap_or_else(|| "<default>".to_string()),
    ))
}

fn cmd_config_init(slug: Option<&str>) -> Result<String, String> {
    let Some(slug) = slug.filter(|value| !value.trim().is_empty()) else {
        return Err("usage: giftdesk config init <collective-slug>".to_string());
    };
    let path = default_settings_path().map_err(|e| e.to_string())?;
    if path.exists() {
        return Err(format!(
            "settings already exist at {}; edit that file instead",
            path.display()
        ));
    }
    let written = save_settings_template(&Settings::template(slug.trim()))
        .map_err(|e| e.to_string())?;
    Ok(format!(
        "wrote settings template to {}; fill in api_token and collective_id",
        written.display()
    ))
}
