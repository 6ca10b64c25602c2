//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::BackendKind;
use crate::domain::error::ConfigError;
use crate::domain::notification::NotificationIcon;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "title" => config.title = Some(value.to_string()),
        "app_name" => config.app_name = Some(value.to_string()),
        "icon" => config.icon = Some(value.trim().to_lowercase()),
        "backend" => config.backend = Some(value.trim().to_lowercase()),
        "auto_cancel" => config.auto_cancel = Some(parse_bool_for(key, value)?),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "title" => config.title,
        "app_name" => config.app_name,
        "icon" => config.icon,
        "backend" => config.backend,
        "auto_cancel" => config.auto_cancel.map(|b| b.to_string()),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("title", config.title.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("app_name", config.app_name.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("icon", config.icon.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("backend", config.backend.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "auto_cancel",
        &config
            .auto_cancel
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "icon" => {
            value
                .parse::<NotificationIcon>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "backend" => {
            value
                .parse::<BackendKind>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "auto_cancel" => {
            parse_bool_for(key, value)?;
        }
        "app_name" if value.trim().is_empty() => {
            return Err(invalid("Value must not be empty".to_string()));
        }
        _ => {} // title accepts any string
    }
    Ok(())
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn validate_icon() {
        assert!(validate_config_value("icon", "success").is_ok());
        assert!(validate_config_value("icon", "ic_notify_icon").is_err());
    }

    #[test]
    fn validate_backend() {
        assert!(validate_config_value("backend", "memory").is_ok());
        assert!(validate_config_value("backend", "Desktop").is_ok());
        assert!(validate_config_value("backend", "dbus").is_err());
    }

    #[test]
    fn validate_app_name_not_empty() {
        assert!(validate_config_value("app_name", "bench").is_ok());
        assert!(validate_config_value("app_name", "  ").is_err());
    }

    #[test]
    fn title_accepts_anything() {
        assert!(validate_config_value("title", "").is_ok());
        assert!(validate_config_value("title", "line\nbreak").is_ok());
    }

    #[tokio::test]
    async fn set_persists_normalized_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "backend", " MEMORY ")
            .await
            .unwrap();
        handle_set(&store, &presenter, "auto_cancel", "no")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.backend, Some("memory".to_string()));
        assert_eq!(config.auto_cancel, Some(false));
    }

    #[tokio::test]
    async fn set_unknown_key_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_set(&store, &presenter, "api_key", "x")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
        assert!(!store.exists());
    }
}
