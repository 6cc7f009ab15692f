//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RoutingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading and persistence.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    let mut out = String::new();
    for (i, err) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&err.to_string());
    }
    out
}

/// Load and validate a configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RoutingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_routes_in_order() {
        let config = parse_config(
            r#"
            url = "http://example.com"
            clean_urls = true

            [[routes]]
            path = "/"
            action = "index"

            [[routes]]
            path = "tag/(name)/"
            action = "tag;sort=new"
            "#,
        )
        .unwrap();

        assert!(config.clean_urls);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[1].action, "tag;sort=new");
    }

    #[test]
    fn syntax_errors_surface_as_parse() {
        let err = parse_config("url = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn semantic_errors_surface_as_validation() {
        let err = parse_config(r#"url = "not a url""#).unwrap_err();
        let rendered = err.to_string();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(rendered.contains("not a url"));
    }
}
