//! Configuration validation.

use url::{Host, Url};

use crate::error::ConfigError;
use crate::schema::{BACKEND_URL_KEY, Config};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(ref url) = config.backend.url {
            Self::validate_backend_url("backend.url", url, &mut result);
        }

        if let Some(url) = config.secrets.get(BACKEND_URL_KEY) {
            Self::validate_backend_url(&format!("secrets.{}", BACKEND_URL_KEY), url, &mut result);
        }

        for (id, table) in &config.extensions {
            let path = format!("extensions.{}.{}", id, BACKEND_URL_KEY);
            match table.get(BACKEND_URL_KEY) {
                Some(serde_json::Value::String(url)) => {
                    Self::validate_backend_url(&path, url, &mut result)
                }
                Some(_) => result.add_error(ValidationError::new(path, "must be a string")),
                None => {}
            }
        }

        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }

        result
    }

    /// An empty URL means "not set" and is left to the fallback chain.
    fn validate_backend_url(path: &str, raw: &str, result: &mut ValidationResult) {
        if raw.is_empty() {
            return;
        }

        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                result.add_error(ValidationError::new(path, format!("Invalid URL: {}", e)));
                return;
            }
        };

        match url.scheme() {
            "https" => {}
            "http" => {
                let loopback = match url.host() {
                    Some(Host::Domain(domain)) => domain == "localhost",
                    Some(Host::Ipv4(ip)) => ip.is_loopback(),
                    Some(Host::Ipv6(ip)) => ip.is_loopback(),
                    None => false,
                };
                if !loopback {
                    result.add_warning(ValidationWarning::new(
                        path,
                        "Plain http to a non-local host sends bearer tokens unencrypted",
                    ));
                }
            }
            other => {
                result.add_error(ValidationError::new(
                    path,
                    format!("URL scheme must be http or https, got {}", other),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
