use crate::server::error::{config::ConfigError, Error};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_STUDENT_EMAIL_DOMAIN: &str = "reva.edu.in";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    pub student_email_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            student_email_domain: student_email_domain()?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn student_email_domain() -> Result<String, ConfigError> {
    let domain = optional("STUDENT_EMAIL_DOMAIN", DEFAULT_STUDENT_EMAIL_DOMAIN)
        .trim()
        .trim_start_matches('@')
        .to_lowercase();

    if domain.is_empty() || !domain.contains('.') {
        return Err(ConfigError::InvalidEnvValue {
            var: "STUDENT_EMAIL_DOMAIN".to_string(),
            reason: "expected a domain such as reva.edu.in".to_string(),
        });
    }

    Ok(domain)
}
