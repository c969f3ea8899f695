use std::fmt;
use std::net::SocketAddr;

use chrono::{FixedOffset, Offset, Utc};
use log::warn;

use crate::errors::ConfigError;

pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com/v19.0";
pub const DEFAULT_TEMPLATE_NAME: &str = "appointment_reminder";
pub const DEFAULT_TEMPLATE_LANGUAGE: &str = "en";
/// South Africa Standard Time, no DST.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 2;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Pre-approved template used for business-initiated reminders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderTemplate {
    pub name: String,
    pub language: String,
}

impl Default for ReminderTemplate {
    fn default() -> Self {
        Self {
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            language: DEFAULT_TEMPLATE_LANGUAGE.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub business_account_id: String,
    pub access_token: String,
    pub verify_token: String,
    pub graph_api_url: String,
    pub template: ReminderTemplate,
    pub utc_offset: FixedOffset,
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// The three provider credentials are required but not enforced: a
    /// missing one logs a warning and later sends or handshakes fail.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            let value = lookup(key).unwrap_or_default();
            if value.is_empty() {
                warn!("{key} is not set; provider calls will fail");
            }
            value
        };

        let business_account_id = required("WHATSAPP_BUSINESS_ACCOUNT_ID");
        let access_token = required("WHATSAPP_ACCESS_TOKEN");
        let verify_token = required("VERIFY_TOKEN");

        let graph_api_url = lookup("GRAPH_API_URL")
            .unwrap_or_else(|| DEFAULT_GRAPH_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let defaults = ReminderTemplate::default();
        let template = ReminderTemplate {
            name: lookup("REMINDER_TEMPLATE_NAME").unwrap_or(defaults.name),
            language: lookup("REMINDER_TEMPLATE_LANGUAGE").unwrap_or(defaults.language),
        };

        let utc_offset = match lookup("UTC_OFFSET_HOURS") {
            Some(raw) => {
                let hours = raw.trim().parse::<i32>().map_err(|_| ConfigError::Invalid {
                    name: "UTC_OFFSET_HOURS",
                    value: raw.clone(),
                })?;
                offset_from_hours(hours).ok_or(ConfigError::Invalid {
                    name: "UTC_OFFSET_HOURS",
                    value: raw,
                })?
            }
            None => default_offset(),
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        Ok(Self {
            business_account_id,
            access_token,
            verify_token,
            graph_api_url,
            template,
            utc_offset,
            database_url,
            bind_addr,
        })
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("business_account_id", &self.business_account_id)
            .field("access_token", &"<redacted>")
            .field("verify_token", &"<redacted>")
            .field("graph_api_url", &self.graph_api_url)
            .field("template", &self.template)
            .field("utc_offset", &self.utc_offset)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}

/// SAST (UTC+2).
pub fn default_offset() -> FixedOffset {
    offset_from_hours(DEFAULT_UTC_OFFSET_HOURS).unwrap_or_else(|| Utc.fix())
}
