// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the application settings.
//!
//! The application settings are set with a TOML config file. Settings specified in the config file
//! can be overwritten by environment variables. To do so, set an environment variable
//! with the prefix `RSVP_CTRL_` followed by the field names you want to set. Nested fields are separated by two underscores `__`.
//! ```sh
//! RSVP_CTRL_<field>__<field-of-field>...
//! ```
//!
//! # Example
//!
//! set the `storage.guests_file` field:
//! ```sh
//! RSVP_CTRL_STORAGE__GUESTS_FILE=/var/lib/rsvp/guests.json
//! ```
//!
//! # Note
//!
//! Fields set via environment variables do not affect the underlying config file.
//!
//! # Implementation Details:
//!
//! Setting categories, in which all properties implement a default value, should also implement the [`Default`] trait.
use arc_swap::ArcSwap;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub type SharedSettings = Arc<ArcSwap<Settings>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub invitation: Invitation,
    #[serde(default)]
    pub logging: Logging,
}

impl Settings {
    /// Creates a new Settings instance from the provided TOML file.
    /// Specific fields can be set or overwritten with environment variables (See module level docs for more details).
    pub fn load(file_name: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(file_name))
            .add_source(Environment::with_prefix("RSVP_CTRL").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Creates a new Settings instance from a TOML string, ignoring the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Http {
    #[serde(default = "default_http_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: HttpCors,
}

impl Default for Http {
    fn default() -> Self {
        Self {
            port: default_http_port(),
            cors: HttpCors::default(),
        }
    }
}

const fn default_http_port() -> u16 {
    3000
}

/// Settings for CORS (Cross Origin Resource Sharing)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpCors {
    #[serde(default)]
    pub allowed_origin: Vec<String>,
}

/// Where guests and RSVPs are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    #[serde(default = "default_guests_file")]
    pub guests_file: PathBuf,
    #[serde(default = "default_rsvps_file")]
    pub rsvps_file: PathBuf,
    /// Keep all records in memory only, nothing is written to disk
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            guests_file: default_guests_file(),
            rsvps_file: default_rsvps_file(),
            in_memory: false,
        }
    }
}

fn default_guests_file() -> PathBuf {
    "guests.json".into()
}

fn default_rsvps_file() -> PathBuf {
    "rsvps.json".into()
}

/// Settings used when building personalized invitation links
///
/// This section is reloadable while the controller is running.
#[derive(Debug, Clone, Deserialize)]
pub struct Invitation {
    /// Public base url of the RSVP site. Derived from the incoming request when unset.
    #[serde(default)]
    pub public_url: Option<url::Url>,

    /// Path segment between the base url and the invite code
    #[serde(default = "default_rsvp_path")]
    pub rsvp_path: String,

    /// Share message, `{name}` and `{link}` get replaced with the guest's name and RSVP link
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// Click-to-chat url, the guest's phone number is appended
    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,
}

impl Default for Invitation {
    fn default() -> Self {
        Self {
            public_url: None,
            rsvp_path: default_rsvp_path(),
            message_template: default_message_template(),
            whatsapp_url: default_whatsapp_url(),
        }
    }
}

fn default_rsvp_path() -> String {
    "/rsvp/".into()
}

fn default_message_template() -> String {
    "Hi {name}! You're invited to [Son's Name]'s Bar Mitzvah! Please RSVP at: {link}".into()
}

fn default_whatsapp_url() -> String {
    "https://wa.me/".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    #[serde(default = "default_directives")]
    pub default_directives: Vec<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            default_directives: default_directives(),
        }
    }
}

fn default_directives() -> Vec<String> {
    // Disable spamming noninformative traces
    vec![
        "rsvp=INFO".into(),
        "actix_server=WARN".into(),
        "mio=ERROR".into(),
    ]
}
