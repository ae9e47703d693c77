use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Where contact submissions are POSTed as JSON
    pub endpoint: String,
    #[serde(default = "default_contact_timeout")]
    pub timeout_secs: u64,
}

fn default_contact_timeout() -> u64 {
    15
}

/// Business details shown in the navigation, footer and contact page
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_tagline")]
    pub tagline: String,
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_phone_href")]
    pub phone_href: String,
    #[serde(default = "default_site_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_site_instagram")]
    pub instagram: String,
    #[serde(default = "default_site_region")]
    pub region: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_site_tagline(),
            email: default_site_email(),
            phone: default_site_phone(),
            phone_href: default_site_phone_href(),
            whatsapp: default_site_whatsapp(),
            instagram: default_site_instagram(),
            region: default_site_region(),
        }
    }
}

fn default_site_name() -> String {
    "David Campos".to_string()
}

fn default_site_tagline() -> String {
    "Realty & Remodeling".to_string()
}

fn default_site_email() -> String {
    "Campos33david@gmail.com".to_string()
}

fn default_site_phone() -> String {
    "+1 (737) 224-1030".to_string()
}

fn default_site_phone_href() -> String {
    "tel:+17372241030".to_string()
}

fn default_site_whatsapp() -> String {
    "https://wa.me/17372241030".to_string()
}

fn default_site_instagram() -> String {
    "https://instagram.com/guayo.me".to_string()
}

fn default_site_region() -> String {
    "Austin, TX".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `CONTACT_API` for the contact endpoint
    /// 2. Environment variables (CAMPOS__CONTACT__ENDPOINT, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.endpoint", "")?
            .set_default("contact.timeout_secs", default_contact_timeout())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file leaves defaults and environment in charge
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CAMPOS")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint) = env::var("CONTACT_API") {
            builder = builder.set_override("contact.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.contact.timeout_secs == 0 {
            return Err("Contact timeout must be at least 1 second".to_string());
        }
        self.contact.endpoint_url()?;
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            ));
        }
        Ok(())
    }
}

impl ContactConfig {
    pub fn endpoint_url(&self) -> Result<Url, String> {
        if self.endpoint.is_empty() {
            return Err("Contact endpoint must be set (contact.endpoint or CONTACT_API)".to_string());
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("Invalid contact endpoint '{}': {e}", self.endpoint))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Contact endpoint must use http or https, got '{}'",
                url.scheme()
            ));
        }

        Ok(url)
    }
}
