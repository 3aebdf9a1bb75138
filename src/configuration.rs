use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;

/// Where submissions land when no recipient is configured.
pub const FALLBACK_RECIPIENT: &str = "hello@example.com";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub smtp: SmtpSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct SmtpSettings {
    #[serde(default)]
    pub host: String,
    #[serde(
        default = "default_smtp_port",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub port: u16,
    #[serde(default, deserialize_with = "deserialize_secure_flag")]
    pub secure: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_smtp_password")]
    pub password: SecretString,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

impl SmtpSettings {
    /// Host, port, username and password are mandatory for dispatch. The check
    /// runs per request so a misconfigured deployment answers every submission
    /// with the same error instead of refusing to start.
    pub fn is_complete(&self) -> bool {
        !self.host.is_empty()
            && self.port != 0
            && !self.username.is_empty()
            && !self.password.expose_secret().is_empty()
    }

    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.username)
    }

    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(FALLBACK_RECIPIENT)
    }
}

fn default_smtp_port() -> u16 {
    587
}

/// Implicit TLS is opted into only by the literal string `"true"` (or a real
/// boolean from the yaml layers); any other value means STARTTLS.
fn deserialize_secure_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum SecureFlag {
        Bool(bool),
        Text(String),
    }

    Ok(match SecureFlag::deserialize(deserializer)? {
        SecureFlag::Bool(flag) => flag,
        SecureFlag::Text(text) => text == "true",
    })
}

fn default_smtp_password() -> SecretString {
    String::new().into()
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine current directory");
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENV");

    let settings = config::Config::builder()
        .add_source(
            config::File::with_name(
                conf_dir
                    .join("base")
                    .to_str()
                    .expect("Failed to read base configuration"),
            )
            .required(true),
        )
        .add_source(
            config::File::with_name(
                conf_dir
                    .join(env.as_str())
                    .to_str()
                    .expect("Failed to read environment configuration"),
            )
            .required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
