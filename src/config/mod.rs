use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";
pub const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Process-lifetime settings. An optional TOML file overrides the
/// defaults field by field; command-line flags override the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini_model: String,
    pub openai_model: String,
    pub timeout_secs: u64,
    pub static_dir: String,
    pub artifacts_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            gemini_model: "gemini-2.5-pro".into(),
            openai_model: "gpt-5".into(),
            timeout_secs: 600,
            static_dir: "static".into(),
            artifacts_root: ".".into(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => {
                let raw = fs_err::read_to_string(p)
                    .with_context(|| format!("failed to read config file {p}"))?;
                toml::from_str(&raw).with_context(|| format!("failed to parse config file {p}"))
            }
            None => Ok(Self::default()),
        }
    }
}

/// The one credential the process runs with, fixed at startup. Both env
/// vars present is a fatal configuration error; neither means the service
/// starts unconfigured and rejects generation requests.
#[derive(Debug, Clone)]
pub enum Credentials {
    Gemini { api_key: String },
    OpenAi { api_key: String },
}

impl Credentials {
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_pair(
            std::env::var(GEMINI_KEY_VAR).ok().filter(|k| !k.is_empty()),
            std::env::var(OPENAI_KEY_VAR).ok().filter(|k| !k.is_empty()),
        )
    }

    /// Pure form of the selection rule, so the mutual exclusion is
    /// testable without touching the process environment.
    pub fn from_pair(gemini: Option<String>, openai: Option<String>) -> Result<Option<Self>> {
        match (gemini, openai) {
            (Some(_), Some(_)) => bail!("Use either Gemini / OpenAI API, not both."),
            (Some(api_key), None) => Ok(Some(Self::Gemini { api_key })),
            (None, Some(api_key)) => Ok(Some(Self::OpenAi { api_key })),
            (None, None) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_credentials_is_a_startup_error() {
        let err = Credentials::from_pair(Some("g".into()), Some("o".into())).unwrap_err();
        assert_eq!(err.to_string(), "Use either Gemini / OpenAI API, not both.");
    }

    #[test]
    fn single_credential_selects_that_provider() {
        match Credentials::from_pair(Some("g".into()), None).unwrap() {
            Some(Credentials::Gemini { api_key }) => assert_eq!(api_key, "g"),
            other => panic!("expected gemini, got {other:?}"),
        }
        match Credentials::from_pair(None, Some("o".into())).unwrap() {
            Some(Credentials::OpenAi { api_key }) => assert_eq!(api_key, "o"),
            other => panic!("expected openai, got {other:?}"),
        }
    }

    #[test]
    fn no_credentials_starts_unconfigured() {
        assert!(Credentials::from_pair(None, None).unwrap().is_none());
    }

    #[test]
    fn partial_config_file_keeps_defaults_for_the_rest() {
        let cfg: Config = toml::from_str("port = 8080\nopenai_model = \"gpt-5-mini\"").unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.openai_model, "gpt-5-mini");
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.gemini_model, "gemini-2.5-pro");
    }
}
