use crate::constants::{CLIENT_ERROR_CREDENTIAL, CLIENT_ERROR_INI, ENV_CREDENTIALS_FILE};
use crate::credential::{Credential, CredentialSource, Provider};
use crate::error::{AppError, SdkError, TcResult};
use crate::utils::config::parse_bool;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the implicit section holding keys that precede any header
pub const GLOBAL_SECTION: &str = "____GLOBAL____";

/// Parsed INI document
///
/// Lines are trimmed; blank lines and lines starting with `#` or `;` are
/// ignored; `key = value` pairs without a key or value are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: HashMap<String, HashMap<String, String>>,
}

fn ini_error(message: String) -> AppError {
    SdkError::client(CLIENT_ERROR_INI, message).into()
}

impl IniFile {
    /// Reads and parses the file at `path`
    pub fn load(path: impl AsRef<Path>) -> TcResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ini_error(e.to_string()))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses `content`; `origin` names the document in error messages
    pub fn parse(content: &str, origin: &str) -> TcResult<Self> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current = GLOBAL_SECTION.to_string();
        sections.entry(current.clone()).or_default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.replace('\r', "");
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                let name = line
                    .strip_prefix('[')
                    .and_then(|l| l.strip_suffix(']'))
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        ini_error(format!(
                            "INI file {} line {} is not valid: wrong section",
                            origin,
                            index + 1
                        ))
                    })?;
                current = name.to_string();
                sections.entry(current.clone()).or_default();
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let (key, value) = (key.trim(), value.trim());
                if !key.is_empty() && !value.is_empty() {
                    sections
                        .entry(current.clone())
                        .or_default()
                        .insert(key.to_string(), value.to_string());
                }
            }
        }

        Ok(Self { sections })
    }

    /// Raw value of `key` in `section`
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Whether `section` exists
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Value of `key` parsed as a boolean
    pub fn get_bool(&self, section: &str, key: &str) -> TcResult<Option<bool>> {
        self.get(section, key)
            .map(|raw| {
                parse_bool(raw).ok_or_else(|| {
                    ini_error(format!("failed to parsing \"{raw}\" to Bool: invalid syntax"))
                })
            })
            .transpose()
    }

    /// Value of `key` parsed as an integer
    pub fn get_i64(&self, section: &str, key: &str) -> TcResult<Option<i64>> {
        self.get(section, key)
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|e| ini_error(format!("failed to parsing {raw} to int64: {e}")))
            })
            .transpose()
    }
}

/// Reads `secret_id` / `secret_key` from the `[default]` section of a credentials file
///
/// The file is `$TENCENTCLOUD_CREDENTIALS_FILE` when set, otherwise
/// `~/.tencentcloud/credentials`.
#[derive(Debug, Clone, Default)]
pub struct ProfileProvider {
    path: Option<PathBuf>,
}

impl ProfileProvider {
    /// Provider reading a fixed file instead of looking it up
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `.tencentcloud/credentials` below the user's home directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tencentcloud").join("credentials"))
    }

    fn resolve_path(&self) -> TcResult<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        match env::var(ENV_CREDENTIALS_FILE) {
            Ok(path) if path.is_empty() => Err(SdkError::client(
                CLIENT_ERROR_CREDENTIAL,
                format!("Environment variable '{ENV_CREDENTIALS_FILE}' cannot be empty"),
            )
            .into()),
            Ok(path) => Ok(PathBuf::from(path)),
            Err(_) => {
                let path = Self::default_path()
                    .filter(|path| path.exists())
                    .ok_or_else(|| {
                        AppError::CredentialUnavailable("could not find config file".to_string())
                    })?;
                Ok(path)
            }
        }
    }
}

#[async_trait]
impl Provider for ProfileProvider {
    async fn get_credential(&self) -> TcResult<Arc<dyn CredentialSource>> {
        let path = self.resolve_path()?;
        let ini = IniFile::load(&path)?;
        match (
            ini.get("default", "secret_id"),
            ini.get("default", "secret_key"),
        ) {
            (Some(id), Some(key)) => Ok(Arc::new(Credential::new(id, key))),
            _ => Err(SdkError::client(
                CLIENT_ERROR_CREDENTIAL,
                "Failed to parse profile file,please confirm whether it contains \"secret_id\" and \"secret_key\" in section: \"default\" ",
            )
            .into()),
        }
    }
}
