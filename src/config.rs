//! Application configuration management.
//!
//! Configuration comes from environment variables, deserialized with `envy`
//! into a type-safe struct. Nothing is required: with an empty environment
//! the store lives at `api_keys.json` in the working directory.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `API_KEYS_FILE` (optional): path of the JSON key store, defaults to `api_keys.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_keys_file")]
    pub api_keys_file: PathBuf,
}

/// Default store path if API_KEYS_FILE is not set.
fn default_api_keys_file() -> PathBuf {
    PathBuf::from("api_keys.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_keys_file: default_api_keys_file(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists. Variables whose name or
    /// value is not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // api_keys_file -> API_KEYS_FILE
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Build configuration from explicit key/value pairs, using the same
    /// names and defaults as [`Config::from_env`].
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}

/// Keep only the variables that are valid UTF-8 in both name and value.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_working_directory_file() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.api_keys_file, PathBuf::from("api_keys.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_api_keys_file() {
        let config = Config::from_vars(vec![(
            "API_KEYS_FILE".to_string(),
            "/var/lib/keys/store.json".to_string(),
        )])
        .unwrap();
        assert_eq!(
            config.api_keys_file,
            PathBuf::from("/var/lib/keys/store.json")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_variables_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (
                OsString::from("JUNK"),
                OsString::from_vec(vec![0xff, 0xfe]),
            ),
            (
                OsString::from_vec(vec![b'X', 0xff]),
                OsString::from("value"),
            ),
            (
                OsString::from("API_KEYS_FILE"),
                OsString::from("keys/store.json"),
            ),
        ];

        let filtered: Vec<(String, String)> = utf8_vars(vars).collect();
        assert_eq!(
            filtered,
            vec![("API_KEYS_FILE".to_string(), "keys/store.json".to_string())]
        );

        let config = Config::from_vars(filtered).unwrap();
        assert_eq!(config.api_keys_file, PathBuf::from("keys/store.json"));
    }
}
