//! figc Fetch
//!
//! Retrieves the source document for the converter. Three paths, in
//! order: an explicit local JSON file, the disk cache, the Figma API
//! (with best-effort write-through to the cache). Configuration is an
//! explicit struct passed in at construction time; nothing in here
//! reads process arguments or the environment.

use std::fs;
use std::path::PathBuf;

use figc_schema::{File, SchemaError};

/// Retrieval error. All variants are fatal for the pipeline; there
/// is no retry logic.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(
        "invalid Figma URL (expected https://www.figma.com/file/<key>/... \
         or https://www.figma.com/design/<key>/...): {0}"
    )]
    InvalidUrl(String),
    #[error("an API token is required to fetch from the Figma API")]
    MissingToken,
    #[error("local JSON file not found: {}", .0.display())]
    LocalFileNotFound(PathBuf),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Document retrieval configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The Figma file key, as found in the file URL.
    pub file_key: String,
    /// Personal access token for the Figma API.
    pub token: String,
    /// Directory for cached file JSON.
    pub cache_dir: PathBuf,
    /// Read from and write through to the cache.
    pub use_cache: bool,
    /// Bypass network and cache entirely, loading this file instead.
    pub local_json: Option<PathBuf>,
}

impl Config {
    pub fn new(file_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
            token: token.into(),
            cache_dir: PathBuf::from("cache"),
            use_cache: true,
            local_json: None,
        }
    }
}

/// Extract the file key from a figma.com file or design URL.
pub fn file_key_from_url(url: &str) -> Result<String, FetchError> {
    for marker in ["figma.com/file/", "figma.com/design/"] {
        if let Some(idx) = url.find(marker) {
            let key: String = url[idx + marker.len()..]
                .chars()
                .take_while(|c| !matches!(c, '/' | '?' | '&' | '#'))
                .collect();
            if !key.is_empty() {
                return Ok(key);
            }
        }
    }
    Err(FetchError::InvalidUrl(url.to_string()))
}

/// The document retrieval collaborator.
pub struct DocumentSource {
    config: Config,
    client: reqwest::blocking::Client,
}

impl DocumentSource {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch and parse the configured document.
    pub fn fetch(&self) -> Result<File, FetchError> {
        if let Some(path) = &self.config.local_json {
            if !path.exists() {
                return Err(FetchError::LocalFileNotFound(path.clone()));
            }
            tracing::info!(path = %path.display(), "loading local document JSON");
            let raw = fs::read_to_string(path)?;
            return Ok(File::parse(&raw)?);
        }

        let cache_path = self.cache_path();
        if self.config.use_cache && cache_path.exists() {
            match fs::read_to_string(&cache_path).map_err(FetchError::from).and_then(|raw| Ok(File::parse(&raw)?)) {
                Ok(file) => {
                    tracing::info!(path = %cache_path.display(), "using cached document JSON");
                    return Ok(file);
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to read document cache, falling back to the API");
                }
            }
        }

        if self.config.token.is_empty() {
            return Err(FetchError::MissingToken);
        }

        tracing::info!(file_key = %self.config.file_key, "fetching document from the Figma API");
        let raw = self
            .client
            .get(format!(
                "https://api.figma.com/v1/files/{}",
                self.config.file_key
            ))
            .header("X-Figma-Token", &self.config.token)
            .send()?
            .error_for_status()?
            .text()?;
        let file = File::parse(&raw)?;

        if self.config.use_cache {
            // Write-through is best effort; a failed cache write never
            // fails the fetch.
            if let Err(err) = fs::create_dir_all(&self.config.cache_dir)
                .and_then(|()| fs::write(&cache_path, &raw))
            {
                tracing::warn!(%err, "failed to write document cache");
            } else {
                tracing::info!(path = %cache_path.display(), "cached document JSON");
            }
        }

        Ok(file)
    }

    fn cache_path(&self) -> PathBuf {
        let safe_key: String = self
            .config
            .file_key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.config.cache_dir.join(format!("{safe_key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_key_from_file_url() {
        let key =
            file_key_from_url("https://www.figma.com/file/aBc123XyZ/My-Design?node-id=0-1")
                .unwrap();
        assert_eq!(key, "aBc123XyZ");
    }

    #[test]
    fn test_file_key_from_design_url() {
        let key = file_key_from_url("https://www.figma.com/design/aBc123XyZ/My-Design").unwrap();
        assert_eq!(key, "aBc123XyZ");
    }

    #[test]
    fn test_file_key_from_bare_url() {
        let key = file_key_from_url("https://www.figma.com/file/aBc123XyZ").unwrap();
        assert_eq!(key, "aBc123XyZ");
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(matches!(
            file_key_from_url("https://example.com/file/abc"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_cache_path_sanitizes_key() {
        let mut config = Config::new("a/b:c", "t");
        config.cache_dir = PathBuf::from("/tmp/figc-cache");
        let source = DocumentSource::new(config);
        assert_eq!(
            source.cache_path(),
            PathBuf::from("/tmp/figc-cache/a_b_c.json")
        );
    }

    #[test]
    fn test_missing_local_json_is_an_error() {
        let mut config = Config::new("key", "t");
        config.local_json = Some(PathBuf::from("/definitely/not/here.json"));
        let source = DocumentSource::new(config);
        assert!(matches!(
            source.fetch(),
            Err(FetchError::LocalFileNotFound(_))
        ));
    }

    #[test]
    fn test_local_json_loads_without_network() {
        let path = std::env::temp_dir().join("figc-fetch-test-local.json");
        fs::write(&path, r#"{"name":"Local","document":{"children":[]}}"#).unwrap();

        let mut config = Config::new("key", "");
        config.local_json = Some(path.clone());
        let file = DocumentSource::new(config).fetch().unwrap();
        assert_eq!(file.name, "Local");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_token_fails_before_network() {
        let mut config = Config::new("key", "");
        config.use_cache = false;
        assert!(matches!(
            DocumentSource::new(config).fetch(),
            Err(FetchError::MissingToken)
        ));
    }
}
