use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Local directory holding the downloaded artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: String,

    /// Remote storage URL, with `{id}` replaced by the artifact identifier
    #[serde(default = "default_artifact_url_template")]
    pub artifact_url_template: String,

    /// Remote identifier of the movie table artifact
    #[serde(default)]
    pub movie_list_id: Option<String>,

    /// Remote identifier of the similarity matrix artifact
    #[serde(default)]
    pub similarity_id: Option<String>,

    /// TMDB API key. IMDb links are disabled when unset.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Total timeout for TMDB requests; connect timeout for artifact downloads
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_model_dir() -> String {
    "models".to_string()
}

fn default_artifact_url_template() -> String {
    "https://drive.google.com/uc?export=download&id={id}".to_string()
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.model_dir, "models");
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
        assert_eq!(config.http_timeout_secs, 10);
        assert!(config.tmdb_api_key.is_none());
        assert!(config.movie_list_id.is_none());
        assert!(config.artifact_url_template.contains("{id}"));
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = Config::from_vars(vars(&[
            ("PORT", "8080"),
            ("MODEL_DIR", "/srv/models"),
            ("MOVIE_LIST_ID", "abc"),
            ("SIMILARITY_ID", "def"),
            ("TMDB_API_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.model_dir, "/srv/models");
        assert_eq!(config.movie_list_id.as_deref(), Some("abc"));
        assert_eq!(config.similarity_id.as_deref(), Some("def"));
        assert_eq!(config.tmdb_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
