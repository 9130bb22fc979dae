use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie title list artifact (JSON array of titles)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path to the precomputed similarity matrix artifact (JSON NxN array)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of memoized recommendation results
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_movies_path() -> String {
    "data/movie_list.json".to_string()
}

fn default_similarity_path() -> String {
    "data/similarity.json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cache_capacity() -> usize {
    1000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
