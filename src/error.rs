use thiserror::Error;

/// Everything that can go wrong while loading or configuring the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Malformed movie data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed movie #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Movie #{index} has an invalid release date: {value:?}")]
    InvalidDate { index: usize, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No movie source configured")]
    NoSource,
}

impl CatalogError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io(e) => format!("File system error: {}", e),
            CatalogError::Http(e) => format!("Network error: {}", e),
            CatalogError::HttpStatus { status, url } => {
                format!("Server answered {} for {}", status, url)
            }
            CatalogError::Decode(e) => format!("The movie file is not a JSON list of movies: {}", e),
            CatalogError::Record { index, source } => {
                format!("Movie #{} could not be read: {}", index, source)
            }
            CatalogError::InvalidDate { index, value } => {
                format!("Movie #{} has release date {:?}, expected YYYY-MM-DD", index, value)
            }
            CatalogError::Config(msg) => format!("Configuration error: {}", msg),
            CatalogError::NoSource => {
                "No movie source given. Pass --source, set \"source\" in the config file, or run `movie-catalog fetch` first".to_string()
            }
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
