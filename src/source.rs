use crate::error::{CatalogError, CatalogResult};
use crate::movie::{Movie, decode_movies};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the movie list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(value.to_string())
        } else {
            Source::File(PathBuf::from(value))
        }
    }

    /// Load and decode the whole movie list.
    pub async fn load(&self) -> CatalogResult<Vec<Movie>> {
        let bytes = match self {
            Source::File(path) => {
                log::debug!("Reading movies from {}", path.display());
                tokio::fs::read(path).await?
            }
            Source::Url(url) => {
                log::debug!("Fetching movies from {}", url);
                let response = reqwest::get(url).await?;
                if !response.status().is_success() {
                    return Err(CatalogError::HttpStatus {
                        status: response.status().as_u16(),
                        url: url.clone(),
                    });
                }
                response.bytes().await?.to_vec()
            }
        };

        let movies = decode_movies(&bytes)?;
        log::info!("Loaded {} movies from {}", movies.len(), self);
        Ok(movies)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// Download the movie resource to `output`, showing a progress bar on stderr.
///
/// The body is validated before the file is replaced, so a bad download never
/// clobbers a good cached copy.
pub async fn download(url: &str, output: &Path) -> CatalogResult<usize> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(CatalogError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let pb = match response.content_length() {
        Some(total_size) => ProgressBar::new(total_size).with_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .map_err(|e| CatalogError::Config(e.to_string()))?
                .progress_chars("#>-"),
        ),
        None => ProgressBar::new_spinner(),
    };

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = item?;
        body.extend_from_slice(&chunk);
        pb.set_position(body.len() as u64);
    }
    pb.finish_with_message("Download complete");

    let movies = decode_movies(&body)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(output)?;
    file.write_all(&body)?;
    log::info!("Saved {} movies to {}", movies.len(), output.display());
    Ok(movies.len())
}
