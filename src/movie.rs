use crate::error::{CatalogError, CatalogResult};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// A single movie from the catalog data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    /// Running time in minutes.
    pub duration: u32,
    pub release_date: NaiveDate,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
    pub director: String,
    pub nationality: String,
    /// Poster file name, relative to the poster directory.
    pub poster: String,
    pub imdb_link: String,
}

/// Shape of one entry in the JSON resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieRecord {
    title: String,
    duration: u32,
    release_date: String,
    #[serde(default)]
    casting: Vec<String>,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    director: String,
    #[serde(default)]
    nationality: String,
    #[serde(default)]
    poster: String,
    #[serde(default)]
    imdb_link: String,
}

impl Movie {
    /// True if one of the movie's genres equals `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == wanted)
    }
}

/// Parse a release date. Accepts `YYYY-MM-DD` and full RFC 3339 timestamps.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Decode the whole JSON array. One bad record fails the load.
pub fn decode_movies(bytes: &[u8]) -> CatalogResult<Vec<Movie>> {
    let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let mut movies = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let record: MovieRecord = serde_json::from_value(value)
            .map_err(|source| CatalogError::Record { index, source })?;
        let release_date = parse_release_date(&record.release_date).ok_or_else(|| {
            CatalogError::InvalidDate {
                index,
                value: record.release_date.clone(),
            }
        })?;

        movies.push(Movie {
            title: record.title,
            duration: record.duration,
            release_date,
            cast: record.casting,
            genres: record.genres,
            director: record.director,
            nationality: record.nationality,
            poster: record.poster,
            imdb_link: record.imdb_link,
        });
    }

    Ok(movies)
}

#[cfg(test)]
pub(crate) fn sample(title: &str, date: &str, genres: &[&str]) -> Movie {
    Movie {
        title: title.to_string(),
        duration: 100,
        release_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        cast: vec!["Someone".to_string()],
        genres: genres.iter().map(|g| g.to_string()).collect(),
        director: "Director".to_string(),
        nationality: "FR".to_string(),
        poster: format!("{}.jpg", title.to_lowercase()),
        imdb_link: "https://www.imdb.com/title/tt0000000/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"[
        {
            "title": "Les Tontons flingueurs",
            "duration": 105,
            "releaseDate": "1963-11-27",
            "casting": ["Lino Ventura", "Bernard Blier"],
            "genres": ["Comédie", "Policier"],
            "director": "Georges Lautner",
            "nationality": "Français",
            "poster": "tontons.jpg",
            "imdbLink": "https://www.imdb.com/title/tt0057591/"
        },
        {
            "title": "Alien",
            "duration": 117,
            "releaseDate": "1979-09-12T00:00:00Z",
            "casting": ["Sigourney Weaver"],
            "genres": ["Science-Fiction", "Horreur"],
            "director": "Ridley Scott",
            "nationality": "Américain",
            "poster": "alien.jpg",
            "imdbLink": "https://www.imdb.com/title/tt0078748/"
        }
    ]"#;

    #[test]
    fn test_decode_wire_field_names() {
        let movies = decode_movies(DATA.as_bytes()).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Les Tontons flingueurs");
        assert_eq!(movies[0].cast, vec!["Lino Ventura", "Bernard Blier"]);
        assert_eq!(movies[0].imdb_link, "https://www.imdb.com/title/tt0057591/");
        assert_eq!(
            movies[0].release_date,
            NaiveDate::from_ymd_opt(1963, 11, 27).unwrap()
        );
    }

    #[test]
    fn test_decode_datetime_is_truncated_to_date() {
        let movies = decode_movies(DATA.as_bytes()).unwrap();
        assert_eq!(
            movies[1].release_date,
            NaiveDate::from_ymd_opt(1979, 9, 12).unwrap()
        );
    }

    #[test]
    fn test_decode_rejects_bad_date_with_index() {
        let data = r#"[
            {"title": "Ok", "duration": 90, "releaseDate": "2001-01-01"},
            {"title": "Broken", "duration": 90, "releaseDate": "31/12/2001"}
        ]"#;
        match decode_movies(data.as_bytes()) {
            Err(CatalogError::InvalidDate { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "31/12/2001");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_negative_duration() {
        let data = r#"[{"title": "Neg", "duration": -5, "releaseDate": "2001-01-01"}]"#;
        assert!(matches!(
            decode_movies(data.as_bytes()),
            Err(CatalogError::Record { index: 0, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(
            decode_movies(br#"{"title": "Alone"}"#),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn test_has_genre_ignores_case() {
        let movie = sample("Heat", "1995-12-15", &["Action", "Drama"]);
        assert!(movie.has_genre("action"));
        assert!(movie.has_genre("DRAMA"));
        assert!(!movie.has_genre("comedy"));
    }

    #[test]
    fn test_parse_release_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert_eq!(parse_release_date("2020-01-01"), expected);
        assert_eq!(parse_release_date(" 2020-01-01 "), expected);
        assert_eq!(parse_release_date("2020-01-01T10:00:00+02:00"), expected);
        assert_eq!(parse_release_date("2020-01-01T10:00:00"), expected);
        assert_eq!(parse_release_date("2020-13-01"), None);
        assert_eq!(parse_release_date(""), None);
    }
}
