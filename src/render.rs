use crate::movie::Movie;
use chrono::{Datelike, NaiveDate};
use std::io::{self, Write};

/// Running time as `HhMM`, or just `MM` under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    let mut formatted = if hours > 0 {
        format!("{}h", hours)
    } else {
        String::new()
    };
    formatted.push_str(&format!("{:02}", rest));
    formatted
}

/// Calendar date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Everything shown for one movie, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub duration: String,
    pub release_date: String,
    pub cast: String,
    pub genres: String,
    pub director: String,
    pub nationality: String,
    pub poster: String,
    pub link: String,
}

impl MovieCard {
    pub fn new(movie: &Movie, poster_dir: &str) -> Self {
        Self {
            title: movie.title.clone(),
            duration: format_duration(movie.duration),
            release_date: format_date(movie.release_date),
            cast: movie.cast.join(", "),
            genres: movie.genres.join(", "),
            director: movie.director.clone(),
            nationality: movie.nationality.clone(),
            poster: poster_path(poster_dir, &movie.poster),
            link: movie.imdb_link.clone(),
        }
    }

    /// The `<article>` block the web page used for one movie.
    pub fn to_html(&self) -> String {
        format!(
            r#"<article>
            <h3>{title}</h3>
            <p>Durée : {duration}</p>
            <p>Sortie en salles : {date}</p>
            <img src="{poster}" alt="{title}">
            <p>Casting : {cast}</p>
            <p>Genres : {genres}</p>
            <p>{nationality}</p>
            <p><a target="_blank" href="{link}" title="Voir la fiche IMDB">Lien IMDB</a></p>
        </article>"#,
            title = self.title,
            duration = self.duration,
            date = self.release_date,
            poster = self.poster,
            cast = self.cast,
            genres = self.genres,
            nationality = self.nationality,
            link = self.link,
        )
    }
}

fn poster_path(poster_dir: &str, poster: &str) -> String {
    let dir = poster_dir.trim_end_matches('/');
    if dir.is_empty() {
        poster.to_string()
    } else {
        format!("{}/{}", dir, poster)
    }
}

/// One card per movie, same order.
pub fn cards(movies: &[Movie], poster_dir: &str) -> Vec<MovieCard> {
    movies.iter().map(|m| MovieCard::new(m, poster_dir)).collect()
}

/// A presentation surface. Each call replaces everything shown before.
pub trait Renderer {
    fn render(&mut self, movies: &[Movie]);
}

/// Holds the cards the TUI list draws from.
#[derive(Debug, Clone, Default)]
pub struct CardBuffer {
    poster_dir: String,
    cards: Vec<MovieCard>,
}

impl CardBuffer {
    pub fn new(poster_dir: impl Into<String>) -> Self {
        Self {
            poster_dir: poster_dir.into(),
            cards: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[MovieCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Renderer for CardBuffer {
    fn render(&mut self, movies: &[Movie]) {
        self.cards = cards(movies, &self.poster_dir);
    }
}

/// Concatenated `<article>` markup, as the page's list container held it.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    poster_dir: String,
    html: String,
}

impl HtmlRenderer {
    pub fn new(poster_dir: impl Into<String>) -> Self {
        Self {
            poster_dir: poster_dir.into(),
            html: String::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, movies: &[Movie]) {
        self.html.clear();
        for card in cards(movies, &self.poster_dir) {
            self.html.push_str(&card.to_html());
        }
    }
}

/// Plain labelled text, one block per movie.
pub struct TextRenderer<W: Write> {
    out: W,
    poster_dir: String,
    last_error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, poster_dir: impl Into<String>) -> Self {
        Self {
            out,
            poster_dir: poster_dir.into(),
            last_error: None,
        }
    }

    /// Surface a write failure from the last `render` call.
    pub fn finish(self) -> io::Result<W> {
        match self.last_error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn write_cards(&mut self, movies: &[Movie]) -> io::Result<()> {
        let cards = cards(movies, &self.poster_dir);
        if cards.is_empty() {
            writeln!(self.out, "(no movies)")?;
        }
        for card in cards {
            writeln!(self.out, "{}", card.title)?;
            writeln!(self.out, "  Duration: {}", card.duration)?;
            writeln!(self.out, "  Released: {}", card.release_date)?;
            writeln!(self.out, "  Director: {}", card.director)?;
            writeln!(self.out, "  Cast:     {}", card.cast)?;
            writeln!(self.out, "  Genres:   {}", card.genres)?;
            writeln!(self.out, "  Country:  {}", card.nationality)?;
            writeln!(self.out, "  Poster:   {}", card.poster)?;
            writeln!(self.out, "  Link:     {}", card.link)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, movies: &[Movie]) {
        if let Err(e) = self.write_cards(movies) {
            log::error!("Failed to write movie list: {}", e);
            self.last_error = Some(e);
        }
    }
}
