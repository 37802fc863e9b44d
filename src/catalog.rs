use crate::action::Action;
use crate::movie::Movie;

/// Which sort was last applied to the displayed movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Title,
    ReleaseDate,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ReleaseDate => "release date",
        }
    }
}

/// Full movie list plus the subset currently on display.
///
/// `all` is fixed at construction. `current` is replaced by genre filters,
/// reordered in place by sorts and rebuilt from `all` by `reset`.
#[derive(Debug, Clone)]
pub struct Catalog {
    all: Vec<Movie>,
    current: Vec<Movie>,
    active_genre: Option<String>,
    sort_order: Option<SortOrder>,
}

impl Catalog {
    pub fn new(all: Vec<Movie>) -> Self {
        let current = all.clone();
        Self {
            all,
            current,
            active_genre: None,
            sort_order: None,
        }
    }

    pub fn all(&self) -> &[Movie] {
        &self.all
    }

    pub fn current(&self) -> &[Movie] {
        &self.current
    }

    pub fn active_genre(&self) -> Option<&str> {
        self.active_genre.as_deref()
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// Replace the displayed movies with those of `all` tagged with `genre`.
    pub fn filter_by_genre(&mut self, genre: &str) -> &[Movie] {
        self.current = self
            .all
            .iter()
            .filter(|movie| movie.has_genre(genre))
            .cloned()
            .collect();
        self.active_genre = Some(genre.to_string());
        self.sort_order = None;
        &self.current
    }

    pub fn sort_by_title(&mut self) {
        sort_by_title(&mut self.current);
        self.sort_order = Some(SortOrder::Title);
    }

    pub fn sort_by_release_date(&mut self) {
        sort_by_release_date(&mut self.current);
        self.sort_order = Some(SortOrder::ReleaseDate);
    }

    /// Show every movie again, in load order.
    pub fn reset(&mut self) {
        self.current = self.all.clone();
        self.active_genre = None;
        self.sort_order = None;
    }

    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::SelectGenre(genre) => {
                self.filter_by_genre(genre);
            }
            Action::OrderByTitle => self.sort_by_title(),
            Action::OrderByDate => self.sort_by_release_date(),
            Action::ShowAll => self.reset(),
        }
    }

    /// Distinct genre labels across the whole catalog, for the genre picker.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for genre in self.all.iter().flat_map(|m| m.genres.iter()) {
            let lower = genre.to_lowercase();
            if !genres.iter().any(|g| g.to_lowercase() == lower) {
                genres.push(genre.clone());
            }
        }
        genres.sort_by_key(|g| g.to_lowercase());
        genres
    }
}

/// Stable sort by case-insensitive title.
pub fn sort_by_title(movies: &mut [Movie]) {
    movies.sort_by_cached_key(|movie| movie.title.to_lowercase());
}

/// Stable sort by ascending release date.
pub fn sort_by_release_date(movies: &mut [Movie]) {
    movies.sort_by_key(|movie| movie.release_date);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::sample;
    use proptest::prelude::*;

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    fn zeta_alpha() -> Catalog {
        Catalog::new(vec![
            sample("Zeta", "2020-01-01", &["Action"]),
            sample("Alpha", "1990-05-05", &["Drama"]),
        ])
    }

    #[test]
    fn test_new_displays_everything() {
        let catalog = zeta_alpha();
        assert_eq!(catalog.current(), catalog.all());
        assert!(catalog.active_genre().is_none());
        assert!(catalog.sort_order().is_none());
    }

    #[test]
    fn test_sort_by_title_example() {
        let mut catalog = zeta_alpha();
        catalog.sort_by_title();
        assert_eq!(titles(catalog.current()), vec!["Alpha", "Zeta"]);
        assert_eq!(catalog.sort_order(), Some(SortOrder::Title));
        // Canonical list untouched
        assert_eq!(titles(catalog.all()), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_sort_by_release_date_example() {
        let mut catalog = zeta_alpha();
        catalog.sort_by_release_date();
        assert_eq!(titles(catalog.current()), vec!["Alpha", "Zeta"]);
        assert_eq!(titles(catalog.all()), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let mut movies = vec![
            sample("banana", "2000-01-01", &[]),
            sample("Apple", "2000-01-01", &[]),
            sample("cherry", "2000-01-01", &[]),
        ];
        sort_by_title(&mut movies);
        assert_eq!(titles(&movies), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_by_title_is_stable_on_ties() {
        let mut movies = vec![
            sample("Heat", "1995-12-15", &[]),
            sample("HEAT", "1986-01-01", &[]),
            sample("heat", "2010-01-01", &[]),
        ];
        sort_by_title(&mut movies);
        assert_eq!(titles(&movies), vec!["Heat", "HEAT", "heat"]);
    }

    #[test]
    fn test_filter_by_genre_example() {
        let mut catalog = Catalog::new(vec![
            sample("One", "2001-01-01", &["Action"]),
            sample("Two", "2002-01-01", &["Drama"]),
            sample("Three", "2003-01-01", &["Action", "Drama"]),
        ]);
        let result = catalog.filter_by_genre("drama");
        assert_eq!(titles(result), vec!["Two", "Three"]);
        assert_eq!(catalog.active_genre(), Some("drama"));
    }

    #[test]
    fn test_filter_by_genre_no_match_is_empty() {
        let mut catalog = zeta_alpha();
        assert!(catalog.filter_by_genre("Western").is_empty());
        assert!(catalog.current().is_empty());
        assert_eq!(catalog.all().len(), 2);
    }

    #[test]
    fn test_filter_then_sort_then_reset() {
        let mut catalog = Catalog::new(vec![
            sample("Zulu", "2001-01-01", &["War"]),
            sample("Mash", "1970-01-01", &["War", "Comedy"]),
            sample("Amelie", "2001-04-25", &["Comedy"]),
        ]);
        catalog.apply(&Action::SelectGenre("WAR".to_string()));
        catalog.apply(&Action::OrderByTitle);
        assert_eq!(titles(catalog.current()), vec!["Mash", "Zulu"]);

        catalog.apply(&Action::OrderByDate);
        assert_eq!(titles(catalog.current()), vec!["Mash", "Zulu"]);
        assert_eq!(catalog.sort_order(), Some(SortOrder::ReleaseDate));

        catalog.apply(&Action::ShowAll);
        assert_eq!(titles(catalog.current()), vec!["Zulu", "Mash", "Amelie"]);
        assert!(catalog.active_genre().is_none());
        assert!(catalog.sort_order().is_none());
    }

    #[test]
    fn test_filter_uses_all_not_current() {
        let mut catalog = Catalog::new(vec![
            sample("One", "2001-01-01", &["Action"]),
            sample("Two", "2002-01-01", &["Drama"]),
        ]);
        catalog.filter_by_genre("action");
        let result = catalog.filter_by_genre("drama");
        assert_eq!(titles(result), vec!["Two"]);
    }

    #[test]
    fn test_genres_are_distinct_and_sorted() {
        let catalog = Catalog::new(vec![
            sample("One", "2001-01-01", &["drama", "Action"]),
            sample("Two", "2002-01-01", &["Drama", "comédie"]),
        ]);
        assert_eq!(catalog.genres(), vec!["Action", "comédie", "drama"]);
    }

    prop_compose! {
        fn arb_movie()(
            title in "[A-Za-z ]{0,12}",
            days in 0i64..40_000,
            genres in proptest::collection::vec(
                prop::sample::select(vec!["Action", "action", "Drama", "Comedy", "WAR"]),
                0..3,
            ),
        ) -> Movie {
            let mut movie = sample("x", "1900-01-01", &genres);
            movie.title = title;
            movie.release_date = movie.release_date + chrono::Duration::days(days);
            movie
        }
    }

    proptest! {
        #[test]
        fn prop_sort_by_title_orders_and_is_idempotent(
            movies in proptest::collection::vec(arb_movie(), 0..30)
        ) {
            let mut sorted = movies.clone();
            sort_by_title(&mut sorted);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
            }
            let mut again = sorted.clone();
            sort_by_title(&mut again);
            prop_assert_eq!(again, sorted);
        }

        #[test]
        fn prop_sort_by_release_date_orders_and_is_idempotent(
            movies in proptest::collection::vec(arb_movie(), 0..30)
        ) {
            let mut sorted = movies.clone();
            sort_by_release_date(&mut sorted);
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].release_date <= pair[1].release_date);
            }
            let mut again = sorted.clone();
            sort_by_release_date(&mut again);
            prop_assert_eq!(again, sorted);
        }

        #[test]
        fn prop_filter_is_case_insensitive_and_keeps_all(
            movies in proptest::collection::vec(arb_movie(), 0..30),
            genre in prop::sample::select(vec!["action", "ACTION", "drama", "war", "western"]),
        ) {
            let mut lower = Catalog::new(movies.clone());
            let mut upper = Catalog::new(movies.clone());
            let a = lower.filter_by_genre(&genre.to_lowercase()).to_vec();
            let b = upper.filter_by_genre(&genre.to_uppercase()).to_vec();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(lower.all(), movies.as_slice());
            for movie in &a {
                prop_assert!(movie.has_genre(genre));
            }
        }

        #[test]
        fn prop_reset_restores_all(
            movies in proptest::collection::vec(arb_movie(), 0..30),
            genre in prop::sample::select(vec!["action", "drama"]),
        ) {
            let mut catalog = Catalog::new(movies.clone());
            catalog.sort_by_title();
            catalog.filter_by_genre(genre);
            catalog.sort_by_release_date();
            catalog.reset();
            prop_assert_eq!(catalog.current(), movies.as_slice());
            prop_assert_eq!(catalog.all(), movies.as_slice());
        }
    }
}
