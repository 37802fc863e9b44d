use crate::action::Action;
use crate::catalog::Catalog;
use crate::render::{CardBuffer, MovieCard, Renderer};

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
    Genres,
}

pub const LIST_OVERHEAD: u16 = 6;

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub display: CardBuffer,
    pub should_quit: bool,
    pub view: View,
    pub show_help: bool,

    // List view state
    pub list_selected: usize, // Index within visible page
    pub list_offset: usize,   // Offset into display
    pub page_size: usize,

    // Genre picker state
    pub genres: Vec<String>,
    pub genre_selected: usize,

    // Detail view state
    pub detail: Option<MovieCard>,
    pub detail_scroll: u16,

    pub status_msg: String,
}

impl App {
    pub fn new(catalog: Catalog, poster_dir: &str) -> Self {
        let genres = catalog.genres();
        let mut app = Self {
            catalog,
            display: CardBuffer::new(poster_dir),
            should_quit: false,
            view: View::List,
            show_help: false,

            list_selected: 0,
            list_offset: 0,
            page_size: 20, // Updated on first resize

            genres,
            genre_selected: 0,

            detail: None,
            detail_scroll: 0,

            status_msg: String::new(),
        };
        app.refresh();
        app.status_msg = format!("{} movies loaded", app.catalog.all().len());
        app
    }

    /// Run one catalog action and redraw the list from scratch.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Action: {}", action.label());
        self.catalog.apply(&action);
        self.refresh();
        self.status_msg = self.describe_selection();
    }

    fn refresh(&mut self) {
        self.display.render(self.catalog.current());
        self.list_offset = 0;
        self.list_selected = 0;
    }

    fn describe_selection(&self) -> String {
        let mut msg = format!("{} of {} movies", self.display.len(), self.catalog.all().len());
        if let Some(genre) = self.catalog.active_genre() {
            msg.push_str(&format!(" in \"{}\"", genre));
        }
        if let Some(order) = self.catalog.sort_order() {
            msg.push_str(&format!(", by {}", order.label()));
        }
        msg
    }

    /// Cards on the current page.
    pub fn visible_cards(&self) -> &[MovieCard] {
        let cards = self.display.cards();
        let start = self.list_offset.min(cards.len());
        let end = (start + self.page_size).min(cards.len());
        &cards[start..end]
    }

    pub fn selected_card(&self) -> Option<&MovieCard> {
        self.visible_cards().get(self.list_selected)
    }

    /// Update page size based on terminal height.
    pub fn update_page_size(&mut self, terminal_height: u16) {
        let new_size = terminal_height.saturating_sub(LIST_OVERHEAD) as usize;
        self.page_size = new_size.max(1);
        self.list_offset = (self.list_offset / self.page_size) * self.page_size;
        self.list_selected = self
            .list_selected
            .min(self.visible_cards().len().saturating_sub(1));
    }

    /// Move selection down in the list.
    pub fn list_next(&mut self) {
        let visible = self.visible_cards().len();
        if visible == 0 {
            return;
        }
        if self.list_selected + 1 < visible {
            self.list_selected += 1;
        } else {
            // Next page
            let new_offset = self.list_offset + self.page_size;
            if new_offset < self.display.len() {
                self.list_offset = new_offset;
                self.list_selected = 0;
            }
        }
    }

    /// Move selection up in the list.
    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
        } else if self.list_offset > 0 {
            // Prev page
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.list_selected = self.visible_cards().len().saturating_sub(1);
        }
    }

    pub fn list_page_down(&mut self) {
        let new_offset = self.list_offset + self.page_size;
        if new_offset < self.display.len() {
            self.list_offset = new_offset;
            self.list_selected = 0;
        } else {
            self.list_last();
        }
    }

    pub fn list_page_up(&mut self) {
        self.list_offset = self.list_offset.saturating_sub(self.page_size);
        self.list_selected = 0;
    }

    pub fn list_first(&mut self) {
        self.list_offset = 0;
        self.list_selected = 0;
    }

    pub fn list_last(&mut self) {
        if self.display.is_empty() {
            return;
        }
        let last_page_start = ((self.display.len() - 1) / self.page_size) * self.page_size;
        self.list_offset = last_page_start;
        self.list_selected = self.visible_cards().len().saturating_sub(1);
    }

    /// Open the detail view for the currently selected movie.
    pub fn open_detail(&mut self) {
        if let Some(card) = self.selected_card().cloned() {
            self.detail = Some(card);
            self.detail_scroll = 0;
            self.view = View::Detail;
        }
    }

    pub fn close_detail(&mut self) {
        self.view = View::List;
        self.detail = None;
    }

    pub fn open_genre_picker(&mut self) {
        if self.genres.is_empty() {
            self.status_msg = "No genres in this catalog".to_string();
            return;
        }
        // Start on the active genre if there is one
        if let Some(active) = self.catalog.active_genre() {
            let active = active.to_lowercase();
            if let Some(pos) = self.genres.iter().position(|g| g.to_lowercase() == active) {
                self.genre_selected = pos;
            }
        }
        self.view = View::Genres;
    }

    pub fn genre_next(&mut self) {
        if self.genre_selected + 1 < self.genres.len() {
            self.genre_selected += 1;
        }
    }

    pub fn genre_prev(&mut self) {
        self.genre_selected = self.genre_selected.saturating_sub(1);
    }

    /// Filter by the highlighted genre and return to the list.
    pub fn confirm_genre(&mut self) {
        self.view = View::List;
        if let Some(genre) = self.genres.get(self.genre_selected).cloned() {
            self.dispatch(Action::SelectGenre(genre));
        }
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}
