//! App state - the browser's view state, owned by the app actor

use crate::cards::{build_cards, CountryCard};
use crate::constants::EMPTY_RESULTS_MESSAGE;
use crate::favorites::Favorites;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::Country;
use crate::pagination::{self, page_links, page_slice};

/// Main application state - pure data plus the favorites store
pub struct AppState {
    // Data
    pub all_countries: Vec<Country>,
    pub filtered_countries: Vec<Country>,
    pub current_page: usize,
    pub query: String,
    pub show_empty_message: bool,

    // Selection within the current page
    pub selected: usize,

    // Input
    pub input_mode: InputMode,
    pub page_jump_input: String,

    // Loading
    pub api_url: String,
    pub fetch_requested: bool,
    pub is_loading: bool,
    pub bytes_received: usize,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Popups
    pub show_help: bool,
    pub show_detail: bool,

    pub favorites: Favorites,
}

impl AppState {
    pub fn new(favorites: Favorites, api_url: impl Into<String>) -> Self {
        AppState {
            all_countries: Vec::new(),
            filtered_countries: Vec::new(),
            current_page: 1,
            query: String::new(),
            show_empty_message: false,
            selected: 0,
            input_mode: InputMode::Normal,
            page_jump_input: String::new(),
            api_url: api_url.into(),
            fetch_requested: false,
            is_loading: false,
            bytes_received: 0,
            next_request_id: 1,
            pending_request_id: None,
            show_help: false,
            show_detail: false,
            favorites,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_countries.len())
    }

    /// Countries on the current page
    pub fn visible_countries(&self) -> &[Country] {
        page_slice(&self.filtered_countries, self.current_page)
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.visible_countries().get(self.selected)
    }

    /// Cards for the current page, with one favorites read for the batch
    pub fn visible_cards(&self) -> Vec<CountryCard> {
        let favorites = self.favorite_names();
        build_cards(self.visible_countries(), |name| {
            favorites.iter().any(|f| f == name)
        })
    }

    fn favorite_names(&self) -> Vec<String> {
        self.favorites.names().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read favorites");
            Vec::new()
        })
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let cards = self.visible_cards();
        let detail = if self.show_detail {
            cards.get(self.selected).cloned()
        } else {
            None
        };

        RenderState {
            query: self.query.clone(),
            input_mode: self.input_mode,
            page_jump_input: self.page_jump_input.clone(),
            cards,
            selected: self.selected,
            empty_message: self
                .show_empty_message
                .then(|| String::from(EMPTY_RESULTS_MESSAGE)),
            page_links: page_links(self.current_page, self.total_pages()),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_countries: self.all_countries.len(),
            match_count: self.filtered_countries.len(),
            favorites_count: self.favorite_names().len(),
            is_loading: self.is_loading,
            bytes_received: self.bytes_received,
            show_help: self.show_help,
            detail,
        }
    }
}
