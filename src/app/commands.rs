//! Command handlers - state transitions for UI events and network responses

use crate::app::AppState;
use crate::catalog::{filter_countries, sort_countries};
use crate::cards::{favorite_button, FavoriteButton};
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Country;
use crate::pagination::{page_links, parse_page_token, validate_page, PageLink};

impl AppState {
    // ========================
    // Loading
    // ========================

    /// The countries fetch command. Only ever produced once.
    pub fn request_countries(&mut self) -> Option<NetworkCommand> {
        if self.fetch_requested {
            return None;
        }
        let id = self.next_id();
        self.fetch_requested = true;
        self.is_loading = true;
        self.pending_request_id = Some(id);
        tracing::info!(id, url = %self.api_url, "Requesting country list");
        Some(NetworkCommand::FetchCountries {
            id,
            url: self.api_url.clone(),
        })
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Ignoring response for stale request");
            return;
        }
        if response.is_terminal() {
            self.is_loading = false;
            self.pending_request_id = None;
        }

        match response {
            NetworkResponse::Progress { bytes_received, .. } => {
                self.bytes_received = bytes_received;
            }
            NetworkResponse::Countries { countries, time_ms, .. } => {
                tracing::info!(count = countries.len(), time_ms, "Country list loaded");
                self.load_countries(countries);
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                // The gallery just stays empty
                tracing::error!(time_ms, error = %message, "Failed to fetch countries");
            }
        }
    }

    /// Store the full list sorted A-Z and show the first page
    pub fn load_countries(&mut self, mut countries: Vec<Country>) {
        sort_countries(&mut countries);
        self.all_countries = countries;
        self.apply_filter();
    }

    // ========================
    // Search
    // ========================

    /// Recompute the filtered list for the current query and go back to page 1
    pub fn apply_filter(&mut self) {
        self.filtered_countries = filter_countries(&self.all_countries, &self.query);
        self.show_empty_message = self.filtered_countries.is_empty();
        self.current_page = 1;
        self.selected = 0;
        tracing::debug!(query = %self.query, matches = self.filtered_countries.len(), "Filter applied");
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.apply_filter();
    }

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_char(&mut self, c: char) {
        self.query.push(c);
        self.apply_filter();
    }

    pub fn search_backspace(&mut self) {
        if self.query.pop().is_some() {
            self.apply_filter();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.apply_filter();
        }
    }

    // ========================
    // Pagination
    // ========================

    /// Move to `page` if it exists. Out-of-range targets are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        match validate_page(page, self.total_pages()) {
            Some(page) => {
                self.current_page = page;
                self.selected = 0;
                true
            }
            None => {
                tracing::debug!(page, total = self.total_pages(), "Ignoring out-of-range page");
                false
            }
        }
    }

    /// Activate the page bar's « control
    pub fn prev_page(&mut self) -> bool {
        self.follow_page_link(|link| matches!(link, PageLink::Previous { .. }))
    }

    /// Activate the page bar's » control
    pub fn next_page(&mut self) -> bool {
        self.follow_page_link(|link| matches!(link, PageLink::Next { .. }))
    }

    /// Navigate to the target of the first rendered link matching `pick`.
    /// Disabled controls carry an out-of-range target and are rejected.
    fn follow_page_link(&mut self, pick: impl Fn(&PageLink) -> bool) -> bool {
        let links = page_links(self.current_page, self.total_pages());
        match links.iter().find(|link| pick(link)) {
            Some(link) => self.go_to_page(link.target()),
            None => false,
        }
    }

    /// Navigate using a typed token; non-numeric tokens are ignored
    pub fn go_to_page_token(&mut self, token: &str) -> bool {
        match parse_page_token(token) {
            Some(page) => self.go_to_page(page),
            None => {
                tracing::debug!(token, "Ignoring non-numeric page token");
                false
            }
        }
    }

    pub fn open_page_jump(&mut self) {
        self.page_jump_input.clear();
        self.input_mode = InputMode::PageJump;
    }

    pub fn page_jump_char(&mut self, c: char) {
        self.page_jump_input.push(c);
    }

    pub fn page_jump_backspace(&mut self) {
        self.page_jump_input.pop();
    }

    pub fn submit_page_jump(&mut self) {
        let token = std::mem::take(&mut self.page_jump_input);
        self.go_to_page_token(&token);
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_page_jump(&mut self) {
        self.page_jump_input.clear();
        self.input_mode = InputMode::Normal;
    }

    // ========================
    // Selection
    // ========================

    pub fn select_next(&mut self) {
        let count = self.visible_countries().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.visible_countries().len();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    // ========================
    // Favorites
    // ========================

    /// Toggle the selected card's favorite state
    pub fn toggle_selected_favorite(&mut self) -> Option<FavoriteButton> {
        let name = self.selected_country()?.name.clone();
        Some(self.toggle_favorite(&name))
    }

    /// Toggle `name` and return the button state to show afterwards
    pub fn toggle_favorite(&mut self, name: &str) -> FavoriteButton {
        if let Err(e) = self.favorites.toggle(name) {
            tracing::warn!(error = %e, name, "Could not save favorites");
        }
        favorite_button(self.favorites.is_favorite(name))
    }

    // ========================
    // Popups
    // ========================

    pub fn show_detail(&mut self) {
        if self.selected_country().is_some() {
            self.show_detail = true;
        }
    }

    pub fn close_detail(&mut self) {
        self.show_detail = false;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
