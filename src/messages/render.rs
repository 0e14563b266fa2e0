//! Render state - data structure sent from App layer to UI for rendering

use crate::cards::CountryCard;
use crate::messages::ui_events::InputMode;
use crate::pagination::PageLink;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Search
    pub query: String,
    pub input_mode: InputMode,
    pub page_jump_input: String,

    // Gallery
    pub cards: Vec<CountryCard>,
    pub selected: usize,
    pub empty_message: Option<String>,

    // Pagination
    pub page_links: Vec<PageLink>,
    pub current_page: usize,
    pub total_pages: usize,

    // Counters
    pub total_countries: usize,
    pub match_count: usize,
    pub favorites_count: usize,

    // Loading
    pub is_loading: bool,
    pub bytes_received: usize,

    // Popups
    pub show_help: bool,
    pub detail: Option<CountryCard>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            query: String::new(),
            input_mode: InputMode::Normal,
            page_jump_input: String::new(),
            cards: Vec::new(),
            selected: 0,
            empty_message: None,
            page_links: Vec::new(),
            current_page: 1,
            total_pages: 0,
            total_countries: 0,
            match_count: 0,
            favorites_count: 0,
            is_loading: true,
            bytes_received: 0,
            show_help: false,
            detail: None,
        }
    }
}
