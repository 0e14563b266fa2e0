//! Countries TUI - Actor-based country gallery
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use countries_tui::constants::{APP_NAME, DEFAULT_LOG_FILE, STORAGE_UNAVAILABLE_MESSAGE};
use countries_tui::messages::ui_events::{key_to_ui_event, InputMode};
use countries_tui::network::client::create_client;
use countries_tui::ui::{format_bytes, render_card, render_page_links, favorite_style};
use countries_tui::{
    AppActor, AppState, Config, Favorites, FileStore, NetworkActor, NetworkCommand,
    NetworkResponse, RenderState, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load();
    let config = &loaded.config;

    // Favorites need local storage; without it nothing starts
    let store = match FileStore::open(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", STORAGE_UNAVAILABLE_MESSAGE);
            return Err(e.into());
        }
    };

    // Initialize logging to file
    let log_path = config.log_path();
    let log_dir = log_path.parent().unwrap_or(store.dir()).to_path_buf();
    std::fs::create_dir_all(&log_dir)?;
    let log_name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());
    let file_appender = tracing_appender::rolling::never(&log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    loaded.report();
    tracing::info!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = create_client(config.request_timeout_secs.map(Duration::from_secs));
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let state = AppState::new(Favorites::new(Box::new(store)), config.api_url.clone());
    let app_actor = AppActor::new(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.detail.is_some(),
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Length(3),  // Search bar
            Constraint::Min(6),     // Cards
            Constraint::Length(1),  // Pagination
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_search_bar(f, state, chunks[1]);
    draw_gallery(f, state, chunks[2]);
    draw_pagination(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if let Some(card) = &state.detail {
        draw_detail_popup(f, card, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let spans = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!("  {} countries", state.total_countries),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("  |  {} favorites", state.favorites_count),
            Style::default().fg(Color::Yellow),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let editing = state.input_mode == InputMode::Search;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let title = if state.query.is_empty() {
        String::from(" Search (/) ")
    } else {
        format!(" Search (/) - {} matches ", state.match_count)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let content = if state.query.is_empty() && !editing {
        Paragraph::new("Type a country name...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.query.as_str())
    };
    f.render_widget(content.block(block), area);

    if editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + state.query.chars().count() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_gallery(f: &mut Frame, state: &RenderState, area: Rect) {
    if let Some(message) = &state.empty_message {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Yellow).bold())),
            Line::from(""),
            Line::from(Span::styled("¯\\_(ツ)_/¯", Style::default().fg(Color::DarkGray))),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
        f.render_widget(paragraph, area);
        return;
    }

    if state.cards.is_empty() {
        // Loading, or a failed fetch that leaves the gallery blank
        let text = if state.is_loading {
            format!("Loading countries... {}", format_bytes(state.bytes_received))
        } else {
            String::new()
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (row_idx, row_cards) in state.cards.chunks(3).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[row_idx]);

        for (col_idx, card) in row_cards.iter().enumerate() {
            let index = row_idx * 3 + col_idx;
            f.render_widget(render_card(card, index == state.selected), cols[col_idx]);
        }
    }
}

fn draw_pagination(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.input_mode == InputMode::PageJump {
        let prompt = Line::from(vec![
            Span::styled(" Go to page: ", Style::default().fg(Color::Yellow)),
            Span::raw(state.page_jump_input.as_str()),
            Span::styled(
                format!("  (1-{}, Enter to go, Esc to cancel)", state.total_pages),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(prompt), area);
        let cursor_x = (area.x + 13 + state.page_jump_input.chars().count() as u16)
            .min(area.x + area.width.saturating_sub(1));
        f.set_cursor_position(Position::new(cursor_x, area.y));
        return;
    }

    f.render_widget(Paragraph::new(render_page_links(&state.page_links)), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        String::from(" Loading... ")
    } else {
        match state.input_mode {
            InputMode::Search => String::from(" Esc/Enter:done | Backspace:delete | Ctrl+U:clear "),
            InputMode::PageJump => String::from(" Type a page number "),
            InputMode::Normal if state.total_pages > 0 => format!(
                " Page {}/{} | /:search | ←/→:page | ↑/↓:select | f:favorite | Enter:details | ?:help | q:quit ",
                state.current_page, state.total_pages
            ),
            InputMode::Normal => String::from(" /:search | ?:help | q:quit "),
        }
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_detail_popup(f: &mut Frame, card: &countries_tui::CountryCard, area: Rect) {
    let popup_area = centered_rect(60, 50, area);
    let label = Style::default().fg(Color::Gray).bold();

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(" Capital   ", label), Span::raw(card.capital.as_str())]),
        Line::from(vec![Span::styled(" Region    ", label), Span::raw(card.region.as_str())]),
        Line::from(vec![Span::styled(" Flag      ", label), Span::raw(card.flag_url.as_str())]),
        Line::from(vec![
            Span::styled(" Explore   ", label),
            Span::styled(card.explore_link.as_str(), Style::default().fg(Color::Cyan).underlined()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(card.favorite.label(), favorite_style(card.favorite)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " f: toggle favorite | any other key: close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", card.name))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .style(Style::default().bg(Color::Black));

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(detail, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 COUNTRIES TUI - Keyboard Shortcuts

 SEARCH
   / or s             Start typing a search
   Esc / Enter        Stop editing the search
   Ctrl+U             Clear the search

 BROWSE
   ← / → (h / l)      Previous / next page
   Home               First page
   g                  Go to a page number
   ↑ / ↓ (k / j)      Select card

 CARD
   f / Space          Toggle favorite
   Enter              Show details and explore link

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
