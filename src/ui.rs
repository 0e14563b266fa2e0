use ratatui::{prelude::*, widgets::*};

use crate::cards::{CountryCard, FavoriteButton};
use crate::pagination::PageLink;

/// Renders one country card
pub fn render_card(card: &CountryCard, is_selected: bool) -> Paragraph<'_> {
    let border_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = Style::default().fg(Color::Gray).bold();
    let lines = vec![
        Line::from(vec![
            Span::styled("Capital  ", label),
            Span::raw(card.capital.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Region   ", label),
            Span::raw(card.region.as_str()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Explore]", Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(card.favorite.label(), favorite_style(card.favorite)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", card.name))
        .title_style(Style::default().fg(Color::White).bold());

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
}

pub fn favorite_style(button: FavoriteButton) -> Style {
    match button {
        FavoriteButton::Add => Style::default().fg(Color::Green),
        FavoriteButton::Remove => Style::default().fg(Color::Red).bold(),
    }
}

/// Renders the pagination bar: « 1 2 [3] 4 5 »
pub fn render_page_links(links: &[PageLink]) -> Line<'static> {
    let mut spans = Vec::with_capacity(links.len() * 2);
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = match link {
            PageLink::Previous { disabled: true, .. } | PageLink::Next { disabled: true, .. } => {
                Style::default().fg(Color::DarkGray)
            }
            PageLink::Page { active: true, .. } => {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            }
            _ => Style::default().fg(Color::Cyan),
        };
        spans.push(Span::styled(format!(" {} ", link.label()), style));
    }
    Line::from(spans).centered()
}

/// Human readable byte count for the loading indicator
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
