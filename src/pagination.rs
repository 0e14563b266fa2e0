//! Page arithmetic and the windowed page-link bar

use crate::constants::{PAGE_SIZE, PAGE_WINDOW};

/// One control in the pagination bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLink {
    /// Previous-page control. `target` may be out of range when disabled.
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Next { target: usize, disabled: bool },
}

impl PageLink {
    /// Page this control navigates to when activated
    pub fn target(&self) -> usize {
        match self {
            PageLink::Previous { target, .. } | PageLink::Next { target, .. } => *target,
            PageLink::Page { number, .. } => *number,
        }
    }

    pub fn label(&self) -> String {
        match self {
            PageLink::Previous { .. } => String::from("«"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Next { .. } => String::from("»"),
        }
    }
}

pub fn total_pages(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Items shown on 1-based `page`; empty when the page is past the end
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Build the pagination bar for `current` of `total` pages
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }

    let start = current.saturating_sub(PAGE_WINDOW).max(1);
    let end = current.saturating_add(PAGE_WINDOW).min(total);

    let mut links = Vec::with_capacity(end.saturating_sub(start) + 3);
    links.push(PageLink::Previous {
        target: current.saturating_sub(1),
        disabled: current == 1,
    });
    for number in start..=end {
        links.push(PageLink::Page {
            number,
            active: number == current,
        });
    }
    links.push(PageLink::Next {
        target: current + 1,
        disabled: current == total,
    });
    links
}

/// Accept `page` only when it lies in `1..=total`
pub fn validate_page(page: usize, total: usize) -> Option<usize> {
    (1..=total).contains(&page).then_some(page)
}

/// Parse a typed page token: optional sign, then leading digits.
///
/// Trailing garbage after the digits is ignored (`"2abc"` is page 2).
/// Negative numbers parse but can never pass [`validate_page`], so they
/// come back as `None`.
pub fn parse_page_token(token: &str) -> Option<usize> {
    let trimmed = token.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() || negative {
        return None;
    }
    // Overflowing tokens are out of range anyway.
    digits.parse().ok()
}
