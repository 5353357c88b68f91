use crate::api::{CardListPage, GiftCard};
use crate::listing::controller::empty_list_message;
use crate::listing::filter::ClaimFilter;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Terminal;
use std::io;

pub struct CardListViewModel {
    pub title: String,
    pub filter_line: String,
    pub rows: Vec<String>,
    pub pagination_line: Option<String>,
    pub status_text: String,
    pub hint_text: String,
}

pub fn filter_line(active: ClaimFilter) -> String {
    [
        ClaimFilter::All,
        ClaimFilter::Claimed,
        ClaimFilter::Unclaimed,
    ]
    .iter()
    .map(|filter| {
        if *filter == active {
            format!("[{}]", filter.as_str())
        } else {
            filter.as_str().to_string()
        }
    })
    .collect::<Vec<_>>()
    .join("  ")
}

pub fn format_card_row(card: &GiftCard) -> String {
    let recipient = card
        .recipient_email
        .as_deref()
        .unwrap_or("<unclaimed code>");
    let state = if card.is_confirmed {
        "claimed"
    } else {
        "unclaimed"
    };
    format!(
        "#{} {} | {} {} | {} | {} | issued {}",
        card.id,
        card.name,
        card.initial_balance,
        card.currency,
        recipient,
        state,
        card.created_at.format("%Y-%m-%d")
    )
}

pub fn pagination_line(offset: u32, limit: u32, total: u32) -> Option<String> {
    if total <= limit {
        return None;
    }
    let end = std::cmp::min(offset.saturating_add(limit), total);
    Some(format!(
        "cards {}-{end} of {total}",
        offset.saturating_add(1)
    ))
}

pub fn project_card_list_view_model(
    collective_slug: &str,
    filter: ClaimFilter,
    page: &CardListPage,
    status_text: &str,
    hint_text: &str,
) -> CardListViewModel {
    let rows = if page.cards.is_empty() {
        vec![empty_list_message(filter.is_confirmed()).to_string()]
    } else {
        page.cards.iter().map(format_card_row).collect()
    };
    CardListViewModel {
        title: format!("Gift Cards: {collective_slug}"),
        filter_line: filter_line(filter),
        rows,
        pagination_line: pagination_line(page.offset, page.limit, page.total),
        status_text: status_text.to_string(),
        hint_text: hint_text.to_string(),
    }
}

/// Plain-text rendering for the non-interactive `list` command.
pub fn render_card_list_text(
    collective_slug: &str,
    filter: ClaimFilter,
    page: &CardListPage,
) -> String {
    let mut lines = vec![
        format!("Gift cards for {collective_slug} (filter: {filter})"),
        String::new(),
    ];
    if page.cards.is_empty() {
        lines.push(empty_list_message(filter.is_confirmed()).to_string());
    } else {
        for card in &page.cards {
            lines.push(format_card_row(card));
        }
    }
    if let Some(pagination) = pagination_line(page.offset, page.limit, page.total) {
        lines.push(String::new());
        lines.push(pagination);
    }
    lines.join("\n")
}

pub(crate) fn draw_card_list(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view_model: &CardListViewModel,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Min(8),
                    Constraint::Length(5),
                ])
                .split(frame.area());
            let header = Paragraph::new(vec![
                Line::from(Span::styled(
                    view_model.title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Filter: {}", view_model.filter_line)),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, chunks[0]);

            let items: Vec<ListItem> = view_model
                .rows
                .iter()
                .map(|row| ListItem::new(Line::from(Span::raw(row.clone()))))
                .collect();
            let list =
                List::new(items).block(Block::default().borders(Borders::ALL));
            frame.render_widget(list, chunks[1]);

            let mut footer_lines = Vec::new();
            if let Some(pagination) = &view_model.pagination_line {
                footer_lines.push(Line::from(pagination.clone()));
            }
            footer_lines.push(Line::from(view_model.hint_text.clone()));
            footer_lines.push(Line::from(format!("Status: {}", view_model.status_text)));
            let footer =
                Paragraph::new(footer_lines).block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        })
        .map_err(|e| format!("failed to render card list: {e}"))?;
    Ok(())
}
