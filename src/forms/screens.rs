use crate::forms::bulk_codes::CodesForm;
use crate::forms::bulk_invite::InviteForm;
use crate::forms::FormPhase;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};
use ratatui::Terminal;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldRow {
    pub field: String,
    pub value: Option<String>,
}

pub fn field_row(field: &str, value: Option<String>) -> FormFieldRow {
    FormFieldRow {
        field: field.to_string(),
        value,
    }
}

pub fn format_amount(amount: Option<i64>, currency: &str) -> String {
    match amount {
        Some(value) => format!("{value} {currency}"),
        None => "<unset>".to_string(),
    }
}

pub fn submit_row_label(count: i64, phase: FormPhase) -> String {
    match phase {
        FormPhase::Submitting => "Creating...".to_string(),
        _ => format!("Create {count} gift cards"),
    }
}

fn recipients_row_value(form: &InviteForm) -> String {
    if form.values.recipients.is_empty() {
        return "<none>".to_string();
    }
    let summary = format!("{} recipient(s)", form.values.recipients.len());
    if form.errors.recipients.is_empty() {
        summary
    } else {
        format!("{summary}; invalid: {}", form.errors.recipients.join(", "))
    }
}

pub fn invite_form_rows(
    form: &InviteForm,
    funding_source: &str,
    currency: &str,
) -> Vec<FormFieldRow> {
    vec![
        field_row("Amount", Some(format_amount(form.values.amount, currency))),
        field_row("Payment Method", Some(funding_source.to_string())),
        field_row(
            "Custom Message",
            Some(
                form.values
                    .custom_message
                    .clone()
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| "<optional>".to_string()),
            ),
        ),
        field_row("Recipients", Some(recipients_row_value(form))),
        field_row(
            "Submit",
            Some(submit_row_label(
                form.recipient_count() as i64,
                form.phase,
            )),
        ),
    ]
}

pub fn codes_form_rows(
    form: &CodesForm,
    funding_source: &str,
    currency: &str,
) -> Vec<FormFieldRow> {
    vec![
        field_row("Amount", Some(format_amount(form.values.amount, currency))),
        field_row(
            "Number of gift cards",
            Some(form.values.count.to_string()),
        ),
        field_row("Payment Method", Some(funding_source.to_string())),
        field_row(
            "Submit",
            Some(submit_row_label(form.values.count, form.phase)),
        ),
    ]
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_chars {
        return value.to_string();
    }
    chars[chars.len() - max_chars..].iter().collect()
}

pub(crate) fn draw_form_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    subtitle: &str,
    rows: &[FormFieldRow],
    selected: usize,
    status: &str,
    hint: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(8),
                    Constraint::Length(4),
                ])
                .split(frame.area());
            let header = Paragraph::new(vec![
                Line::from(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(subtitle.to_string()),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(header, chunks[0]);

            let table_rows = rows.iter().enumerate().map(|(idx, row)| {
                let style = if idx == selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(row.field.clone()),
                    Cell::from(row.value.clone().unwrap_or_default()),
                ])
                .style(style)
            });
            let table = Table::new(
                table_rows,
                [Constraint::Percentage(35), Constraint::Percentage(65)],
            )
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::new(1, 1, 0, 0)),
            );
            frame.render_widget(table, chunks[1]);

            let footer = Paragraph::new(vec![
                Line::from(hint.to_string()),
                Line::from(format!("Status: {status}")),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        })
        .map_err(|e| format!("failed to render form screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_notice_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    lines: &[String],
    hint: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let area = centered_rect(70, 40, frame.area());
            let block = Block::default()
                .borders(Borders::ALL)
                .padding(Padding::new(2, 2, 1, 1));
            frame.render_widget(block.clone(), area);
            let inner = block.inner(area);
            let mut body = vec![Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))];
            body.push(Line::from(""));
            for line in lines {
                body.push(Line::from(line.clone()));
            }
            body.push(Line::from(""));
            body.push(Line::from(hint.to_string()));
            frame.render_widget(Paragraph::new(body), inner);
        })
        .map_err(|e| format!("failed to render notice screen: {e}"))?;
    Ok(())
}

pub(crate) fn draw_loading_screen(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
) -> Result<(), String> {
    terminal
        .draw(|frame| {
            let area = centered_rect(50, 20, frame.area());
            let block = Block::default().borders(Borders::ALL);
            frame.render_widget(block.clone(), area);
            let inner = block.inner(area);
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        title.to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from("Loading..."),
                ]),
                inner,
            );
        })
        .map_err(|e| format!("failed to render loading screen: {e}"))?;
    Ok(())
}
