use crate::api::{PaymentMethod, PlatformClient};
use crate::config::{default_state_root, load_settings, Settings};
use crate::forms::bulk_codes::CodesForm;
use crate::forms::bulk_invite::InviteForm;
use crate::forms::navigation::{
    clamp_selection, form_action_from_key, move_selection, parse_scripted_keys, FormAction,
};
use crate::forms::numeric::MIN_AMOUNT;
use crate::forms::recipients::split_recipient_input;
use crate::forms::screens::{
    centered_rect, codes_form_rows, draw_form_screen, draw_loading_screen, draw_notice_screen,
    invite_form_rows, tail_for_display,
};
use crate::shared::logging::append_activity_log_line;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::time::Duration;

pub const CUSTOM_MESSAGE_MAX_CHARS: usize = 255;

const FORM_HINT: &str = "Up/Down move | Enter edit | s submit | Esc cancel";
const FORM_STATUS: &str = "Enter edits the selected field. s submits. Esc cancels.";

pub(crate) fn cmd_send_cards() -> Result<String, String> {
    let settings = load_settings().map_err(|e| e.to_string())?;
    let client = PlatformClient::new(&settings);
    if let Some(keys) = load_scripted_keys()? {
        return run_invite_form_scripted(&settings, &client, keys);
    }
    if !is_interactive() {
        return Err("gift card forms require an interactive terminal".to_string());
    }
    run_with_terminal(|terminal| run_invite_form_tui(terminal, &settings, &client))
}

pub(crate) fn cmd_create_codes() -> Result<String, String> {
    let settings = load_settings().map_err(|e| e.to_string())?;
    let client = PlatformClient::new(&settings);
    if let Some(keys) = load_scripted_keys()? {
        return run_codes_form_scripted(&settings, &client, keys);
    }
    if !is_interactive() {
        return Err("gift card forms require an interactive terminal".to_string());
    }
    run_with_terminal(|terminal| run_codes_form_tui(terminal, &settings, &client))
}

fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

fn load_scripted_keys() -> Result<Option<Vec<crossterm::event::KeyEvent>>, String> {
    let Ok(raw) = std::env::var("GIFTDESK_SCRIPT_KEYS") else {
        return Ok(None);
    };
    parse_scripted_keys(&raw).map(Some)
}

pub(crate) fn run_with_terminal<F>(run: F) -> Result<String, String>
where
    F: FnOnce(&mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<String, String>,
{
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    execute!(stdout, EnterAlternateScreen, Hide)
        .map_err(|e| format!("failed to enter alternate screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("failed to create terminal: {e}"))?;
    let result = run(&mut terminal);
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), Show, LeaveAlternateScreen)
        .map_err(|e| format!("failed to leave alternate screen: {e}"))?;
    result
}

fn funding_source_label(payment_methods: &[PaymentMethod]) -> String {
    match payment_methods.first() {
        Some(first) => match &first.service {
            Some(service) => format!("{} ({service})", first.name),
            None => first.name.clone(),
        },
        None => "<none>".to_string(),
    }
}

fn no_payment_method_lines(settings: &Settings) -> Vec<String> {
    vec![
        "You must add a payment method to your account to create gift cards.".to_string(),
        format!(
            "Open {}/{}/edit/payment-methods to add one.",
            settings.api_base.trim_end_matches('/'),
            settings.collective_slug
        ),
    ]
}

fn wait_for_any_key() -> Result<(), String> {
    loop {
        let ev = event::read().map_err(|e| format!("failed to read input: {e}"))?;
        if let Event::Key(key) = ev {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}

fn log_activity(line: &str) {
    if let Ok(root) = default_state_root() {
        append_activity_log_line(&root, line);
    }
}

fn run_invite_form_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    client: &PlatformClient,
) -> Result<String, String> {
    draw_loading_screen(terminal, "Send Gift Cards")?;
    let payment_methods = client
        .fetch_payment_methods(settings.collective_id)
        .map_err(|e| e.to_string())?;
    if payment_methods.is_empty() {
        draw_notice_screen(
            terminal,
            "Send Gift Cards",
            &no_payment_method_lines(settings),
            "Press any key to close",
        )?;
        wait_for_any_key()?;
        return Ok("no payment method configured; gift cards cannot be created".to_string());
    }

    let funding = funding_source_label(&payment_methods);
    let subtitle = format!("Collective: {}", settings.collective_slug);
    let mut form = InviteForm::new();
    let mut selected = 0usize;
    let mut status = FORM_STATUS.to_string();

    loop {
        let rows = invite_form_rows(&form, &funding, &settings.currency);
        selected = clamp_selection(selected, rows.len());
        draw_form_screen(
            terminal,
            "Send Gift Cards",
            &subtitle,
            &rows,
            selected,
            &status,
            FORM_HINT,
        )?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll form input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read form input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        match action {
            FormAction::MovePrev | FormAction::MoveNext => {
                selected = move_selection(selected, action, rows.len());
            }
            FormAction::Cancel => return Ok("gift card creation canceled".to_string()),
            FormAction::Edit => match selected {
                0 => {
                    if let Some(value) = prompt_line_tui(
                        terminal,
                        "Amount",
                        &format!("Card amount in {} (minimum {MIN_AMOUNT}):", settings.currency),
                        &form
                            .values
                            .amount
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    )? {
                        if value
                            .trim()
                            .parse::<i64>()
                            .is_ok_and(|parsed| parsed < MIN_AMOUNT)
                        {
                            status = format!("amount must be at least {MIN_AMOUNT}");
                        } else {
                            form.edit_amount(&value);
                            status = "amount updated".to_string();
                        }
                    }
                }
                1 => status = "Payment method comes from the collective settings.".to_string(),
                2 => {
                    let current = form.values.custom_message.clone().unwrap_or_default();
                    if let Some(value) = prompt_line_tui(
                        terminal,
                        "Custom Message",
                        "Sent in the invitation email (optional):",
                        &current,
                    )? {
                        if value.chars().count() > CUSTOM_MESSAGE_MAX_CHARS {
                            status = format!(
                                "message must be {CUSTOM_MESSAGE_MAX_CHARS} characters or fewer"
                            );
                        } else {
                            form.edit_custom_message(&value);
                            status = "custom message updated".to_string();
                        }
                    }
                }
                3 => {
                    let current = form.values.recipients.join(", ");
                    if let Some(value) = prompt_line_tui(
                        terminal,
                        "Recipients",
                        "Emails that will receive a gift card (comma-separated):",
                        &current,
                    )? {
                        let entries = split_recipient_input(&value);
                        form.edit_recipients(&entries);
                        status = if form.errors.recipients.is_empty() {
                            format!("{} recipient(s) set", form.recipient_count())
                        } else {
                            format!(
                                "{} entries are not valid emails",
                                form.errors.recipients.len()
                            )
                        };
                    }
                }
                _ => {
                    if let Some(summary) =
                        submit_invite(terminal, settings, client, &mut form, &mut status)?
                    {
                        return Ok(summary);
                    }
                }
            },
            FormAction::Submit => {
                if let Some(summary) =
                    submit_invite(terminal, settings, client, &mut form, &mut status)?
                {
                    return Ok(summary);
                }
            }
        }
    }
}

fn submit_invite(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    client: &PlatformClient,
    form: &mut InviteForm,
    status: &mut String,
) -> Result<Option<String>, String> {
    if !form.is_submit_enabled() {
        *status = "add at least one valid recipient first".to_string();
        return Ok(None);
    }
    let Some(draft) = form.begin_submit(form.values.amount.is_some()) else {
        *status = if form.values.amount.is_none() {
            "set the card amount first".to_string()
        } else {
            "submission already in progress".to_string()
        };
        return Ok(None);
    };
    draw_loading_screen(terminal, "Creating gift cards")?;
    match client.create_invite_batch(settings.collective_id, &draft) {
        Ok(receipt) => {
            let created = receipt.created;
            form.resolve_submit(Ok(receipt));
            log_activity(&format!(
                "created {created} invitation gift cards for {}",
                settings.collective_slug
            ));
            Ok(Some(format!(
                "created {created} gift cards for {}",
                settings.collective_slug
            )))
        }
        Err(err) => {
            form.resolve_submit(Err(err.to_string()));
            *status = form
                .submit_error
                .clone()
                .unwrap_or_else(|| err.to_string());
            Ok(None)
        }
    }
}

fn run_codes_form_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    client: &PlatformClient,
) -> Result<String, String> {
    draw_loading_screen(terminal, "Create Gift Cards")?;
    let payment_methods = client
        .fetch_payment_methods(settings.collective_id)
        .map_err(|e| e.to_string())?;
    if payment_methods.is_empty() {
        draw_notice_screen(
            terminal,
            "Create Gift Cards",
            &no_payment_method_lines(settings),
            "Press any key to close",
        )?;
        wait_for_any_key()?;
        return Ok("no payment method configured; gift cards cannot be created".to_string());
    }

    let funding = funding_source_label(&payment_methods);
    let subtitle = format!("Collective: {}", settings.collective_slug);
    let mut form = CodesForm::new();
    let mut selected = 0usize;
    let mut status = FORM_STATUS.to_string();

    loop {
        let rows = codes_form_rows(&form, &funding, &settings.currency);
        selected = clamp_selection(selected, rows.len());
        draw_form_screen(
            terminal,
            "Create Gift Cards",
            &subtitle,
            &rows,
            selected,
            &status,
            FORM_HINT,
        )?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll form input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read form input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        match action {
            FormAction::MovePrev | FormAction::MoveNext => {
                selected = move_selection(selected, action, rows.len());
            }
            FormAction::Cancel => return Ok("gift card creation canceled".to_string()),
            FormAction::Edit => match selected {
                0 => {
                    if let Some(value) = prompt_line_tui(
                        terminal,
                        "Amount",
                        &format!("Card amount in {} (minimum {MIN_AMOUNT}):", settings.currency),
                        &form
                            .values
                            .amount
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    )? {
                        if value
                            .trim()
                            .parse::<i64>()
                            .is_ok_and(|parsed| parsed < MIN_AMOUNT)
                        {
                            status = format!("amount must be at least {MIN_AMOUNT}");
                        } else {
                            form.edit_amount(&value);
                            status = "amount updated".to_string();
                        }
                    }
                }
                1 => {
                    if let Some(value) = prompt_line_tui(
                        terminal,
                        "Number of gift cards",
                        "How many unclaimed cards to issue:",
                        &form.values.count.to_string(),
                    )? {
                        if value.trim().parse::<i64>().is_ok_and(|parsed| parsed < 0) {
                            status = "count must be zero or more".to_string();
                        } else {
                            form.edit_count(&value);
                            status = "count updated".to_string();
                        }
                    }
                }
                2 => status = "Payment method comes from the collective settings.".to_string(),
                _ => {
                    if let Some(summary) =
                        submit_codes(terminal, settings, client, &mut form, &mut status)?
                    {
                        return Ok(summary);
                    }
                }
            },
            FormAction::Submit => {
                if let Some(summary) =
                    submit_codes(terminal, settings, client, &mut form, &mut status)?
                {
                    return Ok(summary);
                }
            }
        }
    }
}

fn submit_codes(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    client: &PlatformClient,
    form: &mut CodesForm,
    status: &mut String,
) -> Result<Option<String>, String> {
    if !form.is_submit_enabled() {
        *status = "a count of zero creates nothing".to_string();
        return Ok(None);
    }
    let Some(draft) = form.begin_submit(form.values.amount.is_some()) else {
        *status = if form.values.amount.is_none() {
            "set the card amount first".to_string()
        } else {
            "submission already in progress".to_string()
        };
        return Ok(None);
    };
    draw_loading_screen(terminal, "Creating gift cards")?;
    match client.create_code_batch(settings.collective_id, &draft) {
        Ok(receipt) => {
            let created = receipt.created;
            form.resolve_submit(Ok(receipt));
            log_activity(&format!(
                "created {created} unclaimed gift cards for {}",
                settings.collective_slug
            ));
            Ok(Some(format!(
                "created {created} gift cards for {}",
                settings.collective_slug
            )))
        }
        Err(err) => {
            form.resolve_submit(Err(err.to_string()));
            *status = form
                .submit_error
                .clone()
                .unwrap_or_else(|| err.to_string());
            Ok(None)
        }
    }
}

fn run_invite_form_scripted(
    settings: &Settings,
    client: &PlatformClient,
    keys: Vec<crossterm::event::KeyEvent>,
) -> Result<String, String> {
    let payment_methods = client
        .fetch_payment_methods(settings.collective_id)
        .map_err(|e| e.to_string())?;
    if payment_methods.is_empty() {
        return Ok("no payment method configured; gift cards cannot be created".to_string());
    }
    let mut form = InviteForm::new();
    let mut selected = 0usize;
    for key in keys {
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        match action {
            FormAction::MovePrev | FormAction::MoveNext => {
                selected = move_selection(selected, action, 5);
            }
            FormAction::Cancel => return Ok("gift card creation canceled".to_string()),
            FormAction::Edit => {
                return Err("scripted mode does not support field prompts".to_string());
            }
            FormAction::Submit => {
                if form.begin_submit(form.values.amount.is_some()).is_some() {
                    return Err("scripted mode does not support submission".to_string());
                }
            }
        }
    }
    Err("scripted run did not terminate; include an esc or ctrl-c key".to_string())
}

fn run_codes_form_scripted(
    settings: &Settings,
    client: &PlatformClient,
    keys: Vec<crossterm::event::KeyEvent>,
) -> Result<String, String> {
    let payment_methods = client
        .fetch_payment_methods(settings.collective_id)
        .map_err(|e| e.to_string())?;
    if payment_methods.is_empty() {
        return Ok("no payment method configured; gift cards cannot be created".to_string());
    }
    let mut form = CodesForm::new();
    let mut selected = 0usize;
    for key in keys {
        let Some(action) = form_action_from_key(key) else {
            continue;
        };
        match action {
            FormAction::MovePrev | FormAction::MoveNext => {
                selected = move_selection(selected, action, 4);
            }
            FormAction::Cancel => return Ok("gift card creation canceled".to_string()),
            FormAction::Edit => {
                return Err("scripted mode does not support field prompts".to_string());
            }
            FormAction::Submit => {
                if form.begin_submit(form.values.amount.is_some()).is_some() {
                    return Err("scripted mode does not support submission".to_string());
                }
            }
        }
    }
    Err("scripted run did not terminate; include an esc or ctrl-c key".to_string())
}

pub(crate) fn prompt_line_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    prompt: &str,
    initial: &str,
) -> Result<Option<String>, String> {
    let mut value = initial.to_string();
    loop {
        terminal
            .draw(|frame| {
                let area = centered_rect(70, 30, frame.area());
                let block = Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::new(2, 2, 1, 1));
                frame.render_widget(block.clone(), area);
                let inner = block.inner(area);
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Length(1),
                        Constraint::Min(1),
                    ])
                    .split(inner);
                let max_input_width = rows[3].width.saturating_sub(2) as usize;
                let display_value = tail_for_display(&value, max_input_width);

                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        title,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))),
                    rows[0],
                );
                frame.render_widget(Paragraph::new(prompt), rows[2]);
                frame.render_widget(
                    Paragraph::new(Line::from(format!("> {display_value}"))),
                    rows[3],
                );
                frame.render_widget(Paragraph::new("Enter apply, Esc cancel"), rows[4]);
                frame.set_cursor_position((
                    rows[3].x + 2 + display_value.chars().count() as u16,
                    rows[3].y,
                ));
            })
            .map_err(|e| format!("failed to render prompt: {e}"))?;
        let ev = event::read().map_err(|e| format!("failed to read prompt input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Esc => return Ok(None),
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => return Ok(Some(value)),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(ch),
            _ => {}
        }
    }
}
