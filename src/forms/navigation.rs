use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

/// Actions available on a creation-form field screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    MovePrev,
    MoveNext,
    Edit,
    Submit,
    Cancel,
}

impl FormAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FormAction::MovePrev => "move_prev",
            FormAction::MoveNext => "move_next",
            FormAction::Edit => "edit",
            FormAction::Submit => "submit",
            FormAction::Cancel => "cancel",
        }
    }
}

pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.min(len - 1)
}

pub fn move_selection(selected: usize, action: FormAction, len: usize) -> usize {
    match action {
        FormAction::MovePrev => selected.saturating_sub(1),
        FormAction::MoveNext => std::cmp::min(selected + 1, len.saturating_sub(1)),
        _ => selected,
    }
}

pub fn form_action_from_key(key: crossterm::event::KeyEvent) -> Option<FormAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(FormAction::Cancel);
    }
    match key.code {
        KeyCode::Up => Some(FormAction::MovePrev),
        KeyCode::Down => Some(FormAction::MoveNext),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(FormAction::Edit),
        KeyCode::Char('s') => Some(FormAction::Submit),
        KeyCode::Esc => Some(FormAction::Cancel),
        _ => None,
    }
}

/// Parses `GIFTDESK_SCRIPT_KEYS` tokens into key events for terminal-free
/// drives of the form and list screens.
pub fn parse_scripted_keys(raw: &str) -> Result<Vec<crossterm::event::KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let normalized = token.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            continue;
        }
        let key = match normalized.as_str() {
            "up" => crossterm::event::KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => crossterm::event::KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "enter" => crossterm::event::KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "esc" => crossterm::event::KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "ctrl-c" => crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "s" => crossterm::event::KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            "a" => crossterm::event::KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            "c" => crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            "u" => crossterm::event::KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE),
            "n" => crossterm::event::KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            "p" => crossterm::event::KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            "r" => crossterm::event::KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            other => {
                return Err(format!(
                    "invalid GIFTDESK_SCRIPT_KEYS token `{other}`; valid tokens: up,down,enter,esc,ctrl-c,s,a,c,u,n,p,r"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}
