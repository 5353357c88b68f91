use crate::api::{CardListPage, PlatformClient};
use crate::config::{load_settings, Settings};
use crate::forms::actions::run_with_terminal;
use crate::forms::navigation::parse_scripted_keys;
use crate::forms::screens::draw_loading_screen;
use crate::listing::controller::ListController;
use crate::listing::filter::ClaimFilter;
use crate::listing::query::CardListQuery;
use crate::listing::screens::{draw_card_list, project_card_list_view_model};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, IsTerminal};
use std::time::Duration;

const LIST_HINT: &str = "a all | c claimed | u unclaimed | n/p page | r refresh | Esc close";
const LIST_STATUS: &str = "Filter keys refetch from the first page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    FilterAll,
    FilterClaimed,
    FilterUnclaimed,
    NextPage,
    PrevPage,
    Refresh,
    Quit,
}

pub fn list_action_from_key(key: crossterm::event::KeyEvent) -> Option<ListAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ListAction::Quit);
    }
    match key.code {
        KeyCode::Char('a') => Some(ListAction::FilterAll),
        KeyCode::Char('c') => Some(ListAction::FilterClaimed),
        KeyCode::Char('u') => Some(ListAction::FilterUnclaimed),
        KeyCode::Char('n') => Some(ListAction::NextPage),
        KeyCode::Char('p') => Some(ListAction::PrevPage),
        KeyCode::Char('r') => Some(ListAction::Refresh),
        KeyCode::Esc | KeyCode::Char('q') => Some(ListAction::Quit),
        _ => None,
    }
}

pub(crate) fn cmd_browse_cards() -> Result<String, String> {
    let settings = load_settings().map_err(|e| e.to_string())?;
    let client = PlatformClient::new(&settings);
    if let Some(keys) = load_scripted_keys()? {
        return run_card_list_scripted(&settings, &client, keys);
    }
    if !is_interactive() {
        return Err("the gift card browser requires an interactive terminal".to_string());
    }
    run_with_terminal(|terminal| run_card_list_tui(terminal, &settings, &client))
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

fn fetch_page(
    client: &PlatformClient,
    query: &CardListQuery,
) -> Result<CardListPage, String> {
    client.fetch_gift_cards(query).map_err(|e| e.to_string())
}

fn run_card_list_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    client: &PlatformClient,
) -> Result<String, String> {
    let mut controller = ListController::from_navigation(
        settings.collective_id,
        None,
        None,
        settings.page_limit,
    );
    draw_loading_screen(terminal, "Gift Cards")?;
    let mut page = fetch_page(client, controller.query())?;
    let mut status = LIST_STATUS.to_string();

    loop {
        let view_model = project_card_list_view_model(
            &settings.collective_slug,
            controller.filter(),
            &page,
            &status,
            LIST_HINT,
        );
        draw_card_list(terminal, &view_model)?;
        if !event::poll(Duration::from_millis(250))
            .map_err(|e| format!("failed to poll list input: {e}"))?
        {
            continue;
        }
        let ev = event::read().map_err(|e| format!("failed to read list input: {e}"))?;
        let Event::Key(key) = ev else {
            continue;
        };
        let Some(action) = list_action_from_key(key) else {
            continue;
        };
        match apply_list_action(client, &mut controller, &mut page, &mut status, action) {
            Ok(true) => return Ok("closed gift card list".to_string()),
            Ok(false) => {}
            Err(err) => status = err,
        }
    }
}

/// Applies one browser action; `Ok(true)` means the browser should close.
/// Fetch failures come back as `Err` and leave the previous page in place.
fn apply_list_action(
    client: &PlatformClient,
    controller: &mut ListController,
    page: &mut CardListPage,
    status: &mut String,
    action: ListAction,
) -> Result<bool, String> {
    match action {
        ListAction::Quit => return Ok(true),
        ListAction::FilterAll => {
            let query = controller.select_filter(ClaimFilter::All);
            *page = fetch_page(client, &query)?;
            *status = "showing all gift cards".to_string();
        }
        ListAction::FilterClaimed => {
            let query = controller.select_filter(ClaimFilter::Claimed);
            *page = fetch_page(client, &query)?;
            *status = "showing claimed gift cards".to_string();
        }
        ListAction::FilterUnclaimed => {
            let query = controller.select_filter(ClaimFilter::Unclaimed);
            *page = fetch_page(client, &query)?;
            *status = "showing unclaimed gift cards".to_string();
        }
        ListAction::NextPage => match controller.next_page(page.total) {
            Some(query) => {
                *page = fetch_page(client, &query)?;
                *status = "moved to the next page".to_string();
            }
            None => *status = "already on the last page".to_string(),
        },
        ListAction::PrevPage => match controller.prev_page() {
            Some(query) => {
                *page = fetch_page(client, &query)?;
                *status = "moved to the previous page".to_string();
            }
            None => *status = "already on the first page".to_string(),
        },
        ListAction::Refresh => {
            *page = fetch_page(client, controller.query())?;
            *status = "refreshed".to_string();
        }
    }
    Ok(false)
}

fn run_card_list_scripted(
    settings: &Settings,
    client: &PlatformClient,
    keys: Vec<crossterm::event::KeyEvent>,
) -> Result<String, String> {
    let mut controller = ListController::from_navigation(
        settings.collective_id,
        None,
        None,
        settings.page_limit,
    );
    let mut page = fetch_page(client, controller.query())?;
    let mut status = LIST_STATUS.to_string();
    for key in keys {
        let Some(action) = list_action_from_key(key) else {
            continue;
        };
        match apply_list_action(client, &mut controller, &mut page, &mut status, action) {
            Ok(true) => return Ok("closed gift card list".to_string()),
            Ok(false) => {}
            Err(err) => status = err,
        }
    }
    Err("scripted run did not terminate; include an esc or ctrl-c key".to_string())
}
