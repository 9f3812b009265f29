use anyhow::Result;
use chroma_core::{env as core_env, ShellController};
use chroma_tui::app::{AppState, Focus, ThemeLoad, ViewState};
use chroma_tui::components::sidebar::NAV_ITEMS;
use chroma_tui::{view, AppEvent, EventHandler};
use crossterm::{
    event::{KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Duration;

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the alternate screen.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    start_tui()
}

fn start_tui() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    let mut state = AppState::default();

    let result = run(&mut terminal, &events, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    events: &EventHandler,
    state: &mut AppState,
) -> Result<()> {
    loop {
        if state.theme_load == ThemeLoad::Loading {
            load_theme_store(state);
        }

        terminal.draw(|f| view::render(f, state))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if handle_key(state, key) {
                    return Ok(());
                }
            }
            // Redrawn at the top of the loop either way.
            AppEvent::Resize | AppEvent::Tick => {}
        }
    }
}

/// Loads the registry and settings from disk. A failure is not fatal: the
/// shell keeps running and the Themes page shows the error.
fn load_theme_store(state: &mut AppState) {
    match core_env::get_base_dir().and_then(|dir| ShellController::new(&dir)) {
        Ok(ctl) => {
            state.controller = Some(ctl);
            state.theme_load = ThemeLoad::Ready;
            state.refresh_styles();
        }
        Err(e) => {
            log::error!("Failed to load theme store: {}", e);
            state.theme_load = ThemeLoad::Error(e.to_string());
        }
    }
}

/// Dispatches one key press. Returns `true` when the app should quit.
fn handle_key(state: &mut AppState, key: KeyEvent) -> bool {
    // A pending deletion captures all input until resolved.
    let dialog_open = state
        .controller
        .as_ref()
        .is_some_and(|c| c.pending_delete().is_some());
    if dialog_open {
        match key.code {
            KeyCode::Enter => confirm_delete(state),
            KeyCode::Esc => {
                if let Some(ctl) = state.controller.as_mut() {
                    ctl.cancel_delete();
                }
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('1') => {
            state.view = ViewState::Home;
            state.nav_index = 0;
        }
        KeyCode::Char('2') => {
            state.view = ViewState::Themes;
            state.nav_index = 1;
            state.focus = Focus::Content;
        }
        KeyCode::Char('b') | KeyCode::Char('B') => toggle_sidebar(state),
        KeyCode::Tab => {
            state.focus = match state.focus {
                Focus::Sidebar => Focus::Content,
                Focus::Content => Focus::Sidebar,
            };
        }
        _ => match state.focus {
            Focus::Sidebar => handle_sidebar_key(state, key.code),
            Focus::Content => handle_content_key(state, key.code),
        },
    }
    false
}

fn handle_sidebar_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.nav_index = state.nav_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.nav_index = (state.nav_index + 1).min(NAV_ITEMS.len() - 1);
        }
        KeyCode::Enter | KeyCode::Right => {
            state.view = NAV_ITEMS[state.nav_index].0;
            state.focus = Focus::Content;
        }
        _ => {}
    }
}

fn handle_content_key(state: &mut AppState, code: KeyCode) {
    if code == KeyCode::Esc {
        state.focus = Focus::Sidebar;
        return;
    }
    if state.view != ViewState::Themes {
        return;
    }

    match code {
        KeyCode::Left | KeyCode::Char('h') => state.move_card(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => state.move_card(1, 0),
        KeyCode::Up | KeyCode::Char('k') => state.move_card(0, -1),
        KeyCode::Down | KeyCode::Char('j') => state.move_card(0, 1),
        KeyCode::Enter => apply_selected(state),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => request_delete(state),
        _ => {}
    }
}

fn toggle_sidebar(state: &mut AppState) {
    let result = state.controller.as_mut().map(|c| c.toggle_sidebar());
    if let Some(Err(e)) = result {
        state.set_notification(e.to_string());
    }
}

fn apply_selected(state: &mut AppState) {
    let name = match state.selected_theme_name() {
        Some(name) => name,
        None => return,
    };
    let result = state.controller.as_mut().map(|c| c.select_theme(&name));
    match result {
        Some(Ok(())) => {
            state.refresh_styles();
            let display = state
                .controller
                .as_ref()
                .and_then(|c| c.registry().get(&name))
                .map(|t| t.display_name.clone())
                .unwrap_or(name);
            state.set_notification(format!("Theme set to {}", display));
        }
        Some(Err(e)) => state.set_notification(e.to_string()),
        None => {}
    }
}

fn request_delete(state: &mut AppState) {
    let name = match state.selected_theme_name() {
        Some(name) => name,
        None => return,
    };
    let result = state.controller.as_mut().map(|c| c.request_delete(&name));
    if let Some(Err(e)) = result {
        state.set_notification(e.to_string());
    }
}

fn confirm_delete(state: &mut AppState) {
    let result = match state.controller.as_mut() {
        Some(ctl) => ctl.confirm_delete(),
        None => return,
    };
    match result {
        Ok(Some(theme)) => {
            state.clamp_card_index();
            state.refresh_styles();
            state.set_notification(format!("Deleted theme {}", theme.display_name));
        }
        Ok(None) => {}
        Err(e) => state.set_notification(e.to_string()),
    }
}
