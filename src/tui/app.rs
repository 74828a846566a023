use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::autosave::Autosave;
use crate::io::config_io::load_config;
use crate::io::store_io::{StoreError, load_store, resolve_data_dir, save_store};
use crate::model::config::AppConfig;
use crate::model::note::Note;
use crate::model::store::NoteStore;
use crate::ops::search::visible_notes;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    EditTitle,
    EditContent,
    Confirm,
}

/// Cursor/selection state for the content editor (line + column in chars)
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub line: usize,
    pub col: usize,
    /// Selection anchor; `None` = no selection
    pub anchor: Option<(usize, usize)>,
    /// First visible content line
    pub scroll: usize,
}

/// Transient status toast (the "auto-saved" acknowledgment, errors, …)
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: Instant,
}

/// Main application state
pub struct App {
    pub store: NoteStore,
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Id of the active note
    pub selected: Option<String>,
    /// Cursor index into the visible (filtered, sorted) list
    pub cursor: usize,
    /// Scroll offset for the note list
    pub list_scroll: usize,
    /// Search mode: query being typed (filters live)
    pub search_input: String,
    /// Committed search filter (kept after leaving search mode)
    pub active_query: Option<String>,
    /// Content editor cursor/selection
    pub editor: EditorState,
    /// Title edit buffer + char cursor
    pub title_input: String,
    pub title_cursor: usize,
    pub status: Option<StatusMessage>,
    pub autosave: Autosave,
    pub show_help: bool,
    pub help_scroll: usize,
    /// Note id awaiting delete confirmation
    pub pending_delete: Option<String>,
}

impl App {
    pub fn new(store: NoteStore, config: AppConfig, data_dir: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        let autosave = Autosave::new(Duration::from_millis(config.autosave_delay_ms));
        let selected = visible_notes(&store, "").first().map(|n| n.id.clone());

        App {
            store,
            data_dir,
            config,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            selected,
            cursor: 0,
            list_scroll: 0,
            search_input: String::new(),
            active_query: None,
            editor: EditorState::default(),
            title_input: String::new(),
            title_cursor: 0,
            status: None,
            autosave,
            show_help: false,
            help_scroll: 0,
            pending_delete: None,
        }
    }

    /// The filter currently applied to the list: live input while searching,
    /// the committed query otherwise
    pub fn query(&self) -> &str {
        match self.mode {
            Mode::Search => &self.search_input,
            _ => self.active_query.as_deref().unwrap_or(""),
        }
    }

    /// Ids of the visible list, in display order
    pub fn visible_ids(&self) -> Vec<String> {
        visible_notes(&self.store, self.query())
            .iter()
            .map(|n| n.id.clone())
            .collect()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.store.get(self.selected.as_deref()?)
    }

    /// Re-derive cursor position from the selected id (the list reorders on
    /// every mutation); falls back to clamping the cursor.
    pub fn sync_cursor(&mut self) {
        let visible = self.visible_ids();
        if let Some(id) = &self.selected
            && let Some(pos) = visible.iter().position(|v| v == id)
        {
            self.cursor = pos;
            return;
        }
        self.cursor = self.cursor.min(visible.len().saturating_sub(1));
        self.selected = visible.get(self.cursor).cloned();
    }

    /// Move the list cursor and select the note under it
    pub fn select_at_cursor(&mut self) {
        let visible = self.visible_ids();
        self.cursor = self.cursor.min(visible.len().saturating_sub(1));
        self.selected = visible.get(self.cursor).cloned();
    }

    /// Case-insensitive regex for highlighting the active filter
    pub fn active_search_re(&self) -> Option<Regex> {
        let query = self.query();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            at: Instant::now(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            at: Instant::now(),
        });
    }

    /// Record a store mutation: restart the autosave quiet period
    pub fn mark_dirty(&mut self) {
        self.autosave.mark_dirty();
    }

    /// Write the store now. On failure the error is surfaced and the
    /// debounce re-armed so a later write can still succeed.
    pub fn save_now(&mut self, acknowledge: bool) {
        self.autosave.take_pending();
        match save_store(&self.data_dir, &self.store) {
            Ok(()) => {
                if acknowledge {
                    self.set_status("auto-saved");
                }
            }
            Err(e) => {
                self.set_error(e.to_string());
                self.autosave.mark_dirty();
            }
        }
    }

    /// Flush a pending autosave at quit. Unlike the in-loop `save_now`
    /// there is no UI left to surface a failure, so the result goes to
    /// the caller.
    pub fn flush_pending(&mut self) -> Result<(), StoreError> {
        if self.autosave.take_pending() {
            return save_store(&self.data_dir, &self.store);
        }
        Ok(())
    }

    /// Drop stale toasts (errors linger longer)
    pub fn expire_status(&mut self) {
        if let Some(status) = &self.status {
            let ttl = if status.is_error { 8 } else { 3 };
            if status.at.elapsed() >= Duration::from_secs(ttl) {
                self.status = None;
            }
        }
    }
}

/// Run the TUI application
pub fn run(dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = resolve_data_dir(dir);
    let config = load_config(&data_dir)?;

    // A corrupt store degrades to an empty collection; the file is kept
    // aside and the failure surfaced as a status message.
    let (store, load_error) = match load_store(&data_dir) {
        Ok(store) => (store, None),
        Err(e) => (NoteStore::new(), Some(e.to_string())),
    };

    let mut app = App::new(store, config, data_dir);
    if let Some(msg) = load_error {
        app.set_error(msg);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Flush any pending save before exit. The loop is gone, so a failure
    // here is reported only after the terminal is restored.
    let flush = app.flush_pending();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    flush?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Debounced persistence: fires once the quiet period has elapsed
        if app.autosave.take_due() {
            app.save_now(false);
        }
        app.expire_status();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
