//! Terminal host for the components.
//!
//! Plays the role of the rendering framework: it turns key presses into
//! change and submit events, asks each component to render, and draws the
//! result with ratatui. A line-oriented plain mode drives the same
//! components from any reader.

use crate::components::{CreateTodo, FormError, FormView, ListItem, Todos};
use crate::config::FormConfig;
use crate::events::{ChangeEvent, SubmitEvent};
use crate::reducer::TodoStore;
use crate::types::TodoAction;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem as ListRow, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// How long to wait for input before checking the store for updates
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the event loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep running
    Continue,
    /// Leave the event loop
    Quit,
}

/// Everything drawn in one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppView {
    /// The creation form
    pub form: FormView,
    /// The list view
    pub items: Vec<ListItem>,
    /// Last submit error, if any
    pub status: Option<String>,
}

/// The root of the component tree
///
/// Both components get their own handle to the same store.
pub struct TodoApp {
    form: CreateTodo,
    list: Todos,
    updates: broadcast::Receiver<TodoAction>,
    status: Option<String>,
}

impl TodoApp {
    /// Builds the component tree over `store`
    #[must_use]
    pub fn new(store: TodoStore, config: FormConfig) -> Self {
        Self {
            updates: store.subscribe_actions(),
            form: CreateTodo::new(store.clone(), config),
            list: Todos::new(store),
            status: None,
        }
    }

    /// Render both components
    pub async fn render(&self) -> AppView {
        AppView {
            form: self.form.render(),
            items: self.list.render().await,
            status: self.status.clone(),
        }
    }

    /// Returns true if the store changed since the last call
    pub fn take_store_updates(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.updates.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => changed = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => return changed,
            }
        }
    }

    /// Translate a key press into component events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.form.buffer().text.clone();
                value.push(c);
                self.form.on_change(ChangeEvent::new(value));
            },
            KeyCode::Backspace => {
                let mut value = self.form.buffer().text.clone();
                if value.pop().is_some() {
                    self.form.on_change(ChangeEvent::new(value));
                }
            },
            KeyCode::Enter => {
                let mut event = SubmitEvent::new();
                let result = self.form.on_submit(&mut event).await;
                self.record(result);
            },
            _ => {},
        }

        Flow::Continue
    }

    /// Type a whole line into the field, then submit it
    ///
    /// # Errors
    ///
    /// Returns the form's submit error.
    pub async fn type_line(&mut self, line: &str) -> Result<(), FormError> {
        self.form.on_change(ChangeEvent::new(line));
        let result = self.form.on_submit(&mut SubmitEvent::new()).await;
        self.record(result.clone());
        result
    }

    fn record(&mut self, result: Result<(), FormError>) {
        self.status = result.err().map(|error| error.to_string());
    }
}

/// Draw one frame
pub fn draw(frame: &mut Frame<'_>, view: &AppView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.size());

    let field = Paragraph::new(view.form.value.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view.form.label),
    );
    frame.render_widget(field, chunks[0]);

    let width = u16::try_from(view.form.value.chars().count()).unwrap_or(u16::MAX);
    frame.set_cursor(
        chunks[0].x.saturating_add(1).saturating_add(width),
        chunks[0].y.saturating_add(1),
    );

    if let Some(echo) = &view.form.echo {
        frame.render_widget(
            Paragraph::new(echo.as_str()).style(Style::default().add_modifier(Modifier::DIM)),
            chunks[1],
        );
    }

    let status = match &view.status {
        Some(error) => Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(format!("[Enter] {}  [Esc] quit", view.form.submit_label)),
    };
    frame.render_widget(status, chunks[2]);

    let rows: Vec<ListRow<'_>> = view
        .items
        .iter()
        .map(|item| ListRow::new(item.text.as_str()))
        .collect();
    frame.render_widget(
        List::new(rows).block(Block::default().borders(Borders::ALL).title("todos")),
        chunks[3],
    );
}

/// Run the interactive terminal UI until the user quits
///
/// The terminal is restored even if the event loop fails.
///
/// # Errors
///
/// Returns terminal I/O errors.
pub async fn run(store: TodoStore, config: FormConfig) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, TodoApp::new(store, config)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, mut app: TodoApp) -> anyhow::Result<()> {
    let mut view = app.render().await;

    loop {
        terminal.draw(|frame| draw(frame, &view))?;

        let mut dirty = false;
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key).await == Flow::Quit {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
                dirty = true;
            }
        }

        if app.take_store_updates() || dirty {
            view = app.render().await;
        }
    }
}

/// Submit every input line as a todo, then print the list
///
/// Submit errors and lines that are not valid UTF-8 are reported inline and
/// do not stop the run.
///
/// # Errors
///
/// Returns read or write errors.
pub async fn run_plain<R, W>(
    store: TodoStore,
    config: FormConfig,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = TodoApp::new(store, config);
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw).await? == 0 {
            break;
        }
        let line = raw.strip_suffix(b"\n").unwrap_or(raw.as_slice());
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        let outcome = match std::str::from_utf8(line) {
            Ok(text) => app.type_line(text).await.map_err(anyhow::Error::from),
            Err(error) => Err(error.into()),
        };
        if let Err(error) = outcome {
            writeln!(out, "! {error}")?;
        }
    }

    for item in app.render().await.items {
        writeln!(out, "{}", item.text)?;
    }
    out.flush()?;

    Ok(())
}
