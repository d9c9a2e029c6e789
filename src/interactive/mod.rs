use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::SearchOptions;
use crate::api::{RestCountries, SuggestionClient};

pub mod application;
pub mod constants;
pub mod debounce;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use self::application::search_service::SearchService;
use self::constants::*;
use self::debounce::Debouncer;
use self::domain::models::{SearchOutcome, SearchRequest, SearchResponse};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, is_exit_prompt},
    events::Message,
    renderer::Renderer,
};

/// Terminal front end: owns the state machine, the debounce timer and the
/// lookup worker, and pumps terminal events into them.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    search_sender: Option<Sender<SearchRequest>>,
    search_receiver: Option<Receiver<SearchResponse>>,
    debouncer: Debouncer,
    last_ctrl_c_press: Option<Instant>,
    should_quit: bool,
}

impl InteractiveSearch {
    pub fn new(options: SearchOptions) -> Result<Self> {
        let lookup = RestCountries::new(options.api_url.clone(), options.request_timeout)?;
        let client = SuggestionClient::new(Arc::new(lookup));
        Ok(Self::with_client(client, options.debounce_ms))
    }

    pub fn with_client(client: SuggestionClient, debounce_ms: u64) -> Self {
        Self {
            state: AppState::new(debounce_ms),
            renderer: Renderer::new(),
            search_service: Arc::new(SearchService::new(client)),
            search_sender: None,
            search_receiver: None,
            debouncer: Debouncer::new(),
            last_ctrl_c_press: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, initial_query: Option<&str>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start_worker();

        if let Some(query) = initial_query.filter(|q| !q.is_empty()) {
            self.handle_message(Message::QueryChanged(query.to_string()));
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            self.next_frame(terminal, Instant::now())?;

            // Wake up in time for a pending debounce deadline
            let mut timeout = Duration::from_millis(EVENT_POLL_INTERVAL_MS);
            if let Some(remaining) = self.debouncer.remaining(Instant::now()) {
                timeout = timeout.min(remaining);
            }

            if poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_input(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Apply pending state, then draw it. Mouse hit-testing uses the areas of
    /// this frame, so nothing may change state between the draw and the next
    /// input event.
    pub(crate) fn next_frame<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        now: Instant,
    ) -> Result<()> {
        self.tick(now);
        terminal
            .draw(|f| self.draw(f))
            .map_err(|e| anyhow::anyhow!("Failed to draw frame: {e}"))?;
        Ok(())
    }

    /// Drain finished lookups, fire the debounce timer and expire the exit prompt
    pub(crate) fn tick(&mut self, now: Instant) {
        let mut responses = Vec::new();
        if let Some(receiver) = &self.search_receiver {
            while let Ok(response) = receiver.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.handle_message(Message::SearchCompleted(response));
        }

        if self.debouncer.poll(now) {
            self.handle_message(Message::DebounceElapsed);
        }

        if let Some(last_press) = self.last_ctrl_c_press {
            if now.duration_since(last_press) >= Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                self.last_ctrl_c_press = None;
                if is_exit_prompt(&self.state.ui.message) {
                    self.handle_message(Message::ClearMessage);
                }
            }
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::ShowMessage(EXIT_PROMPT.to_string()));
            return;
        }

        if is_exit_prompt(&self.state.ui.message) {
            self.last_ctrl_c_press = None;
            self.handle_message(Message::ClearMessage);
        }

        let message = match key.code {
            KeyCode::Esc => Some(Message::Clear),
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            KeyCode::Char('n') | KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let message = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.renderer.message_at(mouse.column, mouse.row)
            }
            MouseEventKind::ScrollDown => Some(Message::SelectNext),
            MouseEventKind::ScrollUp => Some(Message::SelectPrevious),
            _ => None,
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleSearch(delay) => {
                self.debouncer
                    .schedule(Instant::now(), Duration::from_millis(delay));
            }
            Command::ExecuteSearch(request) => {
                let id = request.id;
                tracing::debug!(id, term = %request.term, "Dispatching lookup");
                let sent = match &self.search_sender {
                    Some(sender) => sender.send(request).is_ok(),
                    None => false,
                };
                if !sent {
                    tracing::warn!(id, "Lookup worker is not running");
                    self.handle_message(Message::SearchCompleted(SearchResponse {
                        id,
                        outcome: SearchOutcome::Failed,
                    }));
                }
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    pub(crate) fn start_worker(&mut self) {
        let (tx, rx) = self.start_search_worker();
        self.search_sender = Some(tx);
        self.search_receiver = Some(rx);
    }

    fn start_search_worker(&self) -> (Sender<SearchRequest>, Receiver<SearchResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<SearchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<SearchResponse>();
        let search_service = self.search_service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let response = search_service.search(request);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        (request_tx, response_rx)
    }

    pub(crate) fn draw(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn debounce_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}
