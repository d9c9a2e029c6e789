#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::api::{CountryLookup, FetchError};
    use crate::schemas::CountryRecord;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::backend::TestBackend;
    use ratatui::{Terminal, buffer::Buffer};
    use std::sync::Mutex;

    const DEBOUNCE_MS: u64 = 1000;

    struct FakeLookup {
        terms: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                terms: Mutex::new(Vec::new()),
            })
        }

        fn terms(&self) -> Vec<String> {
            self.terms.lock().unwrap().clone()
        }
    }

    impl CountryLookup for FakeLookup {
        fn search_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, FetchError> {
            self.terms.lock().unwrap().push(term.to_string());
            match term {
                "fail" => Err(FetchError::Status { status: 500 }),
                "none" => Ok(Vec::new()),
                "ger" => Ok(vec![CountryRecord::new(
                    "Germany",
                    "Federal Republic of Germany",
                    vec!["Berlin".to_string()],
                    83_240_525,
                )]),
                _ => Ok(vec![
                    CountryRecord::new(
                        "France",
                        "French Republic",
                        vec!["Paris".to_string()],
                        67_391_582,
                    ),
                    CountryRecord::new(
                        "French Polynesia",
                        "French Polynesia",
                        vec!["Papeetē".to_string()],
                        280_904,
                    ),
                ]),
            }
        }
    }

    fn create_app(lookup: Arc<FakeLookup>) -> InteractiveSearch {
        let mut app = InteractiveSearch::with_client(SuggestionClient::new(lookup), DEBOUNCE_MS);
        app.start_worker();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn type_text(app: &mut InteractiveSearch, text: &str) {
        for ch in text.chars() {
            app.handle_input(key(KeyCode::Char(ch)));
        }
    }

    /// Let the debounce interval pass
    fn settle(app: &mut InteractiveSearch) {
        app.tick(Instant::now() + Duration::from_millis(DEBOUNCE_MS + 1));
    }

    fn wait_for_lookup(app: &mut InteractiveSearch) {
        for _ in 0..400 {
            app.tick(Instant::now());
            if !app.state().search.is_loading {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("lookup did not complete");
    }

    fn draw(app: &mut InteractiveSearch, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    /// Text between the side borders of one screen row
    fn row_text(buffer: &Buffer, row: u16) -> String {
        let width = buffer.area.width;
        (1..width.saturating_sub(1))
            .map(|col| buffer[(col, row)].symbol())
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_typing_is_debounced_into_one_lookup() {
        let lookup = FakeLookup::new();
        let mut app = create_app(lookup.clone());

        type_text(&mut app, "fra");
        assert!(app.debounce_pending());

        app.tick(Instant::now());
        assert!(!app.state().search.is_loading);
        assert!(lookup.terms().is_empty());

        settle(&mut app);
        assert!(app.state().search.is_loading);
        wait_for_lookup(&mut app);

        assert_eq!(lookup.terms(), vec!["fra".to_string()]);
        assert_eq!(app.state().search.suggestions.len(), 2);
    }

    #[test]
    fn test_suggestions_are_rendered() {
        let mut app = create_app(FakeLookup::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fra");
        settle(&mut app);
        draw(&mut app, &mut terminal);
        assert!(buffer_contains(terminal.backend().buffer(), "[searching...]"));

        wait_for_lookup(&mut app);
        draw(&mut app, &mut terminal);

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains(buffer, "Suggestions (2)"));
        assert!(buffer_contains(buffer, "France"));
        assert!(buffer_contains(buffer, "French Polynesia"));
        assert!(!buffer_contains(buffer, "Selected Country"));
    }

    #[test]
    fn test_clicking_suggestion_commits_country() {
        let mut app = create_app(FakeLookup::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fra");
        settle(&mut app);
        wait_for_lookup(&mut app);
        draw(&mut app, &mut terminal);

        // Search bar takes rows 0-2, the list border row 3, first item row 4
        app.handle_mouse(click(2, 4));

        let committed = app.state().search.committed_selection.clone();
        assert_eq!(committed.map(|c| c.common_name().to_string()), Some("France".to_string()));
        assert_eq!(app.state().search.raw_text, "");

        draw(&mut app, &mut terminal);
        let buffer = terminal.backend().buffer();
        assert!(buffer_contains(buffer, "Selected Country"));
        assert!(buffer_contains(buffer, "Official Name: French Republic"));
        assert!(buffer_contains(buffer, "Capital: Paris"));
        assert!(buffer_contains(buffer, "Population: 67,391,582"));
    }

    #[test]
    fn test_click_resolves_against_drawn_list() {
        let lookup = FakeLookup::new();
        let mut app = create_app(lookup.clone());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fra");
        settle(&mut app);
        wait_for_lookup(&mut app);
        app.next_frame(&mut terminal, Instant::now()).unwrap();
        assert_eq!(row_text(terminal.backend().buffer(), 4), "France");

        // Replace the text and let the new lookup finish in the background
        app.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_text(&mut app, "ger");
        settle(&mut app);
        for _ in 0..400 {
            if lookup.terms().contains(&"ger".to_string()) {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        thread::sleep(Duration::from_millis(50));

        // Same order as the event loop: apply, draw, then the click arrives
        app.next_frame(&mut terminal, Instant::now()).unwrap();
        let shown = row_text(terminal.backend().buffer(), 4);
        app.handle_mouse(click(2, 4));

        assert_eq!(shown, "Germany");
        let committed = app.state().search.committed_selection.clone();
        assert_eq!(committed.map(|c| c.common_name().to_string()), Some(shown));
    }

    #[test]
    fn test_lookup_without_worker_fails_fast() {
        let mut app = InteractiveSearch::with_client(
            SuggestionClient::new(FakeLookup::new()),
            DEBOUNCE_MS,
        );

        type_text(&mut app, "fra");
        settle(&mut app);

        assert!(!app.state().search.is_loading);
        assert_eq!(
            app.state().search.error_message.as_deref(),
            Some(FETCH_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_enter_fills_input_with_highlighted_name() {
        let lookup = FakeLookup::new();
        let mut app = create_app(lookup.clone());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fra");
        settle(&mut app);
        wait_for_lookup(&mut app);

        app.handle_input(key(KeyCode::Down));
        app.handle_input(key(KeyCode::Down));
        app.handle_input(key(KeyCode::Enter));

        assert_eq!(app.state().search.raw_text, "French Polynesia");
        assert!(app.state().search.committed_selection.is_none());

        draw(&mut app, &mut terminal);
        assert_eq!(app.renderer.get_search_bar_mut().query(), "French Polynesia");

        // The filled text is looked up again once it settles
        settle(&mut app);
        wait_for_lookup(&mut app);
        assert_eq!(
            lookup.terms(),
            vec!["fra".to_string(), "French Polynesia".to_string()]
        );
    }

    #[test]
    fn test_failed_lookup_shows_error() {
        let mut app = create_app(FakeLookup::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fail");
        settle(&mut app);
        wait_for_lookup(&mut app);
        draw(&mut app, &mut terminal);

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains(buffer, "Failed to fetch suggestions"));
        assert!(buffer_contains(buffer, "Suggestions (0)"));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut app = create_app(FakeLookup::new());

        type_text(&mut app, "none");
        settle(&mut app);
        wait_for_lookup(&mut app);

        assert!(app.state().search.suggestions.is_empty());
        assert!(app.state().search.error_message.is_none());
    }

    #[test]
    fn test_clear_button_resets_everything() {
        let lookup = FakeLookup::new();
        let mut app = create_app(lookup.clone());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        type_text(&mut app, "fra");
        settle(&mut app);
        wait_for_lookup(&mut app);
        draw(&mut app, &mut terminal);
        app.handle_mouse(click(2, 4));
        draw(&mut app, &mut terminal);

        // Clear button is the rightmost 9 columns of the search bar
        app.handle_mouse(click(55, 1));
        assert!(app.state().search.committed_selection.is_none());

        settle(&mut app);
        assert!(app.state().search.suggestions.is_empty());
        assert!(!app.state().search.is_loading);
        // Empty text never reaches the lookup
        assert_eq!(lookup.terms(), vec!["fra".to_string()]);

        draw(&mut app, &mut terminal);
        let buffer = terminal.backend().buffer();
        assert!(!buffer_contains(buffer, "Selected Country"));
        assert!(buffer_contains(buffer, "Type a country name"));
    }

    #[test]
    fn test_escape_clears_input() {
        let mut app = create_app(FakeLookup::new());

        type_text(&mut app, "fra");
        app.handle_input(key(KeyCode::Esc));

        assert_eq!(app.state().search.raw_text, "");
        settle(&mut app);
        assert!(!app.state().search.is_loading);
    }

    #[test]
    fn test_scroll_wheel_moves_highlight() {
        let mut app = create_app(FakeLookup::new());

        type_text(&mut app, "fra");
        settle(&mut app);
        wait_for_lookup(&mut app);

        let scroll = |kind| MouseEvent {
            kind,
            column: 2,
            row: 4,
            modifiers: KeyModifiers::empty(),
        };
        app.handle_mouse(scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.state().search.selected_index, Some(0));
        app.handle_mouse(scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.state().search.selected_index, None);
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut app = create_app(FakeLookup::new());

        app.handle_input(ctrl_c());
        assert_eq!(app.state().ui.message.as_deref(), Some(EXIT_PROMPT));
        assert!(!app.should_quit());

        app.handle_input(ctrl_c());
        assert!(app.should_quit());
    }

    #[test]
    fn test_other_key_dismisses_exit_prompt() {
        let mut app = create_app(FakeLookup::new());

        app.handle_input(ctrl_c());
        app.handle_input(key(KeyCode::Char('f')));

        assert!(app.state().ui.message.is_none());
        assert_eq!(app.state().search.raw_text, "f");

        // The earlier press no longer counts towards a double press
        app.handle_input(ctrl_c());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_exit_prompt_expires() {
        let mut app = create_app(FakeLookup::new());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        app.handle_input(ctrl_c());
        draw(&mut app, &mut terminal);
        assert!(buffer_contains(terminal.backend().buffer(), EXIT_PROMPT));

        app.tick(Instant::now() + Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS + 1));
        assert!(app.state().ui.message.is_none());

        draw(&mut app, &mut terminal);
        assert!(!buffer_contains(terminal.backend().buffer(), EXIT_PROMPT));
    }
}
