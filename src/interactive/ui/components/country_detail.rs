use crate::formatters::format_population;
use crate::interactive::ui::components::{Component, styles::Styles};
use crate::interactive::ui::events::Message;
use crate::schemas::CountryRecord;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Details panel for the committed country
#[derive(Default)]
pub struct CountryDetail {
    country: Option<CountryRecord>,
}

impl CountryDetail {
    pub fn new() -> Self {
        Self { country: None }
    }

    pub fn set_country(&mut self, country: Option<&CountryRecord>) {
        self.country = country.cloned();
    }

    pub fn country(&self) -> Option<&CountryRecord> {
        self.country.as_ref()
    }

    fn field<'a>(label: &'a str, value: String) -> Line<'a> {
        Line::from(vec![Span::styled(label, Styles::label()), Span::raw(value)])
    }
}

impl Component for CountryDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(country) = &self.country else {
            return;
        };

        let lines = vec![
            Self::field("Name: ", country.common_name().to_string()),
            Self::field("Official Name: ", country.official_name().to_string()),
            Self::field(
                "Capital: ",
                country.first_capital().unwrap_or("N/A").to_string(),
            ),
            Self::field("Population: ", format_population(country.population())),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled("Selected Country", Styles::title()))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    // Display only
    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
