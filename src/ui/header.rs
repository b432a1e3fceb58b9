use crate::repository::LoadStatus;
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status_text, status_style) = match app.repository().status() {
            LoadStatus::Loading => ("loading", Style::default().fg(ACCENT)),
            LoadStatus::Error => ("offline", Style::default().fg(STATUS_ERROR)),
            LoadStatus::Idle => ("", text_style),
        };

        let mut spans = vec![
            Span::styled(
                "  Storefront",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(app.route().title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("♥ ", Style::default().fg(FAVORITE)),
            Span::styled(app.favorites().len().to_string(), text_style),
        ];
        if !status_text.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(status_text, status_style));
        }
        if let Some(err) = app.last_command_error() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                err.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
