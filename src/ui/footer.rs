use crate::ui::app::App;
use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    fn hints(app: &App) -> &'static str {
        match app.route() {
            Route::List if app.list_state().search_mode => {
                " Type to search │ Enter: Apply │ Esc: Done"
            }
            Route::List => {
                " /: Search │ c/C: Category │ s: Sort │ Space: ♥ │ Enter: Open │ f: Favorites │ r: Reload │ q: Quit"
            }
            Route::Product(_) => " +/-: Quantity │ Space: ♥ │ f: Favorites │ Esc: Back │ q: Quit",
            Route::Favorites => " Enter: Open │ d: Remove │ Esc: Back │ q: Quit",
        }
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(app);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
