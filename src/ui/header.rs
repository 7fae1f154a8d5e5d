use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Product Description Generator";
pub const SUBTITLE: &str =
    "Upload an image of your product to generate descriptions in multiple languages.";

pub struct Header;

impl Header {
    pub fn widget() -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                TITLE,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(ACCENT)),
            Span::styled(SUBTITLE, Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
