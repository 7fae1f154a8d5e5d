use crate::ui::app::InputMode;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const NORMAL_HINTS: &str =
    " ↑↓: Field │ ←→: Choose │ Space: Toggle │ u: Upload │ s: Sample │ x: Clear │ r: Retry upload │ g: Generate │ d: Dismiss │ q: Quit";
const PATH_HINTS: &str = " Enter: Upload │ Esc: Cancel";

pub struct Footer;

impl Footer {
    pub fn widget(mode: &InputMode, area: Rect) -> Paragraph<'static> {
        let hints = match mode {
            InputMode::Normal => NORMAL_HINTS,
            InputMode::ImagePath { .. } => PATH_HINTS,
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count; hints contain multi-byte separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

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
