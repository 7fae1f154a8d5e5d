use crate::catalog::{LengthChoice, ModelChoice, LANGUAGES};
use crate::ui::app::{App, Field, InputMode};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::presenter::{present, ResultView};
use crate::ui::theme::{
    ACCENT, FOCUS_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, SKELETON, STATUS_ERROR, STATUS_OK, TEXT,
};
use crate::ui::upload::UploadState;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SKELETON_TITLE_WIDTH: usize = 16;
const SKELETON_BODY_WIDTH: usize = 48;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, form, results, footer) = layout_regions(frame.area());

    frame.render_widget(Header::widget(), header);

    let form_block = panel_block(" Generate ");
    frame.render_widget(
        Paragraph::new(form_lines(app))
            .wrap(Wrap { trim: false })
            .block(form_block),
        form,
    );

    let results_block = panel_block(" Generated Descriptions ");
    let view = present(app.generation());
    frame.render_widget(
        Paragraph::new(result_lines(&view, app.generation().animation_tick()))
            .wrap(Wrap { trim: false })
            .block(results_block),
        results,
    );

    frame.render_widget(Footer::widget(app.input_mode(), footer), footer);
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Left panel: image, model, languages, length and the generate button.
pub fn form_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let locked = app.controls_locked();
    let selection = app.selection();

    lines.push(section_title(app, Field::Image, "Image"));
    match (app.input_mode(), selection.image(), app.upload()) {
        (InputMode::ImagePath { buffer }, _, _) => {
            lines.push(Line::from(vec![
                Span::styled("  Path: ", Style::default().fg(MUTED_TEXT)),
                Span::styled(format!("{}▏", buffer), Style::default().fg(TEXT)),
            ]));
        }
        (_, Some(url), _) => {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(STATUS_OK)),
                Span::styled(url.to_string(), Style::default().fg(TEXT)),
            ]));
            lines.push(hint("  x: remove image"));
        }
        (_, None, UploadState::Uploading { path }) => {
            lines.push(Line::from(vec![
                Span::styled("  ↑ ", Style::default().fg(STATUS_OK)),
                Span::styled(
                    format!("Uploading {}...", path.display()),
                    Style::default().fg(TEXT),
                ),
            ]));
        }
        (_, None, UploadState::Failed { message, .. }) => {
            lines.push(Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.clone(), Style::default().fg(STATUS_ERROR)),
            ]));
            lines.push(hint("  r: retry  u: pick another file  s: use a sample image"));
        }
        (_, None, UploadState::Idle) => {
            lines.push(Line::from(Span::styled(
                "  Upload product image (PNG, JPG, or WEBP)",
                Style::default().fg(TEXT),
            )));
            lines.push(hint("  u: upload  s: use a sample image"));
        }
    }
    lines.push(Line::from(""));

    lines.push(section_title(app, Field::Model, "Model"));
    lines.push(hint("  Select the Llama 3.2 vision model you want to use."));
    let model_chips = ModelChoice::ALL
        .iter()
        .map(|model| (model.label(), *model == selection.model(), !locked))
        .collect();
    lines.push(chip_row(app, Field::Model, model_chips));
    lines.push(Line::from(""));

    lines.push(section_title(app, Field::Languages, "Languages"));
    lines.push(hint("  Choose up to 3 languages for the product descriptions."));
    let language_chips = LANGUAGES
        .iter()
        .map(|language| {
            (
                language.display_name,
                selection.is_selected(language.code),
                !locked && selection.can_toggle(language.code),
            )
        })
        .collect();
    lines.push(chip_row(app, Field::Languages, language_chips));
    lines.push(Line::from(""));

    lines.push(section_title(app, Field::Length, "Length"));
    lines.push(hint("  Select the length of the product descriptions."));
    let length_chips = LengthChoice::ALL
        .iter()
        .map(|length| (length.label(), *length == selection.length(), !locked))
        .collect();
    lines.push(chip_row(app, Field::Length, length_chips));
    lines.push(Line::from(""));

    lines.push(generate_button(app));
    if let Some(error) = app.last_command_error() {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    lines
}

fn section_title(app: &App, field: Field, title: &'static str) -> Line<'static> {
    let focused = app.focus() == field;
    let marker = if focused { "▸ " } else { "  " };
    let mut style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    if focused {
        style = style.fg(ACCENT);
    }
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(title, style),
    ])
}

fn hint(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

/// One row of toggle chips: `(label, selected, enabled)`.
fn chip_row(app: &App, field: Field, chips: Vec<(&'static str, bool, bool)>) -> Line<'static> {
    let focused = app.focus() == field;
    let cursor = app.cursor(field);
    let mut spans = vec![Span::raw("  ")];

    for (idx, (label, selected, enabled)) in chips.into_iter().enumerate() {
        let mut style = if selected {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else if enabled {
            Style::default().fg(TEXT)
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        if focused && idx == cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn generate_button(app: &App) -> Line<'static> {
    let generation = app.generation();
    let label = if generation.is_loading() {
        format!(" {} Generating... ", spinner(generation.animation_tick()))
    } else {
        " Generate descriptions ".to_string()
    };

    let mut style = if app.can_submit() {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).bg(FOCUS_HIGHLIGHT)
    };
    if app.focus() == Field::Generate {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let marker = if app.focus() == Field::Generate { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(label, style),
    ])
}

/// Right panel contents for a presenter view.
pub fn result_lines(view: &ResultView, tick: u8) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match view {
        ResultView::Empty { message } => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        ResultView::Loading { placeholders } => {
            lines.push(Line::from(Span::styled(
                format!("  {} Generating descriptions...", spinner(tick)),
                Style::default().fg(STATUS_OK),
            )));
            lines.push(Line::from(""));
            for placeholder in placeholders {
                lines.push(skeleton_line(SKELETON_TITLE_WIDTH));
                for _ in 0..placeholder.size.rows() {
                    lines.push(skeleton_line(SKELETON_BODY_WIDTH));
                }
                lines.push(Line::from(""));
            }
        }
        ResultView::Descriptions { blocks } => {
            for block in blocks {
                lines.push(Line::from(vec![
                    Span::styled("  ● ", Style::default().fg(ACCENT)),
                    Span::styled(
                        block.label.clone(),
                        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                    ),
                ]));
                for paragraph in block.description.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", paragraph),
                        Style::default().fg(TEXT),
                    )));
                }
                lines.push(Line::from(""));
            }
        }
        ResultView::Failed { message } => {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(STATUS_ERROR)),
                Span::styled(message.clone(), Style::default().fg(STATUS_ERROR)),
            ]));
            lines.push(Line::from(""));
            lines.push(hint("  g: retry  d: dismiss"));
        }
    }
    lines
}

fn skeleton_line(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", "░".repeat(width)),
        Style::default().fg(SKELETON),
    ))
}
