use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Fields"));
    lines.extend(section_lines(&[
        "Type: Edit the focused field",
        "Backspace: Delete last character",
        "Tab/Down: Next field",
        "Shift+Tab/Up: Previous field",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Colors"));
    lines.extend(section_lines(&[
        "R/G/B: Whole numbers 0-255",
        "Hex: 3 or 6 digits, no '#'",
        "Invalid input shows static",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&["F1: Toggle help", "F5: Reset color", "Esc: Quit"]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
