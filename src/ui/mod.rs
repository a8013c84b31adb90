mod help;
mod helpers;
mod noise;
mod theme;

use ratatui::{
    Frame,
    layout::Rect,
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, Backdrop, FIELDS, InputField};
use help::build_help_text;
use helpers::{centered_rect, clamp_tail};
use noise::Noise;
use theme::Theme;

const PANEL_WIDTH: u16 = 36;
const PANEL_HEIGHT: u16 = 12;
const VALUE_WIDTH: usize = 24;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.backdrop {
        Backdrop::Solid(rgb) => frame.render_widget(
            Block::default().style(Style::default().bg(Theme::rgb(rgb))),
            area,
        ),
        Backdrop::Noise => frame.render_widget(Noise::new(app.noise_seed), area),
    }

    render_panel(frame, app, centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area));

    if app.show_help {
        render_help_popup(frame);
    }
}

fn render_panel(frame: &mut Frame, app: &App, area: Rect) {
    let fg = Theme::rgb(app.foreground());
    let text_style = Style::default().fg(fg);

    let mut lines = vec![
        Line::from(Span::styled(
            "hexsync",
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(FIELDS.iter().map(|field| field_line(app, *field, text_style)));
    lines.push(Line::from(""));

    let status = app.status.as_deref().unwrap_or("");
    lines.push(Line::from(Span::styled(
        status.to_string(),
        text_style.add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(Span::styled(
        "Tab: Next  F1: Help  Esc: Quit",
        text_style.add_modifier(Modifier::DIM),
    )));

    // no background, so the backdrop shows through
    let panel = Paragraph::new(Text::from(lines))
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(text_style),
        );
    frame.render_widget(panel, area);
}

fn field_line(app: &App, field: InputField, base: Style) -> Line<'static> {
    let focused = app.focus == field;
    let mut value = clamp_tail(app.field(field), VALUE_WIDTH);
    let value_style = if focused {
        value.push('_');
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    };

    Line::from(vec![
        Span::styled(
            if focused { "> " } else { "  " },
            base.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<5}", field.label()), base),
        Span::styled(value, value_style),
    ])
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(44, 20, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(build_help_text())
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use crossterm::event::KeyCode;
    use hexsync::color::Rgb;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
        let wanted: Vec<String> = text.chars().map(String::from).collect();
        let area = buf.area;
        for y in area.top()..area.bottom() {
            let row: Vec<&str> = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            if let Some(x) = row.windows(wanted.len()).position(|w| w == wanted.as_slice()) {
                return Some((x as u16, y));
            }
        }
        None
    }

    #[test]
    fn solid_backdrop_fills_the_screen() {
        let app = App::new(Rgb::new(63, 81, 181));
        let buf = render(&app);
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(63, 81, 181));
        assert_eq!(buf[(59, 19)].bg, Color::Rgb(63, 81, 181));

        let (x, y) = find_text(&buf, "3F51B5").expect("hex value is drawn");
        assert_eq!(buf[(x, y)].fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(x, y)].bg, Color::Rgb(63, 81, 181));
    }

    #[test]
    fn light_backdrop_uses_black_text() {
        let app = App::new(Rgb::WHITE);
        let buf = render(&app);
        let (x, y) = find_text(&buf, "FFFFFF").expect("hex value is drawn");
        assert_eq!(buf[(x, y)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn invalid_input_draws_static() {
        let mut app = App::new(Rgb::new(63, 81, 181));
        app.update(AppEvent::KeyPress(KeyCode::BackTab));
        app.update(AppEvent::KeyPress(KeyCode::Char('x')));
        let buf = render(&app);

        match buf[(0, 0)].bg {
            Color::Rgb(r, g, b) => assert!(r == g && g == b),
            other => panic!("unexpected background {other:?}"),
        }
        assert!(find_text(&buf, "Invalid color").is_some());
    }

    #[test]
    fn help_popup_is_drawn() {
        let mut app = App::new(Rgb::BLACK);
        app.update(AppEvent::KeyPress(KeyCode::F(1)));
        let buf = render(&app);
        assert!(find_text(&buf, "Key bindings").is_some());
    }
}
