use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// A `width` x `height` rect centered in `r`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(r.height)),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(r.width)),
            Constraint::Fill(1),
        ])
        .split(popup_layout[1])[1]
}

/// Keep the tail of `value` so the cursor end stays visible in `width` columns.
pub fn clamp_tail(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        return value.to_string();
    }
    let tail = value
        .chars()
        .skip(len - width.saturating_sub(2))
        .collect::<String>();
    format!("..{tail}")
}
