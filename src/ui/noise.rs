use rand::{RngExt, SeedableRng, rngs::StdRng};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Random gray static, reproducible from its seed.
pub struct Noise {
    seed: u64,
}

impl Noise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Widget for Noise {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let level: u8 = rng.random();
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(Color::Rgb(level, level, level));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(seed: u64) -> Buffer {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        Noise::new(seed).render(area, &mut buf);
        buf
    }

    #[test]
    fn same_seed_same_frame() {
        assert_eq!(render(7), render(7));
    }

    #[test]
    fn fills_every_cell_with_gray() {
        let buf = render(42);
        for cell in buf.content() {
            match cell.bg {
                Color::Rgb(r, g, b) => assert!(r == g && g == b),
                other => panic!("unexpected background {other:?}"),
            }
        }
    }
}
