use std::time::Duration;

use crossterm::event::KeyCode;
use hexsync::color::{
    InvalidInput, Rgb, best_foreground_for, hex_to_rgb, parse_channel, rgb_to_hex_fields,
};
use rand::RngExt;
use tracing::{debug, info};

use super::{AppEvent, Backdrop, InputField};

const IDLE_TICK: Duration = Duration::from_millis(250);
const NOISE_TICK: Duration = Duration::from_millis(16);

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub focus: InputField,
    pub red: String,
    pub green: String,
    pub blue: String,
    pub hex: String,
    pub backdrop: Backdrop,
    pub noise_seed: u64,
    pub status: Option<String>,
    initial: Rgb,
    skip_noise_frame: bool,
}

impl App {
    pub fn new(initial: Rgb) -> Self {
        let mut app = Self {
            running: true,
            show_help: false,
            focus: InputField::Red,
            red: String::new(),
            green: String::new(),
            blue: String::new(),
            hex: String::new(),
            backdrop: Backdrop::Solid(initial),
            noise_seed: 0,
            status: None,
            initial,
            skip_noise_frame: false,
        };
        app.reset();
        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                if self.backdrop == Backdrop::Noise {
                    self.advance_noise();
                }
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    /// How long the event loop may wait for input before the next frame.
    pub fn tick_rate(&self) -> Duration {
        match self.backdrop {
            Backdrop::Noise => NOISE_TICK,
            Backdrop::Solid(_) => IDLE_TICK,
        }
    }

    /// Text color for anything drawn over the backdrop.
    pub fn foreground(&self) -> Rgb {
        match self.backdrop {
            Backdrop::Solid(rgb) => best_foreground_for(rgb),
            Backdrop::Noise => Rgb::WHITE,
        }
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Red => &self.red,
            InputField::Green => &self.green,
            InputField::Blue => &self.blue,
            InputField::Hex => &self.hex,
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Red => &mut self.red,
            InputField::Green => &mut self.green,
            InputField::Blue => &mut self.blue,
            InputField::Hex => &mut self.hex,
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            if matches!(key, KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        match key {
            KeyCode::Esc => {
                info!("quit requested");
                self.running = false;
            }
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(5) => self.reset(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Backspace | KeyCode::Delete => {
                if self.field_mut(self.focus).pop().is_some() {
                    self.sync_from(self.focus);
                }
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.field_mut(self.focus).push(ch);
                self.sync_from(self.focus);
            }
            _ => {}
        }
    }

    /// Restore the fields and backdrop to the start-up color.
    pub fn reset(&mut self) {
        self.set_channel_fields(self.initial);
        self.hex = self.initial.to_hex();
        self.show_color(self.initial);
    }

    fn sync_from(&mut self, edited: InputField) {
        if edited.is_channel() {
            self.sync_from_channels();
        } else {
            self.sync_from_hex();
        }
    }

    fn sync_from_channels(&mut self) {
        match self.parse_channels() {
            Ok(rgb) => self.show_color(rgb),
            Err(err) => self.show_error(&err),
        }
        self.hex = rgb_to_hex_fields(&self.red, &self.green, &self.blue).unwrap_or_default();
    }

    fn sync_from_hex(&mut self) {
        match hex_to_rgb(&self.hex) {
            Ok(rgb) => {
                self.set_channel_fields(rgb);
                self.show_color(rgb);
            }
            Err(err) => self.show_error(&err),
        }
    }

    fn parse_channels(&self) -> Result<Rgb, InvalidInput> {
        Ok(Rgb::new(
            parse_channel(&self.red)?,
            parse_channel(&self.green)?,
            parse_channel(&self.blue)?,
        ))
    }

    fn set_channel_fields(&mut self, rgb: Rgb) {
        self.red = rgb.r.to_string();
        self.green = rgb.g.to_string();
        self.blue = rgb.b.to_string();
    }

    fn show_color(&mut self, rgb: Rgb) {
        debug!(color = %rgb, "backdrop set to solid color");
        self.backdrop = Backdrop::Solid(rgb);
        self.status = None;
    }

    fn show_error(&mut self, err: &InvalidInput) {
        debug!(%err, "input is not a color");
        if self.backdrop != Backdrop::Noise {
            self.skip_noise_frame = false;
            self.noise_seed = rand::rng().random();
        }
        self.backdrop = Backdrop::Noise;
        self.status = Some(format!("Invalid color: {err}"));
    }

    // Only every other tick draws a fresh frame of static.
    fn advance_noise(&mut self) {
        self.skip_noise_frame = !self.skip_noise_frame;
        if self.skip_noise_frame {
            return;
        }
        self.noise_seed = rand::rng().random();
    }
}
