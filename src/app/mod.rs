//! Application state types and entry glue.
//!
//! Holds the list controller together with the terminal-side state around
//! it (cursor, scroll offset, theme, keymap, overlays), and re-exports the
//! event loop as `run`.
//!
pub mod keymap;
pub mod update;
pub mod worker;

use ratatui::style::Color;
use std::time::Instant;

use crate::list::ListController;
use keymap::Keymap;

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub selected_fg: Color,
    pub error_fg: Color,
}

impl Theme {
    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            selected_fg: Color::Rgb(0xa6, 0xe3, 0xa1),  // green
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
        }
    }

    /// Load theme from a key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::mocha();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            if key.is_empty() || val.is_empty() {
                continue;
            }
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    "selected_fg" => theme.selected_fg = color,
                    "error_fg" => theme.error_fg = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or "reset".
    pub fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# contact-directory theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                Color::Reset => "reset".to_string(),
                // Named colors are written as a best-effort hex approximation
                Color::Black => "#000000".to_string(),
                Color::Red => "#FF0000".to_string(),
                Color::Green => "#00FF00".to_string(),
                Color::Yellow => "#FFFF00".to_string(),
                Color::Blue => "#0000FF".to_string(),
                Color::Magenta => "#FF00FF".to_string(),
                Color::Cyan => "#00FFFF".to_string(),
                Color::Gray => "#B3B3B3".to_string(),
                Color::DarkGray => "#4D4D4D".to_string(),
                Color::LightRed => "#FF6666".to_string(),
                Color::LightGreen => "#66FF66".to_string(),
                Color::LightYellow => "#FFFF66".to_string(),
                Color::LightBlue => "#6666FF".to_string(),
                Color::LightMagenta => "#FF66FF".to_string(),
                Color::LightCyan => "#66FFFF".to_string(),
                Color::White => "#FFFFFF".to_string(),
                Color::Indexed(_) => "reset".to_string(),
            }
        }

        let entries = [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("highlight_bg", self.highlight_bg),
            ("selected_fg", self.selected_fg),
            ("error_fg", self.error_fg),
        ];
        for (k, v) in entries {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        }

        std::fs::write(path, buf)
    }

    /// Load from `path` if it exists; otherwise write `mocha` there and return it.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(err) = t.write_file(path) {
            tracing::debug!(path, error = %err, "could not write default theme");
        }
        t
    }
}

/// Overlays drawn above the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    Help { scroll: u16 },
    Info { title: String, message: String },
}

pub struct AppState {
    pub started_at: Instant,
    pub list: ListController,
    /// Highlighted row, as an index into the display order.
    pub cursor: usize,
    /// First visible row of the list.
    pub list_offset: usize,
    pub rows_per_page: usize,
    pub theme: Theme,
    pub keymap: Keymap,
    pub modal: Option<ModalState>,
}

impl AppState {
    pub fn new(theme: Theme, keymap: Keymap) -> Self {
        Self {
            started_at: Instant::now(),
            list: ListController::new(),
            cursor: 0,
            list_offset: 0,
            rows_per_page: 10,
            theme,
            keymap,
            modal: None,
        }
    }

    /// Fit cursor and offset to a viewport of `visible_rows` rows.
    ///
    /// An offset recorded by the last selection toggle wins over the current
    /// one, so the rows on screen stay put while the list re-sorts.
    pub fn sync_viewport(&mut self, visible_rows: usize) {
        if visible_rows > 0 {
            self.rows_per_page = visible_rows;
        }
        if let Some(offset) = self.list.take_scroll_restore() {
            self.list_offset = offset;
        }
        let rows = self.list.contacts().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
        if self.cursor < self.list_offset {
            self.list_offset = self.cursor;
        } else if self.cursor >= self.list_offset + self.rows_per_page {
            self.list_offset = self.cursor + 1 - self.rows_per_page;
        }
        self.list_offset = self
            .list_offset
            .min(rows.saturating_sub(self.rows_per_page));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::mocha(), Keymap::default())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
