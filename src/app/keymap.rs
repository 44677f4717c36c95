//! Keybinding configuration: parse `keybinds.conf`, provide defaults, and map keys to actions.
//!
//! The file format is one binding per line, `<Action> = <KeySpec>`. Bindings
//! in the file are layered over the defaults.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Semantic keyboard actions that can be bound to key combinations.
///
/// Several keys may map to the same action (e.g. both `j` and Down move down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the cursor up one row.
    MoveUp,
    /// Move the cursor down one row.
    MoveDown,
    /// Move the cursor up one screen.
    PageUp,
    /// Move the cursor down one screen.
    PageDown,
    /// Jump to the first row.
    Home,
    /// Jump to the last row.
    End,
    /// Select or deselect the contact under the cursor.
    ToggleSelect,
    /// Fetch the next page of contacts.
    LoadMore,
    /// Re-run the fetch that failed.
    Retry,
    /// Show the email link of the contact under the cursor.
    OpenEmail,
    /// Display the help overlay.
    OpenHelp,
    /// Swallow the key.
    Ignore,
}

const ALL_ACTIONS: [KeyAction; 13] = [
    KeyAction::Quit,
    KeyAction::MoveUp,
    KeyAction::MoveDown,
    KeyAction::PageUp,
    KeyAction::PageDown,
    KeyAction::Home,
    KeyAction::End,
    KeyAction::ToggleSelect,
    KeyAction::LoadMore,
    KeyAction::Retry,
    KeyAction::OpenEmail,
    KeyAction::OpenHelp,
    KeyAction::Ignore,
];

/// Mapping from `(KeyModifiers, KeyCode)` pairs to [`KeyAction`]s.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Arrow keys plus vim-style `j`/`k`, Space/Enter to select, `m` for more,
    /// `r` to retry, `e` for email, `?` for help, `q` to quit.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Esc), KeyAction::Ignore);
        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, PageUp), KeyAction::PageUp);
        bindings.insert((M::NONE, PageDown), KeyAction::PageDown);
        bindings.insert((M::NONE, Home), KeyAction::Home);
        bindings.insert((M::NONE, End), KeyAction::End);
        bindings.insert((M::NONE, Char('g')), KeyAction::Home);
        // Capital G arrives with SHIFT on some terminals and bare on others
        bindings.insert((M::NONE, Char('G')), KeyAction::End);
        bindings.insert((M::SHIFT, Char('G')), KeyAction::End);
        bindings.insert((M::NONE, Char(' ')), KeyAction::ToggleSelect);
        bindings.insert((M::NONE, Enter), KeyAction::ToggleSelect);
        bindings.insert((M::NONE, Char('m')), KeyAction::LoadMore);
        bindings.insert((M::NONE, Char('r')), KeyAction::Retry);
        bindings.insert((M::NONE, Char('e')), KeyAction::OpenEmail);
        bindings.insert((M::NONE, Char('?')), KeyAction::OpenHelp);
        bindings.insert((M::SHIFT, Char('?')), KeyAction::OpenHelp);
        Self { bindings }
    }

    /// Load a keymap from `path`, or write the defaults there if it does not exist.
    pub fn load_or_init(path: &str) -> Self {
        let p = std::path::Path::new(path);
        if p.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(err) = km.write_file(path) {
            debug!(path, error = %err, "could not write default keybinds");
        }
        km
    }

    /// Load a keymap from a configuration file, layered over the defaults.
    ///
    /// Returns `None` if the file cannot be read. Lines that do not parse are skipped.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    /// Parse keymap file contents, layered over the defaults.
    pub fn parse(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let lhs = parts.next().map(|s| s.trim()).unwrap_or("");
            let rhs = parts.next().map(|s| s.trim()).unwrap_or("");
            if lhs.is_empty() || rhs.is_empty() {
                continue;
            }
            if let (Some(action), Some(key)) = (parse_action(lhs), parse_key(rhs)) {
                map.bindings.insert(key, action);
            }
        }
        map
    }

    /// Write the current bindings to `path`, grouped by action.
    pub fn write_file(&self, path: &str) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# contact-directory keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>\n");
        buf.push_str("# KeySpec examples: q, Ctrl+c, Enter, Space, Esc, Up, Down, PageUp, PageDown, Home, End, j, k\n");
        buf.push_str("# Actions: ");
        let names: Vec<&str> = ALL_ACTIONS.iter().map(|a| format_action(*a)).collect();
        buf.push_str(&names.join(", "));
        buf.push_str("\n\n");

        for action in ALL_ACTIONS {
            for key in self.keys_for(action) {
                let _ = writeln!(&mut buf, "{} = {}", format_action(action), key);
            }
        }

        std::fs::write(path, buf)
    }

    /// Resolve a key event to its action, if bound.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Keys bound to `action`, formatted and sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((mods, code), _)| Self::format_key(*mods, *code))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// Format a key (modifiers + code) into a spec like "Ctrl+c" or "PageUp".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Home => "Home".to_string(),
            End => "End".to_string(),
            Char(' ') => "Space".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let mut rest = s;
    let mut mods = KeyModifiers::NONE;
    if let Some(after) = s.strip_prefix("Ctrl+") {
        mods |= KeyModifiers::CONTROL;
        rest = after;
    }
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Space" => Char(' '),
        "Up" => Up,
        "Down" => Down,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        "Home" => Home,
        "End" => End,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    ALL_ACTIONS
        .into_iter()
        .find(|a| format_action(*a) == s.trim())
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::MoveUp => "MoveUp",
        KeyAction::MoveDown => "MoveDown",
        KeyAction::PageUp => "PageUp",
        KeyAction::PageDown => "PageDown",
        KeyAction::Home => "Home",
        KeyAction::End => "End",
        KeyAction::ToggleSelect => "ToggleSelect",
        KeyAction::LoadMore => "LoadMore",
        KeyAction::Retry => "Retry",
        KeyAction::OpenEmail => "OpenEmail",
        KeyAction::OpenHelp => "OpenHelp",
        KeyAction::Ignore => "Ignore",
    }
}
