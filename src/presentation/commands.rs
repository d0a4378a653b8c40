use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, code: KeyCode, modifiers: KeyModifiers, primary: bool| {
            let key = KeyEvent::new(code, modifiers);
            if primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, true);
        register(Action::Quit, KeyCode::Char('c'), KeyModifiers::CONTROL, false);
        register(Action::Cancel, KeyCode::Esc, KeyModifiers::NONE, true);

        register(Action::ToggleHelp, KeyCode::Char('?'), KeyModifiers::NONE, true);
        register(Action::ToggleHelp, KeyCode::Char('?'), KeyModifiers::SHIFT, false);
        register(Action::ToggleHelp, KeyCode::F(1), KeyModifiers::NONE, false);

        register(Action::NextEvent, KeyCode::Tab, KeyModifiers::NONE, true);
        register(Action::NextEvent, KeyCode::Right, KeyModifiers::NONE, false);
        register(Action::NextEvent, KeyCode::Char('l'), KeyModifiers::NONE, false);
        register(Action::PreviousEvent, KeyCode::Left, KeyModifiers::NONE, true);
        register(Action::PreviousEvent, KeyCode::BackTab, KeyModifiers::SHIFT, false);
        register(Action::PreviousEvent, KeyCode::BackTab, KeyModifiers::NONE, false);
        register(Action::PreviousEvent, KeyCode::Char('h'), KeyModifiers::NONE, false);

        register(Action::NavigateUp, KeyCode::Up, KeyModifiers::NONE, true);
        register(Action::NavigateUp, KeyCode::Char('k'), KeyModifiers::NONE, false);
        register(Action::NavigateDown, KeyCode::Down, KeyModifiers::NONE, true);
        register(Action::NavigateDown, KeyCode::Char('j'), KeyModifiers::NONE, false);

        register(Action::Select, KeyCode::Enter, KeyModifiers::NONE, true);
        register(Action::Select, KeyCode::Char(' '), KeyModifiers::NONE, false);

        register(Action::RespondAttending, KeyCode::Char('a'), KeyModifiers::NONE, true);
        register(Action::RespondDeclined, KeyCode::Char('n'), KeyModifiers::NONE, true);
        register(Action::AddToCalendar, KeyCode::Char('c'), KeyModifiers::NONE, true);
        register(Action::GetDirections, KeyCode::Char('d'), KeyModifiers::NONE, true);
        register(Action::DownloadInvitation, KeyCode::Char('s'), KeyModifiers::NONE, true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies user keybindings on top of the defaults.
    ///
    /// A user key takes precedence over a default key bound to another action.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &HashMap<String, Action>) -> Self {
        for (spec, action) in overrides {
            let Some(key) = parse_key(spec) else {
                warn!(key = %spec, "Ignoring unrecognised keybinding");
                continue;
            };
            debug!(key = %spec, action = ?action, "Custom keybinding");
            self.input_bindings.retain(|(k, _)| !same_key(k, &key));
            self.input_bindings.insert(0, (key, *action));
            self.display_bindings.insert(*action, key);
        }
        self
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| same_key(k, &key))
            .map(|(_, a)| *a)
    }
}

fn same_key(a: &KeyEvent, b: &KeyEvent) -> bool {
    a.code == b.code && a.modifiers == b.modifiers
}

/// Parses keys written like `q`, `Ctrl+q`, `Alt+Enter`, `Shift+Tab` or `F1`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    // `+` alone or as the final key
    let (mods_part, key_part) = match spec.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", spec),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods_part.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "a" | "meta" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key_part.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            other => {
                let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            }
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
