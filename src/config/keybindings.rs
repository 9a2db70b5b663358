//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from the `[keybindings]` config table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyBindingError {
    /// Table key is not a known action name.
    #[error("Unknown action `{0}` in [keybindings]")]
    UnknownAction(String),

    /// Key string could not be parsed.
    #[error("Invalid key `{key}` for action `{action}`")]
    InvalidKey {
        /// Action the key was bound to.
        action: String,
        /// The unparseable key string.
        key: String,
    },

    /// The same key is listed under two actions.
    #[error("Key `{key}` is bound to both `{first}` and `{second}`")]
    Conflict {
        /// The key string, as written for the second action.
        key: String,
        /// Action that claimed the key first.
        first: String,
        /// Action that listed it again.
        second: String,
    },
}

/// Maps keyboard events to domain actions.
///
/// Provides default bindings with option to override via configuration.
/// Binding order is remembered so legends list keys the way they were
/// declared.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
    order: Vec<KeyEvent>,
}

impl KeyBindings {
    fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether shifted punctuation ('?', '+') carries
    /// the SHIFT modifier, so a miss with SHIFT on a non-letter retries
    /// without it.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = normalize(key);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::SHIFT) && !c.is_alphabetic() => {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        }
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        let key = normalize(key);
        self.order.retain(|bound| *bound != key);
        self.order.push(key);
        self.bindings.insert(key, action);
    }

    /// Keys currently bound to `action`, in the order they were bound.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        self.order
            .iter()
            .filter(|key| self.bindings.get(key) == Some(&action))
            .copied()
            .collect()
    }

    /// Display labels of the keys bound to `action`, e.g. `["space", "enter"]`.
    pub fn labels_for(&self, action: KeyAction) -> Vec<String> {
        self.keys_for(action).into_iter().map(key_label).collect()
    }

    /// Apply `[keybindings]` overrides on top of these bindings.
    ///
    /// Each listed action loses its default keys and gets exactly the keys
    /// given. Actions not listed keep their defaults. Listing the same key
    /// under two actions is a [`KeyBindingError::Conflict`]. Actions are
    /// processed in name order, so errors are reported deterministically.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, Vec<String>>,
    ) -> Result<Self, KeyBindingError> {
        let mut names: Vec<&String> = overrides.keys().collect();
        names.sort();

        let mut claimed: HashMap<KeyEvent, &String> = HashMap::new();
        let mut resolved = Vec::with_capacity(names.len());

        for name in names {
            let action = KeyAction::from_config_name(name)
                .ok_or_else(|| KeyBindingError::UnknownAction(name.clone()))?;

            let mut parsed = Vec::new();
            for raw in &overrides[name] {
                let key = parse_key(raw).ok_or_else(|| KeyBindingError::InvalidKey {
                    action: name.clone(),
                    key: raw.clone(),
                })?;
                match claimed.get(&key) {
                    Some(other) if *other != name => {
                        return Err(KeyBindingError::Conflict {
                            key: raw.clone(),
                            first: (*other).clone(),
                            second: name.clone(),
                        });
                    }
                    _ => {
                        claimed.insert(key, name);
                    }
                }
                parsed.push(key);
            }
            resolved.push((action, parsed));
        }

        for (action, _) in &resolved {
            self.bindings.retain(|_, bound| *bound != *action);
        }
        self.order.retain(|key| self.bindings.contains_key(key));
        for (action, keys) in resolved {
            for key in keys {
                self.bind(key, action);
            }
        }
        Ok(self)
    }
}

/// Short display label for a key, as used in the status bar and help.
pub fn key_label(key: KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdn".to_string(),
        other => format!("{other:?}").to_lowercase(),
    };

    let mut label = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("alt+");
    }
    // Uppercase letters already show the shift.
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)) {
        label.push_str("shift+");
    }
    label.push_str(&name);
    label
}

/// Parse a key string such as `"space"`, `"ctrl+r"`, `"G"` or `"?"`.
///
/// Uppercase letters imply SHIFT, matching what crossterm reports.
pub fn parse_key(raw: &str) -> Option<KeyEvent> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let (mut modifiers, name) = match raw.rsplit_once('+') {
        // A bare "+" (or "ctrl++") names the plus key itself.
        Some((prefix, "")) if !prefix.is_empty() => (parse_modifiers(prefix.trim_end_matches('+'))?, "+"),
        Some((prefix, name)) if !prefix.is_empty() => (parse_modifiers(prefix)?, name),
        _ => (KeyModifiers::NONE, raw),
    };

    let code = match name.to_lowercase().as_str() {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if c.is_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn parse_modifiers(prefix: &str) -> Option<KeyModifiers> {
    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('+') {
        modifiers |= match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }
    Some(modifiers)
}

/// Drop event kind/state so lookups compare only code and modifiers.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        let defaults = [
            // Flip
            (KeyCode::Char(' '), KeyAction::FlipToggle),
            (KeyCode::Enter, KeyAction::FlipToggle),
            // Navigation
            (KeyCode::Right, KeyAction::NavigateNext),
            (KeyCode::Char('l'), KeyAction::NavigateNext),
            (KeyCode::Char('n'), KeyAction::NavigateNext),
            (KeyCode::Left, KeyAction::NavigatePrev),
            (KeyCode::Char('h'), KeyAction::NavigatePrev),
            (KeyCode::Char('p'), KeyAction::NavigatePrev),
            // Rating
            (KeyCode::Char('y'), KeyAction::RatePositive),
            (KeyCode::Char('+'), KeyAction::RatePositive),
            (KeyCode::Up, KeyAction::RatePositive),
            (KeyCode::Char('x'), KeyAction::RateNegative),
            (KeyCode::Char('-'), KeyAction::RateNegative),
            (KeyCode::Down, KeyAction::RateNegative),
            // Deck controls
            (KeyCode::Char('r'), KeyAction::Reset),
            (KeyCode::Char('s'), KeyAction::Shuffle),
            // Application controls
            (KeyCode::Char('q'), KeyAction::Quit),
            (KeyCode::Char('?'), KeyAction::Help),
        ];
        for (code, action) in defaults {
            bindings.bind(KeyEvent::new(code, KeyModifiers::NONE), action);
        }
        bindings
    }
}
