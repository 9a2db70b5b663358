//! Domain-level input actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent learner intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings;
/// pointer events are mapped by `view::hit_test`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Review
    /// Reveal the answer, or hide it again. Default: Space/Enter
    FlipToggle,
    /// Move to the next card. Default: l/→/n
    NavigateNext,
    /// Move to the previous card. Default: h/←/p
    NavigatePrev,
    /// Rate the current card as known. Default: y/+/↑
    RatePositive,
    /// Rate the current card as needing review. Default: x/-/↓
    RateNegative,

    // Deck
    /// Clear progress and return to the first card. Default: r
    Reset,
    /// Shuffle the deck and start over. Default: s
    Shuffle,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// Parse the action name used in the `[keybindings]` config table.
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "flip" => Some(KeyAction::FlipToggle),
            "next" => Some(KeyAction::NavigateNext),
            "prev" => Some(KeyAction::NavigatePrev),
            "knew_it" => Some(KeyAction::RatePositive),
            "needs_review" => Some(KeyAction::RateNegative),
            "reset" => Some(KeyAction::Reset),
            "shuffle" => Some(KeyAction::Shuffle),
            "quit" => Some(KeyAction::Quit),
            "help" => Some(KeyAction::Help),
            _ => None,
        }
    }

    /// Whether the action drives the review session (as opposed to the app shell).
    pub fn is_session_input(&self) -> bool {
        !matches!(self, KeyAction::Quit | KeyAction::Help)
    }
}
