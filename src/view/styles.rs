//! Card and chrome styling.

use ratatui::style::{Color, Modifier, Style};

/// Section headings inside the card body and the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// De-emphasized text (hints, metadata).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors forced on or off, ignoring the environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles for the parts of a rendered card.
///
/// With colors disabled only modifiers (bold, reversed) remain, so the
/// screen stays readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyles {
    /// Question text.
    pub question: Style,
    /// Answer text.
    pub answer: Style,
    /// Explanation body.
    pub explanation: Style,
    /// Code snippet lines.
    pub code: Style,
    /// "completed" badge.
    pub completed: Style,
    /// "needs review" badge.
    pub needs_review: Style,
    /// Footer buttons.
    pub button: Style,
    /// Status bar toasts.
    pub notification: Style,
    /// Progress gauge fill.
    pub gauge: Style,
}

impl CardStyles {
    /// Palette for `config`; monochrome when colors are disabled.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::new().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                question: bold,
                answer: bold.fg(Color::Green),
                explanation: Style::new().fg(Color::White),
                code: Style::new().fg(Color::Yellow),
                completed: Style::new().fg(Color::Green),
                needs_review: Style::new().fg(Color::Red),
                button: Style::new().fg(Color::Cyan),
                notification: bold.fg(Color::Magenta),
                gauge: Style::new().fg(Color::Green).bg(Color::Black),
            }
        } else {
            Self {
                question: bold,
                answer: bold,
                explanation: Style::new(),
                code: Style::new(),
                completed: Style::new(),
                needs_review: Style::new(),
                button: Style::new(),
                notification: Style::new().add_modifier(Modifier::REVERSED),
                gauge: Style::new(),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_no_color_env_any_value_disables() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled(), "Colors should be enabled by default");
    }

    #[test]
    fn card_styles_with_colors_have_answer_color() {
        let styles = CardStyles::with_color_config(ColorConfig::fixed(true));
        assert_eq!(styles.answer.fg, Some(Color::Green));
        assert_eq!(styles.needs_review.fg, Some(Color::Red));
    }

    #[test]
    fn card_styles_without_colors_have_no_foregrounds() {
        let styles = CardStyles::with_color_config(ColorConfig::fixed(false));
        for style in [
            styles.question,
            styles.answer,
            styles.explanation,
            styles.code,
            styles.completed,
            styles.needs_review,
            styles.button,
            styles.notification,
        ] {
            assert!(style.fg.is_none(), "unexpected color in {style:?}");
        }
    }
}
