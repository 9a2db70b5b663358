//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the title bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the progress area: the position/tally line plus the gauge.
pub const PROGRESS_HEIGHT: u16 = 2;

/// Height of the button row (border + label + border).
pub const FOOTER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for notifications and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// How long a notification stays in the status bar.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Event poll interval; notifications expire on these ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);
