//! flashdeck
//!
//! Flash card review in the terminal. The library holds the review session
//! engine (deck, session state machine, input dispatcher, progress view)
//! and the terminal front end that drives it.

pub mod config;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod source;
pub mod state;
pub mod view;
