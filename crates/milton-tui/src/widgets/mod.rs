//! Widgets for the milton TUI.

mod footer_hints;
mod input_bar;
mod preview;
mod status_bar;
mod swatch_bar;

pub use footer_hints::{hints_for_variant, FooterHints, KeyHint};
pub use input_bar::{InputBar, InputState};
pub use preview::Preview;
pub use status_bar::StatusBar;
pub use swatch_bar::{swatch_list, SwatchBar};
