//! UI system - pet status panel and toasts

pub mod hud;
pub mod ui_state;

pub use hud::{Hud, PetAction};
pub use ui_state::UiState;
