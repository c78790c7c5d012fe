//! # Digipet - a tiny desktop virtual pet
//!
//! A window shows a pet sprite whose behavior evolves through timed state
//! transitions, driven by a fixed-timestep simulation loop.

pub mod app;
pub mod config;
pub mod pet;
pub mod render;
pub mod simulation;
pub mod ui;

pub use app::App;

/// Common imports for internal use
pub mod prelude {
    pub use crate::pet::{Level, Pet, PetState, Transition};
    pub use crate::simulation::{Tick, TickClock};
    pub use glam::{Vec2, Vec3};
}
