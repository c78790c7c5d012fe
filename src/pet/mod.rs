//! The pet - aggregate root, behavior states, and attribute rules

mod feeding;
mod idle;
mod pet;
mod state;

pub use feeding::{FeedingState, FEED_TICKS};
pub use idle::{IdleState, HUNGER_INTERVAL_TICKS};
pub use pet::{Level, Pet, PetError};
pub use state::{PetState, Transition};
