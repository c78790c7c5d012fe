//! Simulation timing - the fixed-timestep tick clock

mod clock;

pub use clock::{Tick, TickClock};
