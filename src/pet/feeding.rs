//! Feeding behavior - hunger drops fast for a fixed number of ticks

use super::idle::IdleState;
use super::pet::Pet;
use super::state::{PetState, Transition};
use crate::simulation::Tick;

/// Ticks a meal lasts before the pet goes back to idling.
pub const FEED_TICKS: Tick = 10;

/// Hunger restored on each feeding tick.
const HUNGER_PER_TICK: i32 = 3;

/// Eating a meal. Entered through [`Pet::feed`]; hands control back to
/// [`IdleState`] once the meal is finished. The transition tick itself does
/// not restore hunger.
#[derive(Debug, Default)]
pub struct FeedingState {
    started_tick: Tick,
}

impl FeedingState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PetState for FeedingState {
    fn enter(&mut self, pet: &mut Pet, tick: Tick) {
        log::info!("{} starts eating (tick {})", pet.name(), tick);
        self.started_tick = tick;
    }

    fn update(&mut self, pet: &mut Pet, _tick_duration: f32, tick: Tick) -> Transition {
        if tick - self.started_tick >= FEED_TICKS {
            return Transition::To(Box::new(IdleState::new()));
        }
        pet.set_hunger(pet.hunger() - HUNGER_PER_TICK);
        log::debug!("{} eats some", pet.name());
        Transition::Stay
    }

    fn leave(&mut self, pet: &mut Pet, _tick: Tick) {
        log::info!("{} finished eating", pet.name());
    }

    fn activity(&self) -> &'static str {
        "eating"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_runs_for_feed_ticks_then_idles() {
        let mut pet = Pet::new("Doki");
        pet.set_hunger(100);
        pet.change_state(Box::new(FeedingState::new()), 5).unwrap();

        // Nine feeding ticks restore 3 hunger each
        for tick in 6..=14 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.hunger(), 100 - 9 * HUNGER_PER_TICK);
        assert_eq!(pet.current_activity(), "eating");

        // Tick 15 is the transition tick: back to idle, hunger untouched
        pet.update_tick(0.5, 15).unwrap();
        assert_eq!(pet.current_activity(), "idling");
        assert_eq!(pet.hunger(), 100 - 9 * HUNGER_PER_TICK);
    }

    #[test]
    fn test_hunger_saturates_at_zero_while_eating() {
        let mut pet = Pet::new("Doki");
        pet.set_hunger(4);
        pet.change_state(Box::new(FeedingState::new()), 0).unwrap();

        pet.update_tick(0.5, 1).unwrap();
        assert_eq!(pet.hunger(), 1);
        pet.update_tick(0.5, 2).unwrap();
        assert_eq!(pet.hunger(), 0);
        pet.update_tick(0.5, 3).unwrap();
        assert_eq!(pet.hunger(), 0);
    }
}
