//! Idle behavior - the pet slowly gets hungrier

use super::pet::Pet;
use super::state::{PetState, Transition};
use crate::simulation::Tick;

/// Ticks between hunger increases while idling.
pub const HUNGER_INTERVAL_TICKS: Tick = 10;

/// Default behavior between activities. Hunger creeps up one point every
/// [`HUNGER_INTERVAL_TICKS`].
#[derive(Debug, Default)]
pub struct IdleState {
    last_hunger_tick: Tick,
}

impl IdleState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PetState for IdleState {
    fn enter(&mut self, pet: &mut Pet, tick: Tick) {
        log::info!("{} is idle (tick {})", pet.name(), tick);
        self.last_hunger_tick = tick;
    }

    fn update(&mut self, pet: &mut Pet, _tick_duration: f32, tick: Tick) -> Transition {
        if tick - self.last_hunger_tick >= HUNGER_INTERVAL_TICKS {
            self.last_hunger_tick = tick;
            pet.set_hunger(pet.hunger() + 1);
            log::debug!("{} got a bit hungrier", pet.name());
        }
        Transition::Stay
    }

    fn leave(&mut self, pet: &mut Pet, _tick: Tick) {
        log::info!("{} is no longer idle", pet.name());
    }

    fn activity(&self) -> &'static str {
        "idling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunger_accrues_every_interval() {
        let mut pet = Pet::new("Doki");
        let start = pet.hunger();

        // Idle was entered at tick 0 during construction
        for tick in 1..=9 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.hunger(), start);

        pet.update_tick(0.5, 10).unwrap();
        assert_eq!(pet.hunger(), start + 1);

        for tick in 11..=20 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.hunger(), start + 2);
    }

    #[test]
    fn test_interval_restarts_on_enter() {
        let mut pet = Pet::new("Doki");
        let start = pet.hunger();

        // Re-entering idle at tick 7 resets the counter, so the next
        // increase lands at tick 17, not tick 10.
        pet.change_state(Box::new(IdleState::new()), 7).unwrap();
        for tick in 8..=16 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.hunger(), start);

        pet.update_tick(0.5, 17).unwrap();
        assert_eq!(pet.hunger(), start + 1);
    }
}
