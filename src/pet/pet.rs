//! Pet aggregate - owns the attributes and routes ticks to the active state

use std::fmt;

use glam::{Vec2, Vec3};
use thiserror::Error;

use super::feeding::FeedingState;
use super::idle::IdleState;
use super::state::{PetState, Transition};
use crate::simulation::Tick;

const MIN_HUNGER: i32 = 0;
const MAX_HUNGER: i32 = 100;

/// Ticks a hurt pet needs before the hurt flash clears.
const HURT_RECOVERY_TICKS: Tick = 1;

/// Tint shown while the pet is hurting.
const HURT_TINT: Vec3 = Vec3::new(0.8, 0.5, 0.5);

/// Growth stage. Fixed at construction; no level-up rule exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Egg,
    Puppy,
    Child,
    Adult,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Egg => "Egg",
            Level::Puppy => "Puppy",
            Level::Child => "Child",
            Level::Adult => "Adult",
        }
    }

    /// Stable index for per-level resources (sprite textures).
    pub fn index(self) -> usize {
        match self {
            Level::Egg => 0,
            Level::Puppy => 1,
            Level::Child => 2,
            Level::Adult => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the state-transition protocol.
#[derive(Debug, Error)]
pub enum PetError {
    /// A transition was requested while the state slot was already vacated
    /// by an in-flight transition (for example from within `enter`/`leave`).
    /// The pet is left exactly as it was before the call.
    #[error("state transition already in progress")]
    TransitionInProgress,
}

/// The pet itself: simulation attributes, presentation attributes, and
/// exactly one live behavior state.
///
/// The state lives in a single-owner slot; it is only ever replaced through
/// [`Pet::change_state`], which tears the old state down (`leave`, drop)
/// before the new one is entered. The slot is an `Option` purely so the
/// state can be moved out for the duration of a call that also needs
/// `&mut Pet`; outside those calls it is always occupied.
pub struct Pet {
    name: String,
    hunger: i32,
    experience: i32,
    level: Level,

    is_hurting: bool,
    hurt_start_tick: Tick,

    // Presentation attributes, read by the renderer each frame
    position: Vec2,
    size: Vec2,
    rotation: f32,
    color_tint: Vec3,
    anim_time: f32,
    anchor: Vec2,

    state: Option<Box<dyn PetState>>,
}

impl Pet {
    /// Sprite edge length in pixels.
    pub const DEFAULT_SIZE: f32 = 64.0;

    /// Create a pet idling at tick 0 with a half-full belly.
    pub fn new(name: impl Into<String>) -> Self {
        let mut pet = Self {
            name: name.into(),
            hunger: 50,
            experience: 0,
            level: Level::Egg,
            is_hurting: false,
            hurt_start_tick: 0,
            position: Vec2::ZERO,
            size: Vec2::splat(Self::DEFAULT_SIZE),
            rotation: 0.0,
            color_tint: Vec3::ONE,
            anim_time: 0.0,
            anchor: Vec2::ZERO,
            state: None,
        };

        // Initial state: entered directly, there is no previous state to leave
        let mut idle: Box<dyn PetState> = Box::new(IdleState::new());
        idle.enter(&mut pet, 0);
        pet.state = Some(idle);
        pet
    }

    /// Route one simulation tick to the active state, then advance hurt
    /// recovery. `tick_duration` is passed through for states that scale an
    /// effect by real time.
    pub fn update_tick(&mut self, tick_duration: f32, tick: Tick) -> Result<(), PetError> {
        let mut state = self.state.take().ok_or(PetError::TransitionInProgress)?;
        let transition = state.update(self, tick_duration, tick);
        self.state = Some(state);

        if let Transition::To(next) = transition {
            self.change_state(next, tick)?;
        }

        if self.is_hurting {
            self.advance_hurt(tick);
        }
        Ok(())
    }

    /// Replace the active state. The old state's `leave` runs and the old
    /// state is dropped before the new one's `enter`; on error nothing has
    /// changed.
    pub fn change_state(
        &mut self,
        mut new_state: Box<dyn PetState>,
        tick: Tick,
    ) -> Result<(), PetError> {
        let mut old = self.state.take().ok_or(PetError::TransitionInProgress)?;
        old.leave(self, tick);
        drop(old);

        new_state.enter(self, tick);
        self.state = Some(new_state);
        Ok(())
    }

    /// Start a meal. Always allowed; feeding an already-eating pet restarts
    /// the meal.
    pub fn feed(&mut self, tick: Tick) -> Result<(), PetError> {
        log::info!("Feeding {}", self.name);
        self.change_state(Box::new(FeedingState::new()), tick)
    }

    /// A training session grants one experience point per hour.
    pub fn train(&mut self, hours: i32) {
        self.set_experience(self.experience + hours);
    }

    /// Flag the pet as hurt. Idempotent while the hurt is still active.
    pub fn hurt(&mut self, tick: Tick) {
        if self.is_hurting {
            return;
        }
        self.hurt_start_tick = tick;
        self.is_hurting = true;
        self.advance_hurt(tick);
    }

    /// Hurt bookkeeping, run once per tick while hurting: keep the hurt
    /// tint until the recovery window has elapsed, then clear everything.
    fn advance_hurt(&mut self, tick: Tick) {
        self.color_tint = HURT_TINT;
        let elapsed = tick.saturating_sub(self.hurt_start_tick);
        log::trace!("{} hurting for {} ticks", self.name, elapsed);
        if elapsed >= HURT_RECOVERY_TICKS {
            self.color_tint = Vec3::ONE;
            self.is_hurting = false;
            self.hurt_start_tick = 0;
        }
    }

    /// Advance the render-side animation: a gentle per-level sway around the
    /// anchor point. Render path only, simulation attributes are untouched.
    pub fn update_render(&mut self, frame_delta: f32) {
        self.anim_time += frame_delta;
        let t = self.anim_time;
        let offset = match self.level {
            Level::Egg => Vec2::new((t * 10.0).sin() * 2.0, 0.0),
            Level::Puppy => Vec2::new(0.0, t.sin() * 2.0),
            Level::Child | Level::Adult => Vec2::new(t.sin(), t.cos()),
        };
        self.position = self.anchor + offset;
    }

    /// Anchor point (window center) the idle animation sways around.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
        self.position = anchor;
    }

    pub fn set_hunger(&mut self, value: i32) {
        self.hunger = value.clamp(MIN_HUNGER, MAX_HUNGER);
    }

    pub fn set_experience(&mut self, value: i32) {
        self.experience = value.max(0);
        self.display_status();
    }

    /// Emit the status snapshot to the log sink.
    pub fn display_status(&self) {
        log::info!(
            "{}: hunger={} xp={} level={} activity={}",
            self.name,
            self.hunger,
            self.experience,
            self.level,
            self.current_activity()
        );
    }

    /// Activity label of the live state.
    pub fn current_activity(&self) -> &'static str {
        self.state.as_deref().map_or("", |state| state.activity())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_hurting(&self) -> bool {
        self.is_hurting
    }

    pub fn hurt_start_tick(&self) -> Tick {
        self.hurt_start_tick
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn color_tint(&self) -> Vec3 {
        self.color_tint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunger_clamped_on_write() {
        let mut pet = Pet::new("Doki");

        pet.set_hunger(-5);
        assert_eq!(pet.hunger(), 0);
        pet.set_hunger(150);
        assert_eq!(pet.hunger(), 100);
        pet.set_hunger(42);
        assert_eq!(pet.hunger(), 42);
    }

    #[test]
    fn test_experience_clamped_on_write() {
        let mut pet = Pet::new("Doki");

        pet.set_experience(-1);
        assert_eq!(pet.experience(), 0);
        pet.set_experience(7);
        assert_eq!(pet.experience(), 7);
    }

    #[test]
    fn test_train_accumulates() {
        let mut pet = Pet::new("Doki");

        pet.train(5);
        pet.train(3);
        assert_eq!(pet.experience(), 8);
    }

    #[test]
    fn test_construction_enters_idle() {
        let pet = Pet::new("Doki");
        assert_eq!(pet.current_activity(), "idling");
        assert_eq!(pet.level(), Level::Egg);
        assert_eq!(pet.hunger(), 50);
    }

    #[test]
    fn test_change_state_round_trip() {
        let mut pet = Pet::new("Doki");

        pet.change_state(Box::new(FeedingState::new()), 3).unwrap();
        assert_eq!(pet.current_activity(), "eating");

        pet.change_state(Box::new(IdleState::new()), 4).unwrap();
        assert_eq!(pet.current_activity(), "idling");
    }

    #[test]
    fn test_hurt_is_idempotent_while_active() {
        let mut pet = Pet::new("Doki");

        pet.hurt(5);
        assert!(pet.is_hurting());
        assert_eq!(pet.hurt_start_tick(), 5);

        // A second hit while still hurting does not restart the window
        pet.hurt(7);
        assert_eq!(pet.hurt_start_tick(), 5);
    }

    #[test]
    fn test_hurt_clears_after_one_tick() {
        let mut pet = Pet::new("Doki");

        pet.hurt(5);
        assert!(pet.is_hurting());
        assert_eq!(pet.color_tint(), HURT_TINT);

        pet.update_tick(0.5, 6).unwrap();
        assert!(!pet.is_hurting());
        assert_eq!(pet.hurt_start_tick(), 0);
        assert_eq!(pet.color_tint(), Vec3::ONE);
    }

    #[test]
    fn test_hurt_again_after_recovery() {
        let mut pet = Pet::new("Doki");

        pet.hurt(5);
        pet.update_tick(0.5, 6).unwrap();
        assert!(!pet.is_hurting());

        pet.hurt(8);
        assert!(pet.is_hurting());
        assert_eq!(pet.hurt_start_tick(), 8);
    }

    #[test]
    fn test_feed_scenario() {
        let mut pet = Pet::new("Doki");
        pet.set_hunger(50);

        pet.feed(0).unwrap();
        assert_eq!(pet.current_activity(), "eating");

        for tick in 1..=9 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.hunger(), 23);
        assert_eq!(pet.current_activity(), "eating");

        // The transition tick restores nothing
        pet.update_tick(0.5, 10).unwrap();
        assert_eq!(pet.current_activity(), "idling");
        assert_eq!(pet.hunger(), 23);
    }

    #[test]
    fn test_feed_restarts_meal() {
        let mut pet = Pet::new("Doki");
        pet.set_hunger(50);

        pet.feed(0).unwrap();
        for tick in 1..=5 {
            pet.update_tick(0.5, tick).unwrap();
        }
        // Feeding again mid-meal starts a fresh meal window
        pet.feed(6).unwrap();
        for tick in 7..=15 {
            pet.update_tick(0.5, tick).unwrap();
        }
        assert_eq!(pet.current_activity(), "eating");
        pet.update_tick(0.5, 16).unwrap();
        assert_eq!(pet.current_activity(), "idling");
    }

    #[test]
    fn test_render_animation_sways_around_anchor() {
        let mut pet = Pet::new("Doki");
        pet.set_anchor(Vec2::new(400.0, 300.0));

        pet.update_render(0.016);
        let p = pet.position();
        assert!((p.x - 400.0).abs() <= 2.0);
        assert_eq!(p.y, 300.0);
    }
}
