//! Central UI state management

use instant::Instant;

use super::hud::{Hud, PetAction};
use crate::pet::Pet;
use crate::simulation::Tick;

/// Central UI state container
pub struct UiState {
    /// Pet status panel
    pub hud: Hud,

    /// Toast notification (message, shown_at)
    toast_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            hud: Hud::new(),
            toast_message: None,
        }
    }

    /// Toggle the status panel
    pub fn toggle_hud(&mut self) {
        self.hud.toggle();
    }

    /// Show a toast notification
    pub fn show_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// Render all UI elements. Returns the pet action clicked this frame,
    /// if any.
    pub fn render(&mut self, ctx: &egui::Context, pet: &Pet, current_tick: Tick) -> Option<PetAction> {
        let action = self.hud.render(ctx, pet, current_tick);

        // Render toast notifications
        if let Some((msg, shown_at)) = &self.toast_message {
            const TOAST_DURATION_SECS: u64 = 3;
            if shown_at.elapsed().as_secs() < TOAST_DURATION_SECS {
                egui::Area::new("toast_notification".into())
                    .anchor(egui::Align2::CENTER_TOP, [0.0, 50.0])
                    .show(ctx, |ui| {
                        ui.label(
                            egui::RichText::new(msg)
                                .size(20.0)
                                .color(egui::Color32::from_rgb(100, 255, 100)),
                        );
                    });
            } else {
                self.toast_message = None;
            }
        }

        action
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
