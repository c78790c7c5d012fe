use egui::{Color32, Context, CornerRadius, Rect, Stroke, StrokeKind, Vec2};

use crate::pet::Pet;
use crate::simulation::Tick;

/// An action requested through the panel this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetAction {
    Feed,
    Train,
    Hurt,
    Status,
}

/// Status panel showing the pet's attributes and action buttons.
pub struct Hud {
    show: bool,
}

impl Hud {
    pub fn new() -> Self {
        Hud { show: true }
    }

    /// Toggle panel visibility
    pub fn toggle(&mut self) {
        self.show = !self.show;
    }

    /// Render the panel. Returns the action clicked this frame, if any.
    pub fn render(&self, ctx: &Context, pet: &Pet, current_tick: Tick) -> Option<PetAction> {
        if !self.show {
            return None;
        }

        let mut action = None;

        egui::Area::new("pet_status".into())
            .fixed_pos(egui::pos2(10.0, 10.0))
            .show(ctx, |ui| {
                ui.set_width(300.0);

                ui.heading(pet.name());
                ui.label(format!("Level: {}", pet.level()));
                ui.label(format!("Activity: {}", pet.current_activity()));
                ui.label(format!("Tick: {}", current_tick));
                if pet.is_hurting() {
                    ui.colored_label(Color32::from_rgb(220, 80, 80), "Hurting!");
                }

                ui.add_space(5.0);

                // Hunger bar
                let hunger_color = if pet.hunger() >= 80 {
                    Color32::from_rgb(255, 100, 0) // Orange when ravenous
                } else {
                    Color32::from_rgb(200, 150, 50) // Yellow-brown
                };
                self.render_stat_bar(
                    ui,
                    "Hunger",
                    pet.hunger(),
                    100,
                    hunger_color,
                    Color32::from_rgb(80, 60, 20),
                );

                ui.add_space(5.0);
                ui.label(format!("XP: {}", pet.experience()));

                ui.add_space(5.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Feed").clicked() {
                        action = Some(PetAction::Feed);
                    }
                    if ui.button("Train").clicked() {
                        action = Some(PetAction::Train);
                    }
                    if ui.button("Hurt").clicked() {
                        action = Some(PetAction::Hurt);
                    }
                    if ui.button("Status").clicked() {
                        action = Some(PetAction::Status);
                    }
                });

                // Controls hint
                ui.separator();
                ui.label("C: Feed | Z: Train | X: Status");
                ui.label("Space: Hurt | F1: Toggle panel");
            });

        action
    }

    fn render_stat_bar(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        current: i32,
        max: i32,
        fill_color: Color32,
        bg_color: Color32,
    ) {
        let percentage = (current as f32 / max as f32).clamp(0.0, 1.0);

        ui.horizontal(|ui| {
            ui.label(format!("{}: ", label));

            let bar_width = 200.0;
            let bar_height = 20.0;

            let (response, painter) =
                ui.allocate_painter(Vec2::new(bar_width, bar_height), egui::Sense::hover());

            let rect = response.rect;

            // Background
            painter.rect_filled(rect, CornerRadius::same(4), bg_color);

            // Fill
            let fill_width = bar_width * percentage;
            let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_width, bar_height));
            painter.rect_filled(fill_rect, CornerRadius::same(4), fill_color);

            // Border
            painter.rect_stroke(
                rect,
                CornerRadius::same(4),
                Stroke::new(1.5, Color32::BLACK),
                StrokeKind::Outside,
            );

            // Text overlay
            let text = format!("{}/{}", current, max);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &text,
                egui::FontId::proportional(14.0),
                Color32::WHITE,
            );
        });
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
