//! Application state and main game loop

use anyhow::Result;
use glam::Vec2;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use crate::config::GameConfig;
use crate::pet::Pet;
use crate::render::{PetTextures, Renderer};
use crate::simulation::TickClock;
use crate::ui::{PetAction, UiState};

/// Frame times above this are logged as lag spikes.
const LAG_SPIKE_SECS: f32 = 0.03;

pub struct App {
    window: Window,
    renderer: Renderer,
    pet: Pet,
    clock: TickClock,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    ui_state: UiState,
    config: GameConfig,
    last_frame: Instant,
}

impl App {
    pub async fn new(config: GameConfig) -> Result<(Self, EventLoop<()>)> {
        let event_loop = EventLoop::new()?;

        let window_attrs = WindowAttributes::default()
            .with_title("Digipet")
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.ui.window_width,
                config.ui.window_height,
            ));

        #[allow(deprecated)]
        let window = event_loop.create_window(window_attrs)?;

        let textures = PetTextures::load();
        let renderer = Renderer::new(&window, &textures).await?;

        let mut pet = Pet::new(config.pet.name.clone());
        pet.set_hunger(config.pet.starting_hunger);
        let size = window.inner_size();
        pet.set_anchor(Vec2::new(
            size.width as f32 / 2.0,
            size.height as f32 / 2.0,
        ));

        let clock = TickClock::new(config.simulation.fixed_tick_duration);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None, // max_texture_side
        );

        let ui_state = UiState::new();

        log::info!("{} hatched", pet.name());
        if config.debug.show_status_on_start {
            pet.display_status();
        }

        let app = Self {
            window,
            renderer,
            pet,
            clock,
            egui_ctx,
            egui_state,
            ui_state,
            config,
            last_frame: Instant::now(),
        };

        Ok((app, event_loop))
    }

    pub fn run(event_loop: EventLoop<()>, mut app: Self) -> Result<()> {
        event_loop.run_app(&mut app)?;
        Ok(())
    }

    /// Route a discrete action to the pet. Both the keyboard and the panel
    /// buttons land here, so each press acts exactly once.
    fn apply_action(&mut self, action: PetAction) {
        let tick = self.clock.current_tick();
        match action {
            PetAction::Feed => match self.pet.feed(tick) {
                Ok(()) => self.ui_state.show_toast("Yum!"),
                Err(e) => log::error!("Feed failed: {}", e),
            },
            PetAction::Train => {
                self.pet.train(self.config.pet.train_hours);
                self.ui_state.show_toast("Trained hard!");
            }
            PetAction::Hurt => self.pet.hurt(tick),
            PetAction::Status => self.pet.display_status(),
        }
    }

    fn handle_redraw(&mut self) {
        let now = Instant::now();
        let frame_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_delta > LAG_SPIKE_SECS {
            log::debug!(
                "Lag spike: frame took {:.1}ms ({:.0} fps)",
                frame_delta * 1000.0,
                1.0 / frame_delta
            );
        }

        // Fixed-timestep simulation: a slow frame may unlock several
        // catch-up ticks, a fast one none.
        let tick_duration = self.clock.tick_duration();
        for tick in self.clock.advance(frame_delta) {
            if let Err(e) = self.pet.update_tick(tick_duration, tick) {
                log::error!("Tick {} skipped: {}", tick, e);
            }
        }

        // Render-side animation runs on real frame time
        self.pet.update_render(frame_delta);

        // Prepare egui frame
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let mut action = None;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            action = self
                .ui_state
                .render(ctx, &self.pet, self.clock.current_tick());
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        if let Some(action) = action {
            self.apply_action(action);
        }

        if let Err(e) = self.renderer.render(
            &self.pet,
            &self.egui_ctx,
            full_output.textures_delta,
            full_output.shapes,
        ) {
            log::error!("Render error: {e}");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer are already initialized in new()
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle events first
        let _ = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
                self.pet.set_anchor(Vec2::new(
                    size.width as f32 / 2.0,
                    size.height as f32 / 2.0,
                ));
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                // Skip input if egui wants it
                if self.egui_ctx.wants_keyboard_input() {
                    return;
                }
                // Edge-triggered: act once per physical press, ignore OS key
                // repeat while held
                if key_event.state != ElementState::Pressed || key_event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = key_event.physical_key {
                    log::debug!("Keyboard: {:?} pressed", code);
                    match code {
                        KeyCode::Escape => event_loop.exit(),
                        KeyCode::KeyC => self.apply_action(PetAction::Feed),
                        KeyCode::KeyZ => self.apply_action(PetAction::Train),
                        KeyCode::KeyX => self.apply_action(PetAction::Status),
                        KeyCode::Space => self.apply_action(PetAction::Hurt),
                        KeyCode::F1 => self.ui_state.toggle_hud(),
                        _ => {}
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.handle_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.window.request_redraw();
    }
}
