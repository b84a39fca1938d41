use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::config::ExplorerConfig;
use crate::controllers::interactive::{InteractiveController, LoopControl};
use crate::input::gui::keys::input_event;
use crate::input::gui::run_gui::GuiError;
use crate::input::translator::{InputEvent, InputTranslator};
use crate::presenters::pixels::PixelsPresenter;

const KEY_HELP: &[(&str, &str)] = &[
    ("W A S D", "pan"),
    ("E / Q", "zoom in / out"),
    ("R / F", "more / less detail"),
    ("Space", "toggle resolution"),
    ("C", "cycle colouring"),
    ("Backspace", "reset view"),
    ("Esc", "quit"),
];

pub struct GuiApp {
    window: &'static Window,
    controller: InteractiveController,
    translator: InputTranslator,
    presenter: PixelsPresenter,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    redraw_pending: bool,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ExplorerConfig,
    ) -> Result<Self, GuiError> {
        let presenter = PixelsPresenter::new(window, config.dimensions)?;
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Ok(Self {
            window,
            controller: InteractiveController::new(config),
            translator: InputTranslator::new(),
            presenter,
            egui_ctx,
            egui_state,
            redraw_pending: true,
        })
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<(), GuiError> {
        let response = self.egui_state.on_window_event(self.window, event);

        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => self.translator.handle(InputEvent::Quit),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } if !response.consumed => {
                if let Some(input) = input_event(*code, *state) {
                    self.translator.handle(input);
                }
            }
            WindowEvent::Resized(size) => {
                self.presenter.resize_surface(size.width, size.height)?;
                self.redraw_pending = true;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.presenter.resize_surface(size.width, size.height)?;
                self.redraw_pending = true;
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;
                self.redraw()?;
            }
            _ => {}
        }

        Ok(())
    }

    /// Runs one frame-loop iteration once the event queue is empty.
    pub fn about_to_wait(&mut self) -> Result<LoopControl, GuiError> {
        if self.translator.has_pending() || self.controller.needs_render() {
            let control = self
                .controller
                .run_frame(&mut self.translator, &mut self.presenter)?;

            if control == LoopControl::Quit {
                return Ok(LoopControl::Quit);
            }

            self.redraw_pending = true;
        }

        if self.redraw_pending {
            self.window.request_redraw();
        }

        Ok(LoopControl::Continue)
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);

        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|viewport| viewport.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.presenter.render(egui_output, &self.egui_ctx)?;

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let status = self.presenter.status().copied();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    match status {
                        Some(status) => {
                            ui.label(format!(
                                "Center: {:.6} {:+.6}i",
                                status.center.real, status.center.imag
                            ));
                            ui.label(format!("Zoom: {:.4}x", status.zoom));
                            ui.label(format!("Iterations: {}", status.max_iterations));
                            ui.label(format!("Sample stride: {}", status.sample_stride));
                            ui.label(format!("Colouring: {}", status.colouring));
                            ui.label(format!(
                                "Frame {}: {} ms",
                                status.generation,
                                status.render_duration.as_millis()
                            ));
                        }
                        None => {
                            ui.label("Rendering...");
                        }
                    }

                    ui.collapsing("Keys", |ui| {
                        for (keys, action) in KEY_HELP {
                            ui.label(format!("{keys}: {action}"));
                        }
                    });
                });
        })
    }
}
