use std::time::Duration;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, SurfaceTexture, wgpu};
use thiserror::Error;
use winit::window::Window;

use crate::controllers::interactive::data::frame::Frame;
use crate::controllers::interactive::ports::FramePresenterPort;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::mandelbrot::colouring::kinds::ColouringKind;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("frame does not fit the window surface: {0}")]
    Frame(#[from] PixelBufferError),
}

/// What the overlay reports about the frame on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    pub generation: u64,
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub sample_stride: u32,
    pub colouring: ColouringKind,
    pub render_duration: Duration,
}

impl From<&Frame<'_>> for FrameStatus {
    fn from(frame: &Frame<'_>) -> Self {
        Self {
            generation: frame.generation,
            center: frame.view.center(),
            zoom: frame.view.zoom(),
            max_iterations: frame.view.max_iterations(),
            sample_stride: frame.view.sample_stride().pixels(),
            colouring: frame.view.colouring(),
            render_duration: frame.render_duration,
        }
    }
}

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    status: Option<FrameStatus>,
}

impl PixelsPresenter {
    /// The framebuffer is sized to `dimensions`; the window surface scales it.
    pub fn new(window: &'static Window, dimensions: Dimensions) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(dimensions.width(), dimensions.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            status: None,
        })
    }

    #[must_use]
    pub fn status(&self) -> Option<&FrameStatus> {
        self.status.as_ref()
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)
    }

    /// Draws the last presented frame with the egui overlay on top.
    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("status overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    type Error = PresentError;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        frame.pixel_buffer.write_rgba(self.pixels.frame_mut())?;
        self.status = Some(FrameStatus::from(frame));

        Ok(())
    }
}
