//! `ApplicationHandler` implementation for the winit event loop.

use std::sync::Arc;

use tokio::sync::watch;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use sash_common::ConfigError;
use sash_config::schema::SashConfig;
use sash_config::Palette;
use sash_renderer::{BorderRects, RenderState};

use crate::scene;

/// Top-level application state.
pub struct SashApp {
    config: SashConfig,
    config_rx: Option<watch::Receiver<SashConfig>>,

    // Windowing
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,

    // Border compositor, rebuilt on every config load
    borders: Option<BorderRects>,
}

impl SashApp {
    pub fn new(config: SashConfig, config_rx: Option<watch::Receiver<SashConfig>>) -> Self {
        Self {
            config,
            config_rx,
            window: None,
            render_state: None,
            borders: None,
        }
    }

    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone())) {
            Ok(rs) => {
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        if let Err(e) = self.apply_config() {
            tracing::error!("Invalid configuration: {e}");
            return false;
        }

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Rebuild everything derived from the config: the border generator
    /// (frame widths in pixels, packed colors) and the clear color.
    fn apply_config(&mut self) -> Result<(), ConfigError> {
        let Some(ref mut rs) = self.render_state else {
            return Ok(());
        };

        let palette = Palette::resolve(&self.config.colors)?;
        self.borders = Some(BorderRects::new(
            &self.config.window,
            &palette,
            rs.gpu.scale_factor,
        ));

        let bg = palette.background;
        rs.set_clear_color(
            srgb_to_linear(bg.r as f64 / 255.0),
            srgb_to_linear(bg.g as f64 / 255.0),
            srgb_to_linear(bg.b as f64 / 255.0),
        );
        Ok(())
    }

    /// Render a single frame: collect border rectangles for the current
    /// scene and draw the quad pass.
    fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };
        let Some(borders) = self.borders else {
            return;
        };

        let viewport = rs.gpu.size;
        let scene = scene::demo_scene(viewport);
        let draw_pane_borders =
            scene.panes.len() > 1 || !self.config.window.hide_single_pane_border;

        borders.collect(
            &mut rs.quad,
            &scene.panes,
            scene.active_pane,
            &scene.blank_rects,
            &[],
            draw_pane_borders,
            viewport,
        );

        if let Err(e) = rs.render_frame() {
            tracing::error!("Render error: {e}");
        }
    }

    fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for SashApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                // Frame widths are in points; pixel widths change with scale
                if let Err(e) = self.apply_config() {
                    tracing::warn!("failed to reapply config: {e}");
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let reloaded = match self.config_rx {
            Some(ref mut rx) => rx.has_changed().unwrap_or(false),
            None => false,
        };
        if reloaded {
            if let Some(ref mut rx) = self.config_rx {
                self.config = rx.borrow_and_update().clone();
            }
            tracing::info!("configuration reloaded");
            if let Err(e) = self.apply_config() {
                tracing::warn!("reloaded config rejected: {e}");
            }
            self.request_redraw();
        }
    }
}

/// sRGB → linear conversion for the wgpu clear color on sRGB surfaces.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
