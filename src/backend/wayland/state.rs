// Holds the live Wayland protocol state shared by the backend loop and the
// handler submodules, and owns the full-repaint render pass.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::{self, GridStyle, LabelStyle, SceneStyle, Stroke},
    input::InputState,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            input_state,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas_bytes) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            debug!("Requesting buffer from pool");
            let result = pool
                .create_buffer(
                    width as i32,
                    height as i32,
                    (width * 4) as i32,
                    wl_shm::Format::Argb8888,
                )
                .context("Failed to create buffer")?;
            debug!("Buffer acquired from pool");
            result
        };

        // SAFETY: The Cairo surface borrows raw memory from the SlotPool buffer.
        // Invariants upheld here:
        // 1. `canvas_bytes` is a valid mutable slice of exactly (width * height * 4) bytes
        // 2. ARgb32 matches the Argb8888 allocation (4 bytes per pixel)
        // 3. The stride (width * 4) is the real bytes-per-row of the buffer
        // 4. `cairo_surface` and `ctx` are dropped before the buffer is attached
        //    and committed, so Cairo never touches memory after handoff
        // 5. The borrow checker keeps the slice alive and exclusive while Cairo uses it
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas_bytes.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Clear the whole surface, then lay the scrim outside the canvas
        debug!("Clearing background");
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint().context("Failed to clear background")?;
        ctx.set_operator(cairo::Operator::Over);

        let canvas = self.input_state.canvas;
        draw::render::render_scrim(
            &ctx,
            width as f64,
            height as f64,
            &canvas,
            self.config.canvas.scrim.into(),
        );

        // Full scene repaint in canvas space: background, grid, committed
        // segments with labels, then the live preview layers
        let style = SceneStyle {
            background: self.config.canvas.background.into(),
            grid: GridStyle {
                spacing: self.config.grid.spacing,
                color: self.config.grid.color.into(),
            },
        };
        let stroke = Stroke {
            color: self.input_state.current_color,
            thickness: self.input_state.current_thickness,
        };
        let label = LabelStyle {
            size: self.input_state.label_size,
            color: self.input_state.current_color,
            font: self.input_state.font_descriptor.clone(),
            background_enabled: self.config.drawing.label_background_enabled,
            unit: self.config.measurement.unit.clone(),
            precision: self.config.measurement.precision as usize,
        };
        let preview = self.input_state.preview_segment();

        debug!(
            "Rendering {} committed segments (drawing: {})",
            self.input_state.store.len(),
            preview.is_some()
        );

        let (origin_x, origin_y) = canvas.origin();
        ctx.save().ok();
        ctx.translate(origin_x, origin_y);
        draw::render_scene(
            &ctx,
            canvas.width(),
            canvas.height(),
            &style,
            &stroke,
            &label,
            &self.input_state.store,
            preview.as_ref(),
        );
        ctx.restore().ok();

        // Render status bar if enabled
        if self.input_state.show_status_bar {
            crate::ui::render_status_bar(
                &ctx,
                &self.input_state,
                self.config.ui.status_bar_position,
                &self.config.ui.status_bar_style,
                self.config.grid.spacing,
                width,
                height,
            );
        }

        // Render help overlay if toggled
        if self.input_state.show_help {
            crate::ui::render_help_overlay(&ctx, &self.config.ui.help_overlay_style, width, height);
        }

        // Flush Cairo
        debug!("Flushing Cairo surface");
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        debug!("Attaching buffer and committing surface");
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        // Full-surface damage: the scene is repainted from scratch each frame
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        } else {
            debug!("Skipping frame callback (vsync disabled - allows back-to-back renders)");
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}
