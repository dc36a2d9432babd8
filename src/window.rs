use std::sync::Arc;

use anyhow::Context;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window as WinitWindow;

use crate::config::ViewConfig;
use crate::traits::window::{WindowContext, WindowDimensions};

/// Wrapper around a winit Window that records close requests for the host loop
pub struct DisplayWindow {
    inner: Arc<WinitWindow>,
    close_requested: bool,
}

impl DisplayWindow {
    /// Create the main display window. Failure is fatal to the caller.
    pub fn create(event_loop: &ActiveEventLoop, config: &ViewConfig) -> anyhow::Result<Self> {
        let attributes = WinitWindow::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height));

        let window = event_loop
            .create_window(attributes)
            .inspect_err(|e| log::error!("Failed to create window: {e}"))
            .context("failed to create display window")?;

        log::info!(
            "Created window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );
        Ok(Self::new(Arc::new(window)))
    }

    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self {
            inner: window,
            close_requested: false,
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

impl WindowContext for DisplayWindow {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
