// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::ViewConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scene-view")]
#[command(about = "Interactive fly-through viewer for a 3D scene", long_about = None)]
pub struct Cli {
    /// JSON view configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Mouse look sensitivity (degrees per pixel)
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Movement speed (units per second)
    #[arg(long)]
    pub speed: Option<f32>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,
}

impl Cli {
    /// Resolve the final configuration: defaults, then the config file, then flags
    pub fn view_config(&self) -> anyhow::Result<ViewConfig> {
        let mut config = match &self.config {
            Some(path) => ViewConfig::load(path)?,
            None => ViewConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.sensitivity = sensitivity;
        }
        if let Some(speed) = self.speed {
            config.move_speed = speed;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
