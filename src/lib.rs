pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod traits;
pub mod uniform;
pub mod view;
pub mod window;

pub use camera::{Camera, Direction};
pub use config::{CameraPose, ViewConfig};
pub use uniform::ViewUniforms;
pub use view::{PointerTracker, ProjectionMode, ViewController};
