pub mod controller;
pub mod uniform;
pub mod window;

pub use controller::*;
pub use uniform::*;
pub use window::*;
