pub mod clock;
pub mod input_adapter;

pub use clock::FrameClock;
pub use input_adapter::WinitController;
