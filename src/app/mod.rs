mod app;
mod audio;
mod layer;
mod overlay;

pub use app::*;
pub use audio::*;
pub use layer::*;
pub use overlay::*;
