//! Simulation behind the Cosmogonía Muisca page: entities, the effects built from them, and
//! the small state machines driving audio and theming. Nothing here touches the DOM.

mod point;
pub use point::*;

mod color;
pub use color::*;

mod random;
pub use random::*;

mod settings;
pub use settings::*;

mod surface;
pub use surface::*;

mod schedule;
pub use schedule::*;

mod entity;
pub use entity::*;

mod swarm;
pub use swarm::*;

mod particle;
pub use particle::*;

mod firework;
pub use firework::*;

mod ripple;
pub use ripple::*;

mod flow;
pub use flow::*;

mod blob;
pub use blob::*;

mod snake;
pub use snake::*;

mod carousel;
pub use carousel::*;

mod flash;
pub use flash::*;

mod jukebox;
pub use jukebox::*;

mod theme;
pub use theme::*;

mod effects;
pub use effects::*;
