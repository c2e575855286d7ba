pub mod collision;
pub mod input;
pub mod movement;
pub mod physics;
pub mod respawn;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use physics::*;
pub use respawn::*;
pub use scoring::*;
