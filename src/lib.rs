//! Pool table simulation core.
//!
//! Balls slide with uniform friction, collide elastically with each other and
//! bounce off the borders. The host feeds pointer positions in table coordinates
//! and calls one tick per animation frame; everything drawable comes back as
//! plain data.

pub mod advance;
pub mod ball;
pub mod collision;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod rack;
pub mod render;
pub mod shot;
pub mod simulation;
pub mod table;
pub mod trajectory;
pub mod wall;
pub mod world_gen;

pub use ball::{Ball, Color};
pub use error::{RackError, SimulationError, TableError};
pub use geometry::{Point, Vector};
pub use interaction::{Interaction, PlayerAction, TickOutcome};
pub use rack::{create_rack, Rack};
pub use shot::compute_shot_momentum;
pub use simulation::{step_simulation, Simulation, SimulationConfig};
pub use table::Table;
pub use trajectory::{compute_trajectory, Trajectory};
