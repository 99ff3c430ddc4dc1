pub mod collidable;
pub mod colliders;
pub mod collision;
pub mod solvers;
pub use collidable::{Contact, WallHits};
pub use colliders::{collide_ball_ball, collide_ball_wall};
pub use collision::resolve_ball_collisions;
pub use solvers::solve_border_crossing;
