use crate::{
    ball::Ball,
    collision::{collidable::WallHits, collide_ball_wall},
    table::Table,
};

/// Moves one ball through a tick: wall bounce, integrate, friction.
///
/// A bounce can send a ball further than the table is wide, so the integrated
/// position is clamped to the ball bounds again.
pub fn advance_single_ball(ball: &mut Ball, table: &Table) -> WallHits {
    let hits = collide_ball_wall(ball, table);
    ball.position -= ball.momentum;
    let (min, max) = (table.ball_min(), table.ball_max());
    ball.position.x = ball.position.x.max(min.x).min(max.x);
    ball.position.y = ball.position.y.max(min.y).min(max.y);
    ball.momentum *= table.momentum_damping();
    hits
}
