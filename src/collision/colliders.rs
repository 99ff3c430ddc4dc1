use super::collidable::WallHits;
use crate::{
    ball::Ball,
    geometry::{sign, Vector},
    table::Table,
    wall::Wall,
};

/// Equal-mass impulse along the line of centers, followed by a one unit nudge apart.
///
/// Returns the applied impulse, or `None` when nothing changed: coincident centers
/// have no normal, and a zero impulse means the balls are not pushing on each other.
/// The nudge only roughly separates overlapping balls; fast balls may still overlap
/// on the next tick.
pub fn collide_ball_ball(ball1: &mut Ball, ball2: &mut Ball) -> Option<f64> {
    let offset = ball1.position - ball2.position;
    let distance = offset.norm();
    if distance == 0. {
        return None;
    }
    let normal = offset / distance;
    let impulse = (ball2.momentum - ball1.momentum).dot(&normal);
    if impulse == 0. {
        return None;
    }
    ball1.add_momentum(normal * impulse);
    ball2.add_momentum(-normal * impulse);

    let nudge = Vector::new(sign(offset.x), sign(offset.y));
    ball1.move_by(nudge);
    ball2.move_by(-nudge);
    Some(impulse)
}

/// Keeps the ball inside the table for the coming integration step.
///
/// Each axis is checked on its own against the position the ball would reach after
/// moving by `-momentum`. When that position leaves the interior the coordinate is
/// clamped to the boundary and the momentum component is turned back into the table.
pub fn collide_ball_wall(ball: &mut Ball, table: &Table) -> WallHits {
    let next = ball.position - ball.momentum;
    let (min, max) = (table.ball_min(), table.ball_max());
    let mut hits = WallHits::default();

    if next.x > max.x {
        ball.position.x = max.x;
        ball.momentum.x = ball.momentum.x.abs();
        hits.x = Some(Wall::Right);
    } else if next.x < min.x {
        ball.position.x = min.x;
        ball.momentum.x = -ball.momentum.x.abs();
        hits.x = Some(Wall::Left);
    }

    if next.y > max.y {
        ball.position.y = max.y;
        ball.momentum.y = ball.momentum.y.abs();
        hits.y = Some(Wall::Bottom);
    } else if next.y < min.y {
        ball.position.y = min.y;
        ball.momentum.y = -ball.momentum.y.abs();
        hits.y = Some(Wall::Top);
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Color;
    use crate::geometry::Point;
    use approx::assert_relative_eq;

    fn ball(x: f64, y: f64, mx: f64, my: f64) -> Ball {
        Ball {
            position: Point::new(x, y),
            momentum: Vector::new(mx, my),
            color: Color::LIGHT_GREY,
        }
    }

    #[test]
    fn head_on_collision_swaps_momenta() {
        let mut b1 = ball(100., 100., 5., 0.);
        let mut b2 = ball(130., 100., 0., 0.);
        let impulse = collide_ball_ball(&mut b1, &mut b2);
        assert_eq!(impulse, Some(5.));
        assert_relative_eq!(b1.momentum.x, 0.);
        assert_relative_eq!(b2.momentum.x, 5.);
        assert_eq!(b1.position, Point::new(99., 100.));
        assert_eq!(b2.position, Point::new(131., 100.));
    }

    #[test]
    fn coincident_balls_are_left_alone() {
        let mut b1 = ball(100., 100., 5., 1.);
        let mut b2 = ball(100., 100., 0., 0.);
        let (before1, before2) = (b1, b2);
        assert_eq!(collide_ball_ball(&mut b1, &mut b2), None);
        assert_eq!((b1, b2), (before1, before2));
    }

    #[test]
    fn zero_impulse_skips_the_nudge() {
        // Identical momenta: nothing to exchange along the normal.
        let mut b1 = ball(100., 100., 2., 2.);
        let mut b2 = ball(120., 110., 2., 2.);
        let (before1, before2) = (b1, b2);
        assert_eq!(collide_ball_ball(&mut b1, &mut b2), None);
        assert_eq!((b1, b2), (before1, before2));
    }

    #[test]
    fn axis_aligned_nudge_leaves_the_other_axis() {
        let mut b1 = ball(100., 100., 0., 3.);
        let mut b2 = ball(100., 120., 0., 0.);
        collide_ball_ball(&mut b1, &mut b2);
        assert_eq!(b1.position, Point::new(100., 99.));
        assert_eq!(b2.position, Point::new(100., 121.));
    }

    #[test]
    fn wall_bounce_clamps_and_turns_inward() {
        let table = Table::new(400., 200., 0., 20.).unwrap();
        let mut b = ball(10., 100., 3., 0.);
        let hits = collide_ball_wall(&mut b, &table);
        assert_eq!(hits.x, Some(Wall::Left));
        assert_eq!(hits.y, None);
        assert_eq!(b.position.x, 20.);
        assert_eq!(b.momentum.x, -3.);
    }

    #[test]
    fn corner_bounce_flips_both_axes() {
        let table = Table::new(400., 200., 0., 20.).unwrap();
        let mut b = ball(378., 178., -4., -4.);
        let hits = collide_ball_wall(&mut b, &table);
        assert_eq!(hits.iter().collect::<Vec<_>>(), vec![Wall::Right, Wall::Bottom]);
        assert_eq!(b.position, Point::new(380., 180.));
        assert_eq!(b.momentum, Vector::new(4., 4.));
    }

    #[test]
    fn ball_far_from_walls_is_untouched() {
        let table = Table::default();
        let mut b = ball(500., 300., 10., -7.);
        let before = b;
        assert!(collide_ball_wall(&mut b, &table).is_empty());
        assert_eq!(b, before);
    }
}
