//! Aim line prediction.
//!
//! The aim line starts at the selected ball and points away from the pointer, the
//! way a cue is pulled back before a shot. It is twice as long as the drag, capped,
//! and folds off the borders like light off mirrors. Vertices are produced lazily
//! and the whole thing is rebuilt on every pointer move.

use crate::{
    collision::{collidable::EPSILON, solve_border_crossing},
    geometry::{angle, direction, distance, Point},
    table::Table,
};
use log::debug;
use std::iter::FusedIterator;

/// Upper bound on border bounces of one aim line.
pub const MAX_REFLECTIONS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Start,
    Tracing,
    Done,
}

/// Vertices of an aim line, starting with the ball center.
///
/// Every vertex after the first lies on the interior boundary, except the last
/// which may be anywhere inside. The sum of segment lengths never exceeds the
/// requested maximum.
#[derive(Clone, Debug)]
pub struct Trajectory {
    table: Table,
    origin: Point,
    candidate: Point,
    angle: f64,
    remaining: f64,
    reflections: usize,
    stage: Stage,
}

pub fn compute_trajectory(
    table: &Table,
    start: Point,
    pull: Point,
    max_length: f64,
) -> Trajectory {
    let length = max_length.min(2. * distance(&start, &pull)).max(0.);
    let angle = if length > 0. { angle(&start, &pull) } else { 0. };
    Trajectory {
        table: *table,
        origin: start,
        candidate: start - direction(angle) * length,
        angle,
        remaining: length,
        reflections: 0,
        stage: Stage::Start,
    }
}

impl Trajectory {
    fn finish(&mut self) {
        self.stage = Stage::Done;
    }
}

impl Iterator for Trajectory {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self.stage {
            Stage::Done => None,
            Stage::Start => {
                self.stage = if self.remaining > 0. {
                    Stage::Tracing
                } else {
                    Stage::Done
                };
                Some(self.origin)
            }
            Stage::Tracing => loop {
                if self.table.interior_contains(&self.candidate) {
                    self.finish();
                    return Some(self.candidate);
                }
                if self.reflections == MAX_REFLECTIONS {
                    debug!("Aim line stopped after {} reflections", self.reflections);
                    self.finish();
                    return None;
                }
                let crossing = solve_border_crossing(&self.origin, &self.candidate, &self.table);
                let (hit, wall) = match crossing {
                    Some(crossing) => crossing,
                    None => {
                        debug!("Aim line from {} has no border crossing", self.origin);
                        self.finish();
                        return None;
                    }
                };
                let step = distance(&self.origin, &hit);
                self.remaining -= step;
                self.angle = wall.reflect_angle(self.angle);
                self.origin = hit;
                self.candidate = hit - direction(self.angle) * self.remaining.max(0.);
                self.reflections += 1;
                if self.remaining <= 0. {
                    self.finish();
                }
                // Leaving a corner hits the second border where it already is.
                if step > EPSILON {
                    return Some(hit);
                }
                if self.stage == Stage::Done {
                    return None;
                }
            },
        }
    }
}

impl FusedIterator for Trajectory {}

/// Total length of a polyline.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table() -> Table {
        Table::new(200., 100., 0., 5.).unwrap()
    }

    fn trace(start: (f64, f64), pull: (f64, f64), max_length: f64) -> Vec<Point> {
        let (start, pull) = (Point::new(start.0, start.1), Point::new(pull.0, pull.1));
        compute_trajectory(&table(), start, pull, max_length).collect()
    }

    fn assert_points(points: &[Point], expected: &[(f64, f64)]) {
        assert_eq!(points.len(), expected.len(), "{:?}", points);
        for (point, &(x, y)) in points.iter().zip(expected.iter()) {
            assert_relative_eq!(point.x, x, epsilon = 1e-9);
            assert_relative_eq!(point.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn short_pull_stays_inside() {
        let points = trace((100., 50.), (110., 50.), 400.);
        assert_eq!(points, vec![Point::new(100., 50.), Point::new(80., 50.)]);
    }

    #[test]
    fn zero_pull_is_a_single_point() {
        assert_eq!(trace((100., 50.), (100., 50.), 400.), vec![Point::new(100., 50.)]);
    }

    #[test]
    fn bounces_off_the_left_border() {
        // Pulled right by 40, so the line runs 80 to the left and hits x = 0 after 50.
        let points = trace((50., 50.), (90., 50.), 400.);
        assert_eq!(points[1], Point::new(0., 50.));
        assert_points(&points, &[(50., 50.), (0., 50.), (30., 50.)]);
        assert_relative_eq!(path_length(&points), 80., epsilon = 1e-9);
    }

    #[test]
    fn length_is_capped() {
        let points = trace((100., 50.), (100., 1000.), 220.);
        assert_relative_eq!(path_length(&points), 220., epsilon = 1e-9);
        // Straight up to the top border, down to the bottom one, then 70 back up.
        assert_points(&points, &[(100., 50.), (100., 0.), (100., 100.), (100., 30.)]);
    }

    #[test]
    fn corner_is_emitted_once() {
        // Runs into the top right corner, then comes straight back.
        let points = trace((100., 50.), (0., 100.), 400.);
        assert_points(&points, &[(100., 50.), (200., 0.), (100., 50.)]);
    }

    #[test]
    fn reflections_are_capped() {
        let table = Table::new(120., 90., 30., 5.).unwrap();
        let (start, pull) = (Point::new(60., 45.), Point::new(41_060., 29_045.));
        let mut trajectory = compute_trajectory(&table, start, pull, 100_000.);
        let points: Vec<_> = trajectory.by_ref().collect();

        assert_eq!(points.len(), MAX_REFLECTIONS + 1);
        assert_eq!(trajectory.next(), None);
        assert_eq!(points[0], start);
        assert!(path_length(&points) < 100_000.);

        let (min, max) = (table.interior_min(), table.interior_max());
        for p in &points[1..] {
            let on_border = (p.x - min.x).abs() < 1e-9
                || (p.x - max.x).abs() < 1e-9
                || (p.y - min.y).abs() < 1e-9
                || (p.y - max.y).abs() < 1e-9;
            assert!(on_border, "{} is not on a border", p);
            assert!(table.interior_contains(p));
        }
    }

    #[test]
    fn is_fused() {
        let mut trajectory =
            compute_trajectory(&table(), Point::new(100., 50.), Point::new(110., 50.), 400.);
        assert!(trajectory.by_ref().count() > 0);
        assert_eq!(trajectory.next(), None);
    }
}
