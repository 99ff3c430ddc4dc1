use crate::{
    geometry::{angle, distance, Point, Vector},
    table::Table,
};

/// Converts shot power into per-tick momentum. Changing it changes how fast the game feels.
pub const SHOT_POWER_DIVISOR: f64 = 20.;

/// Initial momentum for a drag from the ball center `start` to the release point `end`.
///
/// Power grows with drag length up to the table's cap. `None` means the drag had no
/// length and no shot happens. The ball travels away from `end` since positions move
/// against momentum.
pub fn compute_shot_momentum(table: &Table, start: &Point, end: &Point) -> Option<Vector> {
    let power = table
        .max_momentum()
        .min(table.momentum_multiplier() * distance(start, end));
    if power == 0. || !power.is_finite() {
        return None;
    }
    let angle = angle(start, end);
    Some(Vector::new(
        power * angle.cos() / SHOT_POWER_DIVISOR,
        power * angle.sin() / SHOT_POWER_DIVISOR,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn zero_drag_is_no_shot() {
        let start = Point::new(300., 300.);
        assert_eq!(compute_shot_momentum(&Table::default(), &start, &start), None);
    }

    #[test]
    fn short_drag_scales_with_multiplier() {
        let (start, end) = (Point::new(300., 300.), Point::new(400., 300.));
        let momentum = compute_shot_momentum(&Table::default(), &start, &end).unwrap();
        // 100 * 1.2 / 20
        assert_relative_eq!(momentum.x, 6., epsilon = 1e-12);
        assert_relative_eq!(momentum.y, 0.);
    }

    #[test]
    fn diagonal_drag_uses_the_polar_form() {
        // 30-40-50 drag: power 60 along atan2(40, 30).
        let (start, end) = (Point::new(300., 300.), Point::new(330., 340.));
        let momentum = compute_shot_momentum(&Table::default(), &start, &end).unwrap();
        let angle = 40f64.atan2(30.);
        let power = 1.2 * 50.;
        assert_eq!(momentum.x, power * angle.cos() / 20.);
        assert_eq!(momentum.y, power * angle.sin() / 20.);
        assert_relative_eq!(momentum.x, 1.8, epsilon = 1e-12);
        assert_relative_eq!(momentum.y, 2.4, epsilon = 1e-12);
    }

    #[rstest]
    #[case(600.)]
    #[case(5_000.)]
    #[case(1e9)]
    fn long_drag_is_capped(#[case] drag: f64) {
        let table = Table::default();
        let (start, end) = (Point::new(300., 300.), Point::new(300., 300. - drag));
        let momentum = compute_shot_momentum(&table, &start, &end).unwrap();
        assert_relative_eq!(momentum.norm(), 30., epsilon = 1e-9);
        assert!(momentum.y < 0.);
    }
}
