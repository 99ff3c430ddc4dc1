use crate::{
    ball::{Color, CUE_BALL_COLOR, OBJECT_BALL_COLOR, PALETTE},
    error::RackError,
    geometry::{distance, Point},
    rack::{create_rack, Rack},
    table::Table,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub const DEFAULT_SEED: u64 = 0xcafef00dd15ea5e5;

/// How much tighter than touching the columns of the triangle are packed.
const RACK_COLUMN_OVERLAP: f64 = 3.;
const RACK_ROWS: usize = 5;
const PLACEMENT_ATTEMPTS_PER_BALL: usize = 1000;

/// Cue ball on the left fifth of the table, fifteen balls in a triangle right of center.
pub fn standard_positions(table: &Table) -> Vec<Point> {
    let (w, h) = (table.width(), table.height());
    let r = table.ball_radius();
    let b = table.border_thickness();
    let apex_x = b + w / 2. + 4. * r;

    let mut positions = Vec::with_capacity(1 + RACK_ROWS * (RACK_ROWS + 1) / 2);
    positions.push(Point::new(b + w / 5., h / 2.));
    for column in 0..RACK_ROWS {
        let x = apex_x + column as f64 * (2. * r - RACK_COLUMN_OVERLAP);
        for row in 0..=column {
            let y = h / 2. + (2. * row as f64 - column as f64) * r;
            positions.push(Point::new(x, y));
        }
    }
    positions
}

pub fn standard_rack(table: &Table) -> Result<Rack, RackError> {
    let positions = standard_positions(table);
    let mut colors = vec![OBJECT_BALL_COLOR; positions.len()];
    colors[0] = CUE_BALL_COLOR;
    create_rack(table, &positions, &colors)
}

/// `count` balls at random non-overlapping spots with random palette colors.
/// The first ball keeps the cue ball color. Same seed, same rack.
pub fn scattered_rack(table: &Table, count: usize, seed: u64) -> Result<Rack, RackError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let (min, max) = (table.ball_min(), table.ball_max());
    let diameter = 2. * table.ball_radius();

    let mut positions = Vec::<Point>::with_capacity(count);
    let mut colors = Vec::<Color>::with_capacity(count);
    let max_attempts = count.saturating_mul(PLACEMENT_ATTEMPTS_PER_BALL);
    let mut attempts = 0;
    while positions.len() < count {
        if attempts == max_attempts {
            return Err(RackError::NoRoom {
                placed: positions.len(),
                attempts,
            });
        }
        attempts += 1;
        let candidate = Point::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y));

        // Check it doesn't overlap with an existing ball.
        if positions
            .iter()
            .any(|other| distance(other, &candidate) <= diameter)
        {
            continue;
        }
        positions.push(candidate);
        colors.push(if colors.is_empty() {
            CUE_BALL_COLOR
        } else {
            PALETTE[rng.gen_range(0..PALETTE.len())]
        });
    }
    create_rack(table, &positions, &colors)
}
