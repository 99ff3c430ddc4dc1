//! The balls currently on the table.
//!
//! A [`Rack`] is created once per game and mutated in place by the simulation.
//! Index 0 is the cue ball by convention. Every mutation coming from outside the
//! simulation goes through a validating setter: rejected input is logged, reported
//! as a [`RackError`] and leaves the rack untouched.

use crate::{
    ball::{Ball, Color},
    error::RackError,
    geometry::{is_finite_point, Point, Vector},
    table::Table,
};
use log::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct Rack {
    balls: Vec<Ball>,
}

/// Builds a rack from matching position and color lists.
pub fn create_rack(
    table: &Table,
    positions: &[Point],
    colors: &[Color],
) -> Result<Rack, RackError> {
    if positions.len() != colors.len() {
        return Err(rejected(RackError::LengthMismatch {
            positions: positions.len(),
            colors: colors.len(),
        }));
    }
    if positions.is_empty() {
        return Err(rejected(RackError::Empty));
    }
    for position in positions {
        check_position(table, position)?;
    }
    Ok(Rack {
        balls: positions
            .iter()
            .zip(colors)
            .map(|(&position, &color)| Ball::new(position, color))
            .collect(),
    })
}

fn rejected(err: RackError) -> RackError {
    warn!("Rejected rack input: {}", err);
    err
}

fn check_position(table: &Table, position: &Point) -> Result<(), RackError> {
    if !is_finite_point(position) {
        return Err(rejected(RackError::NonFinitePosition {
            x: position.x,
            y: position.y,
        }));
    }
    if !table.holds_ball_at(position) {
        return Err(rejected(RackError::OutsideTable {
            x: position.x,
            y: position.y,
        }));
    }
    Ok(())
}

impl Rack {
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub(crate) fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    pub fn cue_ball(&self) -> Option<&Ball> {
        self.balls.first()
    }

    /// Index of the first ball whose disc strictly contains `point`.
    pub fn ball_index_at(&self, table: &Table, point: &Point) -> Option<usize> {
        let radius_squared = table.ball_radius() * table.ball_radius();
        self.balls
            .iter()
            .position(|ball| (point - ball.position).norm_squared() < radius_squared)
    }

    fn ball_mut(&mut self, index: usize) -> Result<&mut Ball, RackError> {
        let len = self.balls.len();
        self.balls
            .get_mut(index)
            .ok_or_else(|| rejected(RackError::NoSuchBall { index, len }))
    }

    pub fn set_position(
        &mut self,
        table: &Table,
        index: usize,
        position: Point,
    ) -> Result<(), RackError> {
        let ball = self.ball_mut(index)?;
        check_position(table, &position)?;
        ball.position = position;
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: Color) -> Result<(), RackError> {
        self.ball_mut(index)?.color = color;
        Ok(())
    }

    /// Overwrites a ball's momentum. Non-finite momenta are rejected.
    pub fn set_momentum(&mut self, index: usize, momentum: Vector) -> Result<(), RackError> {
        let ball = self.ball_mut(index)?;
        if !(momentum.x.is_finite() && momentum.y.is_finite()) {
            return Err(rejected(RackError::NonFiniteMomentum {
                x: momentum.x,
                y: momentum.y,
            }));
        }
        ball.momentum = momentum;
        Ok(())
    }

    pub fn reset_momenta(&mut self) {
        for ball in &mut self.balls {
            ball.momentum = Vector::zeros();
        }
    }

    /// Whether every ball moves slower than `threshold`.
    pub fn is_settled(&self, threshold: f64) -> bool {
        self.balls.iter().all(|ball| ball.momentum_length() < threshold)
    }

    pub fn total_momentum(&self) -> Vector {
        self.balls.iter().map(|ball| ball.momentum).sum()
    }
}
