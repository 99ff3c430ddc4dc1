//! Table configuration.
//!
//! A [`Table`] is immutable once built; every constructor validates the
//! geometry so the simulation can rely on a non-degenerate interior.

use crate::error::TableError;
use crate::geometry::Point;
use log::warn;

pub const POOL_TABLE_WIDTH: f64 = 1024.;
pub const POOL_TABLE_HEIGHT: f64 = 578.;
pub const POOL_TABLE_BORDER_THICKNESS: f64 = 67.;
pub const BALL_RADIUS: f64 = 16.;
pub const MAX_AIM_LINE_LENGTH: f64 = 400.;
pub const MAX_BALL_MOMENTUM: f64 = 600.;
pub const BALL_MOMENTUM_MULTIPLIER: f64 = 1.2;
pub const MOMENTUM_DAMPING: f64 = 0.99;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Table {
    width: f64,
    height: f64,
    border_thickness: f64,
    ball_radius: f64,
    max_momentum: f64,
    momentum_damping: f64,
    momentum_multiplier: f64,
    max_aim_line_length: f64,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            width: POOL_TABLE_WIDTH,
            height: POOL_TABLE_HEIGHT,
            border_thickness: POOL_TABLE_BORDER_THICKNESS,
            ball_radius: BALL_RADIUS,
            max_momentum: MAX_BALL_MOMENTUM,
            momentum_damping: MOMENTUM_DAMPING,
            momentum_multiplier: BALL_MOMENTUM_MULTIPLIER,
            max_aim_line_length: MAX_AIM_LINE_LENGTH,
        }
    }
}

impl Table {
    /// Builds a table of the given geometry with the default shot and friction parameters.
    pub fn new(
        width: f64,
        height: f64,
        border_thickness: f64,
        ball_radius: f64,
    ) -> Result<Table, TableError> {
        Table {
            width,
            height,
            border_thickness,
            ball_radius,
            ..Table::default()
        }
        .validated()
    }

    pub fn with_momentum(
        self,
        max_momentum: f64,
        momentum_multiplier: f64,
    ) -> Result<Table, TableError> {
        Table {
            max_momentum,
            momentum_multiplier,
            ..self
        }
        .validated()
    }

    pub fn with_damping(self, momentum_damping: f64) -> Result<Table, TableError> {
        Table {
            momentum_damping,
            ..self
        }
        .validated()
    }

    pub fn with_max_aim_line_length(self, max_aim_line_length: f64) -> Result<Table, TableError> {
        Table {
            max_aim_line_length,
            ..self
        }
        .validated()
    }

    fn validated(self) -> Result<Table, TableError> {
        self.validate().map_err(|err| {
            warn!("Rejected table configuration: {}", err);
            err
        })?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), TableError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("border_thickness", self.border_thickness),
            ("ball_radius", self.ball_radius),
            ("max_momentum", self.max_momentum),
            ("momentum_damping", self.momentum_damping),
            ("momentum_multiplier", self.momentum_multiplier),
            ("max_aim_line_length", self.max_aim_line_length),
        ];
        for &(name, value) in fields.iter() {
            if !value.is_finite() {
                return Err(TableError::NonFinite { name, value });
            }
        }
        if self.border_thickness < 0. {
            return Err(TableError::NegativeBorder(self.border_thickness));
        }
        if self.ball_radius <= 0. {
            return Err(TableError::NonPositiveRadius(self.ball_radius));
        }
        if self.momentum_damping <= 0. || self.momentum_damping > 1. {
            return Err(TableError::DampingOutOfRange(self.momentum_damping));
        }
        for &(name, value) in [
            ("max_momentum", self.max_momentum),
            ("momentum_multiplier", self.momentum_multiplier),
            ("max_aim_line_length", self.max_aim_line_length),
        ]
        .iter()
        {
            if value < 0. {
                return Err(TableError::Negative { name, value });
            }
        }
        let interior_width = self.width - 2. * self.border_thickness;
        let interior_height = self.height - 2. * self.border_thickness;
        let diameter = 2. * self.ball_radius;
        if interior_width <= diameter || interior_height <= diameter {
            return Err(TableError::InteriorTooSmall {
                width: interior_width,
                height: interior_height,
                radius: self.ball_radius,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn border_thickness(&self) -> f64 {
        self.border_thickness
    }

    pub fn ball_radius(&self) -> f64 {
        self.ball_radius
    }

    pub fn max_momentum(&self) -> f64 {
        self.max_momentum
    }

    /// Per-tick multiplicative friction.
    pub fn momentum_damping(&self) -> f64 {
        self.momentum_damping
    }

    /// Drag distance to shot power scale.
    pub fn momentum_multiplier(&self) -> f64 {
        self.momentum_multiplier
    }

    pub fn max_aim_line_length(&self) -> f64 {
        self.max_aim_line_length
    }

    /// Top-left corner of the playable interior.
    pub fn interior_min(&self) -> Point {
        Point::new(self.border_thickness, self.border_thickness)
    }

    /// Bottom-right corner of the playable interior.
    pub fn interior_max(&self) -> Point {
        Point::new(
            self.width - self.border_thickness,
            self.height - self.border_thickness,
        )
    }

    pub fn interior_contains(&self, p: &Point) -> bool {
        let (min, max) = (self.interior_min(), self.interior_max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Lowest coordinates a ball center may take.
    pub fn ball_min(&self) -> Point {
        let inset = self.border_thickness + self.ball_radius;
        Point::new(inset, inset)
    }

    /// Highest coordinates a ball center may take.
    pub fn ball_max(&self) -> Point {
        let inset = self.border_thickness + self.ball_radius;
        Point::new(self.width - inset, self.height - inset)
    }

    /// Whether a ball centered at `p` lies fully within the interior.
    pub fn holds_ball_at(&self, p: &Point) -> bool {
        let (min, max) = (self.ball_min(), self.ball_max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}
