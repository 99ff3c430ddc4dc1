use crate::geometry::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BROWN: Color = Color::rgb(165, 42, 42);
    pub const LIGHT_GREY: Color = Color::rgb(220, 220, 220);
}

/// Colors a player may paint a ball with.
pub const PALETTE: [Color; 6] = [
    Color::RED,
    Color::YELLOW,
    Color::BLUE,
    Color::PURPLE,
    Color::ORANGE,
    Color::GREEN,
];

pub const CUE_BALL_COLOR: Color = Color::BROWN;
pub const OBJECT_BALL_COLOR: Color = Color::LIGHT_GREY;

/// A ball on the table. The radius is a property of the table, not the ball.
///
/// `momentum` is a per-tick displacement. Positions move *against* it:
/// each tick subtracts the momentum from the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Point,
    pub momentum: Vector,
    pub color: Color,
}

impl Ball {
    pub fn new(position: Point, color: Color) -> Ball {
        Ball {
            position,
            momentum: Vector::zeros(),
            color,
        }
    }

    pub fn momentum_length(&self) -> f64 {
        self.momentum.norm()
    }

    pub fn add_momentum(&mut self, delta: Vector) {
        self.momentum += delta;
    }

    pub fn move_by(&mut self, delta: Vector) {
        self.position += delta;
    }
}
