use crate::wall::Wall;

/// Slack allowed when checking that a computed point lies on a border.
pub const EPSILON: f64 = 1e-9;

/// A resolved ball-ball collision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub first: usize,
    pub second: usize,
    pub impulse: f64,
}

/// Walls a ball bounced off during one tick, at most one per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: Option<Wall>,
    pub y: Option<Wall>,
}

impl WallHits {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = Wall> {
        self.x.into_iter().chain(self.y)
    }
}
