use thiserror::Error;

/// Rejected table configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("table parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("border thickness must not be negative, got {0}")]
    NegativeBorder(f64),
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("momentum damping must lie in (0, 1], got {0}")]
    DampingOutOfRange(f64),
    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("playable interior {width}x{height} cannot hold a ball of radius {radius}")]
    InteriorTooSmall { width: f64, height: f64, radius: f64 },
}

/// Rejected rack mutation. The rack keeps its previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RackError {
    #[error("a rack needs at least one ball")]
    Empty,
    #[error("got {positions} positions but {colors} colors")]
    LengthMismatch { positions: usize, colors: usize },
    #[error("ball index {index} out of range for a rack of {len}")]
    NoSuchBall { index: usize, len: usize },
    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
    #[error("momentum ({x}, {y}) is not finite")]
    NonFiniteMomentum { x: f64, y: f64 },
    #[error("position ({x}, {y}) puts the ball outside the playable interior")]
    OutsideTable { x: f64, y: f64 },
    #[error("no room left for ball {placed} after {attempts} attempts")]
    NoRoom { placed: usize, attempts: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("balls still moving after {ticks} ticks")]
    DidNotSettle { ticks: u64 },
}
