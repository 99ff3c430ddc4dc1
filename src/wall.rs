use crate::geometry::Vector;
use crate::table::Table;

/// One edge of the playable interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    Right,
    Left,
    Bottom,
    Top,
}

impl Wall {
    /// Order in which borders are tested when a path leaves the interior.
    pub const PRIORITY: [Wall; 4] = [Wall::Right, Wall::Left, Wall::Bottom, Wall::Top];

    /// Unit normal pointing into the table.
    pub fn normal(&self) -> Vector {
        match self {
            Wall::Right => Vector::new(-1., 0.),
            Wall::Left => Vector::new(1., 0.),
            Wall::Bottom => Vector::new(0., -1.),
            Wall::Top => Vector::new(0., 1.),
        }
    }

    /// Left and right walls are vertical; a path reflecting off them flips its x travel.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Wall::Right | Wall::Left)
    }

    /// Coordinate of the interior edge along the wall's axis.
    pub fn offset(&self, table: &Table) -> f64 {
        match self {
            Wall::Right => table.interior_max().x,
            Wall::Left => table.interior_min().x,
            Wall::Bottom => table.interior_max().y,
            Wall::Top => table.interior_min().y,
        }
    }

    /// Reflects a travel angle off this wall.
    pub fn reflect_angle(&self, angle: f64) -> f64 {
        if self.is_vertical() {
            std::f64::consts::PI - angle
        } else {
            -angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::direction;
    use approx::assert_relative_eq;

    #[test]
    fn reflection_negates_the_normal_component() {
        let angle = 0.7;
        for wall in Wall::PRIORITY.iter() {
            let before = direction(angle);
            let after = direction(wall.reflect_angle(angle));
            let n = wall.normal();
            assert_relative_eq!(after.dot(&n), -before.dot(&n), epsilon = 1e-12);
            let tangent = Vector::new(-n.y, n.x);
            assert_relative_eq!(after.dot(&tangent), before.dot(&tangent), epsilon = 1e-12);
        }
    }

    #[test]
    fn offsets_follow_the_interior() {
        let table = Table::default();
        assert_eq!(Wall::Right.offset(&table), 957.);
        assert_eq!(Wall::Left.offset(&table), 67.);
        assert_eq!(Wall::Bottom.offset(&table), 511.);
        assert_eq!(Wall::Top.offset(&table), 67.);
    }
}
