use super::collidable::EPSILON;
use crate::{geometry::Point, table::Table, wall::Wall};

/// Where the segment `origin -> end` leaves the playable interior.
///
/// Borders are tried in [`Wall::PRIORITY`] order and the first one the segment
/// crosses within the border's extent wins. Returns `None` when `end` is inside the
/// interior or the geometry is degenerate (e.g. `origin` itself lies outside).
pub fn solve_border_crossing(origin: &Point, end: &Point, table: &Table) -> Option<(Point, Wall)> {
    let (min, max) = (table.interior_min(), table.interior_max());
    let travel = end - origin;

    for &wall in Wall::PRIORITY.iter() {
        let offset = wall.offset(table);
        let (end_normal, origin_normal, travel_normal, origin_tangent, travel_tangent, lo, hi) =
            if wall.is_vertical() {
                (end.x, origin.x, travel.x, origin.y, travel.y, min.y, max.y)
            } else {
                (end.y, origin.y, travel.y, origin.x, travel.x, min.x, max.x)
            };
        let beyond = match wall {
            Wall::Right | Wall::Bottom => end_normal > offset,
            Wall::Left | Wall::Top => end_normal < offset,
        };
        if !beyond || travel_normal == 0. {
            continue;
        }
        let t = (offset - origin_normal) / travel_normal;
        if !(0. ..=1.).contains(&t) {
            continue;
        }
        let hit = origin_tangent + t * travel_tangent;
        if hit < lo - EPSILON || hit > hi + EPSILON {
            continue;
        }
        let hit = hit.max(lo).min(hi);
        let point = if wall.is_vertical() {
            Point::new(offset, hit)
        } else {
            Point::new(hit, offset)
        };
        return Some((point, wall));
    }
    None
}
