use super::{collidable::Contact, colliders::collide_ball_ball};
use crate::{ball::Ball, geometry::distance, table::Table};
use log::debug;

/// Resolves every overlapping pair once, in index order.
///
/// Plain O(n²) over all pairs. Later pairs see the nudges applied by earlier ones.
pub fn resolve_ball_collisions(balls: &mut [Ball], table: &Table) -> Vec<Contact> {
    let contact_distance = 2. * table.ball_radius();
    let mut contacts = Vec::new();
    for j in 1..balls.len() {
        let (head, tail) = balls.split_at_mut(j);
        let ball2 = &mut tail[0];
        for (i, ball1) in head.iter_mut().enumerate() {
            if distance(&ball1.position, &ball2.position) >= contact_distance {
                continue;
            }
            if let Some(impulse) = collide_ball_ball(ball1, ball2) {
                debug!("Collision {} {} with impulse {}", i, j, impulse);
                contacts.push(Contact {
                    first: i,
                    second: j,
                    impulse,
                });
            }
        }
    }
    contacts
}
