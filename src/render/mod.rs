//! Read-only draw projection of the table.
//!
//! Nothing in here mutates the rack. A host captures a [`Frame`] after every tick
//! (or pointer move) and draws it however it likes; [`render_ascii`] is the
//! terminal flavour used by the demo binary.

use crate::{
    ball::Color,
    geometry::Point,
    rack::Rack,
    table::Table,
    trajectory::Trajectory,
};

pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub interior_min: Point,
    pub interior_max: Point,
    pub discs: Vec<Disc>,
    pub aim_line: Vec<Point>,
}

impl Frame {
    pub fn capture(rack: &Rack, table: &Table, aim: Option<Trajectory>) -> Frame {
        Frame {
            width: table.width(),
            height: table.height(),
            interior_min: table.interior_min(),
            interior_max: table.interior_max(),
            discs: rack
                .balls()
                .iter()
                .map(|ball| Disc {
                    center: ball.position,
                    radius: table.ball_radius(),
                    color: ball.color,
                })
                .collect(),
            aim_line: aim.map(|trajectory| trajectory.collect()).unwrap_or_default(),
        }
    }
}

const BORDER: char = '#';
const FELT: char = ' ';
const AIM: char = '.';
const CUE: char = '@';
const BALL: char = 'o';

/// Character grid of the frame: borders, aim line, then balls on top.
pub fn render_ascii(frame: &Frame, config: &DisplayConfig) -> String {
    let (cols, rows) = (config.width.max(1) as usize, config.height.max(1) as usize);
    let cell_w = frame.width / cols as f64;
    let cell_h = frame.height / rows as f64;
    let to_cell = |p: &Point| -> Option<(usize, usize)> {
        let (col, row) = ((p.x / cell_w).floor(), (p.y / cell_h).floor());
        if col < 0. || row < 0. || col >= cols as f64 || row >= rows as f64 {
            return None;
        }
        Some((col as usize, row as usize))
    };

    let mut grid = vec![vec![FELT; cols]; rows];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let center = Point::new((col as f64 + 0.5) * cell_w, (row as f64 + 0.5) * cell_h);
            let inside = center.x >= frame.interior_min.x
                && center.x <= frame.interior_max.x
                && center.y >= frame.interior_min.y
                && center.y <= frame.interior_max.y;
            if !inside {
                *cell = BORDER;
            }
        }
    }

    let mut put = |p: &Point, c: char| {
        if let Some((col, row)) = to_cell(p) {
            grid[row][col] = c;
        }
    };
    for segment in frame.aim_line.windows(2) {
        let steps = ((segment[1] - segment[0]).norm() / cell_w.min(cell_h)).ceil().max(1.) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            put(&(segment[0] + (segment[1] - segment[0]) * t), AIM);
        }
    }
    for (index, disc) in frame.discs.iter().enumerate() {
        put(&disc.center, if index == 0 { CUE } else { BALL });
    }

    grid.into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{trajectory::compute_trajectory, world_gen::standard_rack};

    #[test]
    fn capture_projects_every_ball() {
        let table = Table::default();
        let rack = standard_rack(&table).unwrap();
        let cue = rack.balls()[0].position;
        let aim = compute_trajectory(&table, cue, Point::new(cue.x - 10., cue.y), 400.);
        let frame = Frame::capture(&rack, &table, Some(aim));
        assert_eq!(frame.discs.len(), rack.len());
        assert_eq!(frame.discs[0].center, cue);
        assert_eq!(frame.discs[0].radius, 16.);
        assert_eq!(frame.aim_line, vec![cue, Point::new(cue.x + 20., cue.y)]);
    }

    #[test]
    fn ascii_has_borders_and_balls() {
        let table = Table::default();
        let rack = standard_rack(&table).unwrap();
        let frame = Frame::capture(&rack, &table, None);
        let text = render_ascii(&frame, &DisplayConfig { width: 64, height: 24 });
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 24);
        assert!(lines.iter().all(|line| line.chars().count() == 64));
        assert!(lines[0].chars().all(|c| c == BORDER));
        assert_eq!(text.matches(CUE).count(), 1);
        assert!(text.contains(BALL));
    }
}
