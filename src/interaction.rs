//! Player interaction phases.
//!
//! ```text
//! None --pointer_down on a ball--> Aiming --pointer_up with a shot--> Shooting
//!   ^                                 |                                   |
//!   +------ cancel / empty drag ------+                                   |
//!   +--------------------------- settled ---------------------------------+
//! ```
//!
//! [`Interaction`] is the only thing deciding which core operation may touch the
//! rack: aiming only reads it, shooting steps it. Calls that do not fit the current
//! phase are ignored.

use crate::{
    ball::Color,
    error::{RackError, SimulationError},
    geometry::{Point, Vector},
    rack::Rack,
    shot::compute_shot_momentum,
    simulation::{Simulation, SimulationConfig},
    table::Table,
    trajectory::{compute_trajectory, Trajectory},
};
use log::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    None,
    Aiming,
    Shooting,
}

impl Default for PlayerAction {
    fn default() -> Self {
        PlayerAction::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not shooting, nothing was stepped.
    Idle,
    Moving,
    Settled,
    /// The tick cap ran out and the balls were stopped.
    Stopped,
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
    action: PlayerAction,
    selected: Option<usize>,
    pull: Option<Point>,
    simulation: Simulation,
}

impl Interaction {
    pub fn new(config: SimulationConfig) -> Interaction {
        Interaction {
            simulation: Simulation::new(config),
            ..Interaction::default()
        }
    }

    pub fn action(&self) -> PlayerAction {
        self.action
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn pull(&self) -> Option<Point> {
        self.pull
    }

    fn ignore(&self, what: &str) {
        debug!("Ignoring {} while {:?}", what, self.action);
    }

    fn reset(&mut self) {
        self.action = PlayerAction::None;
        self.selected = None;
        self.pull = None;
    }

    /// Starts aiming with the ball under `point`, if any.
    pub fn pointer_down(&mut self, rack: &Rack, table: &Table, point: &Point) -> Option<usize> {
        if self.action != PlayerAction::None {
            self.ignore("pointer down");
            return None;
        }
        let index = rack.ball_index_at(table, point)?;
        self.action = PlayerAction::Aiming;
        self.selected = Some(index);
        self.pull = None;
        Some(index)
    }

    /// Records the pull point and returns the aim line to draw.
    pub fn pointer_move(&mut self, rack: &Rack, table: &Table, point: Point) -> Option<Trajectory> {
        if self.action != PlayerAction::Aiming {
            self.ignore("pointer move");
            return None;
        }
        self.pull = Some(point);
        self.aim_line(rack, table)
    }

    /// Aim line for the current selection and pull, recomputed from scratch.
    pub fn aim_line(&self, rack: &Rack, table: &Table) -> Option<Trajectory> {
        if self.action != PlayerAction::Aiming {
            return None;
        }
        let ball = rack.get(self.selected?)?;
        let pull = self.pull?;
        Some(compute_trajectory(table, ball.position, pull, table.max_aim_line_length()))
    }

    /// Fires the shot. Returns the momentum given to the selected ball, or `None`
    /// when nothing happened and the phase went back to `None`.
    pub fn pointer_up(&mut self, rack: &mut Rack, table: &Table) -> Option<Vector> {
        if self.action != PlayerAction::Aiming {
            self.ignore("pointer up");
            return None;
        }
        let shot = self.selected.zip(self.pull).and_then(|(index, pull)| {
            let start = rack.get(index)?.position;
            let momentum = compute_shot_momentum(table, &start, &pull)?;
            rack.set_momentum(index, momentum).ok()?;
            Some((index, momentum))
        });
        match shot {
            Some((index, momentum)) => {
                info!("Shot ball {} with momentum {:?}", index, momentum);
                self.action = PlayerAction::Shooting;
                Some(momentum)
            }
            None => {
                debug!("Released without a shot");
                self.reset();
                None
            }
        }
    }

    /// Abandons aiming without touching the rack.
    pub fn cancel(&mut self) -> bool {
        if self.action != PlayerAction::Aiming {
            self.ignore("cancel");
            return false;
        }
        self.reset();
        true
    }

    /// Advances the running shot by one tick.
    pub fn tick(&mut self, rack: &mut Rack, table: &Table) -> TickOutcome {
        if self.action != PlayerAction::Shooting {
            return TickOutcome::Idle;
        }
        match self.simulation.tick(rack, table) {
            Ok(false) => TickOutcome::Moving,
            Ok(true) => {
                self.reset();
                TickOutcome::Settled
            }
            Err(SimulationError::DidNotSettle { .. }) => {
                self.reset();
                TickOutcome::Stopped
            }
        }
    }

    /// Paints the ball under `point`. Not allowed while balls are moving.
    pub fn recolor(
        &mut self,
        rack: &mut Rack,
        table: &Table,
        point: &Point,
        color: Color,
    ) -> Result<Option<usize>, RackError> {
        if self.action == PlayerAction::Shooting {
            self.ignore("recolor");
            return Ok(None);
        }
        match rack.ball_index_at(table, point) {
            Some(index) => {
                rack.set_color(index, color)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }
}
