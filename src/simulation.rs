//! Tick-by-tick stepping of a rack.
//!
//! The host calls [`Simulation::tick`] (or the bare [`step_simulation`]) once per
//! animation frame. Nothing here blocks or schedules; stopping is simply not
//! calling again.

use crate::{
    advance::advance_single_ball,
    collision::{resolve_ball_collisions, Contact},
    error::SimulationError,
    rack::Rack,
    table::Table,
};
use log::{debug, info, warn};

/// Momentum length under which a ball counts as stopped.
pub const SETTLE_THRESHOLD: f64 = 0.1;
/// Safety cap on the ticks of a single shot.
pub const MAX_TICKS: u64 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub settle_threshold: f64,
    pub max_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            settle_threshold: SETTLE_THRESHOLD,
            max_ticks: MAX_TICKS,
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub settled: bool,
    pub contacts: Vec<Contact>,
    pub wall_hits: usize,
}

/// Advances every ball by one tick and reports what happened.
///
/// Ball-ball collisions first, then wall bounce, integration and friction per ball.
/// Once every ball is slower than the threshold all momenta are zeroed, since
/// damping alone never reaches zero.
pub fn step(rack: &mut Rack, table: &Table, config: &SimulationConfig) -> TickReport {
    let contacts = resolve_ball_collisions(rack.balls_mut(), table);
    let wall_hits = rack
        .balls_mut()
        .iter_mut()
        .map(|ball| advance_single_ball(ball, table).iter().count())
        .sum();

    let settled = rack.is_settled(config.settle_threshold);
    if settled {
        rack.reset_momenta();
    }
    TickReport {
        settled,
        contacts,
        wall_hits,
    }
}

/// One tick; returns whether the rack has settled.
pub fn step_simulation(rack: &mut Rack, table: &Table, config: &SimulationConfig) -> bool {
    step(rack, table, config).settled
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationClock {
    pub ticks: u64,
}

/// Drives a shot tick by tick and enforces the tick cap.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
    clock: SimulationClock,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Simulation {
        Simulation {
            config,
            clock: SimulationClock::default(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks spent on the current shot.
    pub fn ticks(&self) -> u64 {
        self.clock.ticks
    }

    /// Runs one tick. `Ok(true)` once the rack settles; when the cap is hit the
    /// balls are stopped and `DidNotSettle` is returned. Either way the clock restarts.
    pub fn tick(&mut self, rack: &mut Rack, table: &Table) -> Result<bool, SimulationError> {
        self.clock.ticks += 1;
        let report = step(rack, table, &self.config);
        if !report.contacts.is_empty() || report.wall_hits > 0 {
            debug!(
                "Tick {}: {} contacts, {} wall hits",
                self.clock.ticks,
                report.contacts.len(),
                report.wall_hits
            );
        }
        if report.settled {
            info!("Settled after {} ticks", self.clock.ticks);
            self.clock = SimulationClock::default();
            return Ok(true);
        }
        if self.clock.ticks >= self.config.max_ticks {
            let ticks = self.clock.ticks;
            warn!("Shot still moving after {} ticks, stopping all balls", ticks);
            rack.reset_momenta();
            self.clock = SimulationClock::default();
            return Err(SimulationError::DidNotSettle { ticks });
        }
        Ok(false)
    }

    /// Ticks until the rack settles and returns the tick count.
    pub fn run_until_settled(
        &mut self,
        rack: &mut Rack,
        table: &Table,
    ) -> Result<u64, SimulationError> {
        loop {
            let ticks = self.clock.ticks + 1;
            if self.tick(rack, table)? {
                return Ok(ticks);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ball::Color,
        geometry::{Point, Vector},
        rack::create_rack,
    };

    fn lone_ball(table: &Table, momentum: Vector) -> Rack {
        let mut rack = create_rack(table, &[Point::new(500., 300.)], &[Color::RED]).unwrap();
        rack.set_momentum(0, momentum).unwrap();
        rack
    }

    #[test]
    fn resting_rack_settles_immediately() {
        let table = Table::default();
        let mut rack = lone_ball(&table, Vector::zeros());
        assert!(step_simulation(&mut rack, &table, &SimulationConfig::default()));
        assert_eq!(rack.balls()[0].position, Point::new(500., 300.));
    }

    #[test]
    fn settling_zeroes_residual_momentum() {
        let table = Table::default();
        let mut rack = lone_ball(&table, Vector::new(0.1, 0.));
        // 0.1 * 0.99 drops under the threshold after the first tick.
        assert!(step_simulation(&mut rack, &table, &SimulationConfig::default()));
        assert_eq!(rack.balls()[0].momentum, Vector::zeros());
    }

    #[test]
    fn run_until_settled_counts_ticks() {
        let table = Table::default();
        let mut rack = lone_ball(&table, Vector::new(1., 0.));
        let mut simulation = Simulation::default();
        let ticks = simulation.run_until_settled(&mut rack, &table).unwrap();
        // 1 * 0.99^n < 0.1 first holds at n = 230.
        assert_eq!(ticks, 230);
        assert_eq!(simulation.ticks(), 0);
    }

    #[test]
    fn frictionless_table_hits_the_tick_cap() {
        let table = Table::default().with_damping(1.).unwrap();
        let mut rack = lone_ball(&table, Vector::new(3., 2.));
        let mut simulation = Simulation::new(SimulationConfig {
            max_ticks: 50,
            ..SimulationConfig::default()
        });
        assert_eq!(
            simulation.run_until_settled(&mut rack, &table),
            Err(SimulationError::DidNotSettle { ticks: 50 })
        );
        assert!(rack.is_settled(SETTLE_THRESHOLD));
    }
}
