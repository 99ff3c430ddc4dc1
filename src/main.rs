use billiards::{
    render::{render_ascii, DisplayConfig, Frame},
    world_gen::standard_rack,
    Interaction, Point, Table, TickOutcome,
};
use log::{debug, info, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::error::Error;

const WIDTH: u32 = 96;
const HEIGHT: u32 = 28;
const FRAMES_BETWEEN_SNAPSHOTS: u64 = 60;

fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn parse_level(arg: Option<&str>) -> LevelFilter {
    match arg {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        _ => LevelFilter::Info,
    }
}

/// Plays one scripted break: grab the cue ball, pull it back, release, run until settled.
pub fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::args().nth(1);
    init_logging(parse_level(level.as_deref()))?;

    let display = DisplayConfig {
        width: WIDTH,
        height: HEIGHT,
    };
    let table = Table::default();
    let mut rack = standard_rack(&table)?;
    let mut interaction = Interaction::default();

    let cue = rack.cue_ball().map(|ball| ball.position).ok_or("empty rack")?;
    interaction.pointer_down(&rack, &table, &cue);
    let aim = interaction.pointer_move(&rack, &table, Point::new(cue.x - 300., cue.y + 4.));
    info!("Aiming:\n{}", render_ascii(&Frame::capture(&rack, &table, aim), &display));

    if interaction.pointer_up(&mut rack, &table).is_none() {
        info!("Nothing happened");
        return Ok(());
    }

    let mut frames = 0;
    loop {
        frames += 1;
        match interaction.tick(&mut rack, &table) {
            TickOutcome::Moving => {
                if frames % FRAMES_BETWEEN_SNAPSHOTS == 0 {
                    debug!(
                        "Frame {}:\n{}",
                        frames,
                        render_ascii(&Frame::capture(&rack, &table, None), &display)
                    );
                }
            }
            outcome => {
                info!("{:?} after {} frames", outcome, frames);
                break;
            }
        }
    }
    info!(
        "Final table:\n{}",
        render_ascii(&Frame::capture(&rack, &table, None), &display)
    );
    Ok(())
}
