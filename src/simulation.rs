use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Instant;

use clap::ArgMatches;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::Vector3;
use serde_derive::*;
use tracing::info;

use particles::{Command, Portfolio, SceneState, SurfaceRect};

use crate::config_from_args;

const DEFAULT_FRAMES: usize = 600;
const DEFAULT_FPS: f32 = 60.;

/// Command fired once `time` seconds of simulation have elapsed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScriptEntry {
    pub time: f32,
    pub command: Command,
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptEntry>, Box<dyn std::error::Error>> {
    let mut script: Vec<ScriptEntry> = serde_yaml::from_reader(File::open(path)?)?;
    script.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));

    Ok(script)
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Snapshot {
    pub frame: usize,
    pub time: f32,
    pub state: SceneState,
    pub camera: Vector3<f32>,
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl Snapshot {
    pub fn capture(portfolio: &Portfolio, frame: usize) -> Snapshot {
        Snapshot {
            frame,
            time: portfolio.simulation().time(),
            state: portfolio.current_state(),
            camera: portfolio.camera().position(),
            positions: portfolio.store().positions().to_vec(),
            colors: portfolio.store().colors().to_vec(),
        }
    }

    pub fn dump(&self, path: &Path) -> Result<(), std::io::Error> {
        let buffer = BufWriter::new(File::create(path)?);
        let encoder = ZlibEncoder::new(buffer, Compression::default());
        serde_json::to_writer(encoder, self)?;

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, std::io::Error> {
        let buffer = BufReader::new(File::open(path)?);
        let decoder = ZlibDecoder::new(buffer);
        let obj: Self = serde_json::from_reader(decoder)?;

        Ok(obj)
    }
}

/// Runs `frames` fixed steps, feeding script commands as their time comes.
pub fn simulate(
    portfolio: &mut Portfolio,
    script: &[ScriptEntry],
    frames: usize,
    fps: f32,
    dump_folder: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dt = 1. / fps;
    let mut next = 0;

    portfolio.start();

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(ProgressStyle::default_bar().template("[{elapsed}] [{per_sec}] [{eta}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}"));

    for frame in 0..frames {
        let time = frame as f32 * dt;

        while next < script.len() && script[next].time <= time {
            portfolio.push(script[next].command.clone());
            next += 1;
        }

        portfolio.tick(dt);

        if let Some(folder) = dump_folder {
            let path = folder.join(format!("{:08}.snap.bin", frame));
            Snapshot::capture(portfolio, frame).dump(&path)?;
        }

        pb.set_message(&format!("state: {}", portfolio.current_state()));
        pb.inc(1);
    }

    pb.finish_with_message("simulation done");

    Ok(())
}

pub fn main_simulation(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_args(args)?;

    let frames = match args.value_of("frames") {
        Some(v) => v.parse::<usize>()?,
        None => DEFAULT_FRAMES,
    };
    let fps = match args.value_of("fps") {
        Some(v) => v.parse::<f32>()?,
        None => DEFAULT_FPS,
    };
    if fps <= 0. {
        return Err(format!("fps must be positive, got {}", fps).into());
    }

    let script = match args.value_of("script") {
        Some(path) => load_script(Path::new(path))?,
        None => vec![],
    };

    let dump_folder = args.value_of("dump").map(Path::new);
    if let Some(folder) = dump_folder {
        fs::create_dir_all(folder)?;
    }

    let now = Instant::now();
    let mut portfolio = Portfolio::new(config);
    portfolio.push(Command::SurfaceResized {
        rect: SurfaceRect::new(1280., 720.),
    });

    simulate(&mut portfolio, &script, frames, fps, dump_folder)?;

    info!(
        frames,
        commands = script.len(),
        state = %portfolio.current_state(),
        elapsed_s = now.elapsed().as_secs_f32(),
        "headless run finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use particles::Config;

    fn portfolio() -> Portfolio {
        let mut config = Config::default();
        config.particle_count = 30;
        config.seed = Some(8);
        Portfolio::new(config)
    }

    #[test]
    fn script_is_sorted_by_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.yml");
        fs::write(
            &path,
            "- time: 1.0\n  command:\n    type: paint_entered\n- time: 0.5\n  command:\n    type: state_requested\n    state: about\n",
        )
        .unwrap();

        let script = load_script(&path).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(script[0].time, 0.5);
        assert_eq!(script[1].command, Command::PaintEntered);
    }

    #[test]
    fn scripted_run_dumps_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let script = vec![ScriptEntry {
            time: 0.1,
            command: Command::StateRequested {
                state: SceneState::Contact,
            },
        }];

        let mut portfolio = portfolio();
        simulate(&mut portfolio, &script, 12, 60., Some(dir.path())).unwrap();

        assert_eq!(portfolio.current_state(), SceneState::Contact);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 12);

        let last = Snapshot::load(&dir.path().join(format!("{:08}.snap.bin", 11))).unwrap();
        assert_eq!(last.frame, 11);
        assert_eq!(last.state, SceneState::Contact);
        assert_eq!(last.positions.len(), 90);

        let first = Snapshot::load(&dir.path().join(format!("{:08}.snap.bin", 0))).unwrap();
        assert_eq!(first.state, SceneState::Home);
    }
}
