//! Metro Runner headless driver
//!
//! Runs a full session without a window: walks through the title and
//! selection screens with synthetic key presses, then lets the autopilot play
//! until the run ends or the frame budget is spent.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use metro_runner::audio::{AudioManager, AudioSink, SoundEffect};
use metro_runner::input::{InputGateway, Key};
use metro_runner::persistence::{FileStore, ScoreStore};
use metro_runner::settings::Settings;
use metro_runner::sim::{Character, FrameInput, GamePhase, GameState, autopilot, tick};
use metro_runner::snapshot::FrameSnapshot;

#[derive(Parser, Debug)]
#[command(
    about = "Run a headless Metro Runner session driven by the autopilot",
    version
)]
struct Args {
    /// Maximum frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Character index (0-3)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..4))]
    character: u8,
    /// Spawner seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    /// Score record file (overrides settings)
    #[arg(long)]
    save_path: Option<PathBuf>,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
}

/// Synthetic key script for the menus: (keys held, frames held)
fn menu_script(character: usize) -> Vec<(Vec<Key>, u32)> {
    let mut script = vec![(vec![Key::Enter], 1), (vec![], 1)];
    for _ in 0..character {
        script.push((vec![Key::Right], 1));
        script.push((vec![], 1));
    }
    script.push((vec![Key::Space], 1));
    script.push((vec![], 1));
    script
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load(&args.settings);
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(path) = args.save_path {
        settings.save_path = path;
    }
    let seed = match settings.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64,
    };
    let character = Character::from_index(usize::from(args.character));
    log::info!(
        "Metro Runner (headless) starting: seed {}, character {}",
        seed,
        character.name()
    );

    let mut store = FileStore::open(&settings.save_path);
    let mut audio = AudioManager::silent(settings.start_muted);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    let mut gateway = InputGateway::new();
    let mut state = GameState::new(seed);
    let dt = settings.frame_dt(args.dt);

    let script = menu_script(character.index());
    let mut scripted = script
        .iter()
        .flat_map(|(keys, frames)| std::iter::repeat_n(keys.as_slice(), *frames as usize));

    for _ in 0..args.frames {
        let input = match state.phase {
            GamePhase::Playing => autopilot::plan(&state),
            GamePhase::GameOver => break,
            _ => match scripted.next() {
                Some(keys) => gateway.sample(keys),
                None => FrameInput::default(),
            },
        };

        tick(&mut state, &input, dt, &mut store, &mut audio);
        for event in &state.events {
            if let Some(effect) = SoundEffect::for_event(event) {
                audio.play(effect);
            }
        }
        if state.quit {
            break;
        }
    }

    let snapshot = FrameSnapshot::capture(&state, store.record(), audio.is_muted());
    log::info!(
        "Session finished after {} frames in phase {:?}",
        state.frame,
        state.phase
    );
    println!("{}", serde_json::to_string(&snapshot.hud)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_index_is_bounded() {
        let parse = |index: &str| Args::try_parse_from(["metro-runner", "--character", index]);
        assert_eq!(parse("3").unwrap().character, 3);
        assert!(parse("4").is_err());
        assert!(parse("7").is_err());
    }

    #[test]
    fn test_menu_script_steps_right_once_per_index() {
        let rights = menu_script(2)
            .iter()
            .filter(|(keys, _)| keys.as_slice() == [Key::Right])
            .count();
        assert_eq!(rights, 2);
    }
}
