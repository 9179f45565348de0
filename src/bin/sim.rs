use anyhow::Context;
use clap::{Parser, ValueEnum};
use gridshot::{
    init_logging, BattleshipEnv, InvalidActionPolicy, Policy, SearchBot, SweepBot,
    TOTAL_SHIP_CELLS,
};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BotKind {
    /// Run-length targeting heuristic.
    Search,
    /// Diagonal-sweep explorer.
    Sweep,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InvalidMode {
    /// Re-resolve repeated attacks (idempotent).
    Allow,
    /// Reward -1 for repeated attacks without advancing the game.
    Punish,
    /// Advance repeated attacks to the next free cell in raster order.
    Skip,
}

impl From<InvalidMode> for InvalidActionPolicy {
    fn from(mode: InvalidMode) -> Self {
        match mode {
            InvalidMode::Allow => InvalidActionPolicy::Allow,
            InvalidMode::Punish => InvalidActionPolicy::Punish,
            InvalidMode::Skip => InvalidActionPolicy::Skip,
        }
    }
}

/// Run bot-vs-environment episodes and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 1000)]
    episodes: usize,
    #[arg(long, value_enum, default_value_t = BotKind::Search)]
    bot: BotKind,
    #[arg(long, value_enum, default_value_t = InvalidMode::Allow)]
    invalid: InvalidMode,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Serialize)]
struct Summary {
    episodes: usize,
    bot: String,
    mean_shots: f64,
    min_shots: usize,
    max_shots: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::seed_from_u64(rand::rng().random()),
    };

    let declared = gridshot::default_fleet();
    let mut bot: Box<dyn Policy> = match cli.bot {
        BotKind::Search => Box::new(SearchBot::new(declared.clone())),
        BotKind::Sweep => Box::new(SweepBot::new(declared.clone())),
    };

    let mut env = BattleshipEnv::new(cli.invalid.into());
    let mut shots_per_episode = Vec::with_capacity(cli.episodes);

    for episode in 0..cli.episodes {
        let mut step = env.reset(&mut rng).context("resetting environment")?;
        let mut shots = 0usize;
        loop {
            let action = bot
                .choose(&step)
                .with_context(|| format!("choosing action in episode {}", episode))?;
            if step.terminated {
                break;
            }
            step = env
                .step(&mut rng, action)
                .with_context(|| format!("stepping environment in episode {}", episode))?;
            shots += 1;
        }
        info!(
            "episode {} finished in {} shots ({} segments revealed)",
            episode, shots, TOTAL_SHIP_CELLS
        );
        shots_per_episode.push(shots);
    }

    let total: usize = shots_per_episode.iter().sum();
    let summary = Summary {
        episodes: cli.episodes,
        bot: format!("{:?}", cli.bot),
        mean_shots: total as f64 / cli.episodes.max(1) as f64,
        min_shots: shots_per_episode.iter().copied().min().unwrap_or(0),
        max_shots: shots_per_episode.iter().copied().max().unwrap_or(0),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
