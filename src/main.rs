#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    init_logging, run_solo, DistanceMetric, GameSummary, HuntConfig, HuntPattern, HunterOffense,
    KillStrategy, MarkWeight, OffenseConfig, RandomOffense, RandomPlacement, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum OffenseKind {
    Hunter,
    Random,
}

#[derive(clap::Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct OffenseArgs {
    #[arg(long, value_enum, default_value_t = OffenseKind::Hunter)]
    offense: OffenseKind,
    #[arg(long, value_enum, default_value_t = HuntPattern::Uniform)]
    hunt: HuntPattern,
    #[arg(long, value_enum, default_value_t = MarkWeight::Shots)]
    marks: MarkWeight,
    #[arg(long, value_enum, default_value_t = DistanceMetric::SquaredEuclidean)]
    metric: DistanceMetric,
    #[arg(long, value_enum, default_value_t = KillStrategy::PlacementScored)]
    kill: KillStrategy,
}

#[cfg(feature = "std")]
impl OffenseArgs {
    fn config(&self) -> OffenseConfig {
        OffenseConfig {
            hunt: HuntConfig {
                pattern: self.hunt,
                weight: self.marks,
                metric: self.metric,
            },
            kill: self.kill,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run many solo games and print shot statistics as JSON.
    Simulate {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        offense: OffenseArgs,
    },
    /// Play one solo game and print the final board and shot log.
    Game {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        offense: OffenseArgs,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn play(args: &OffenseArgs, rng: &mut SmallRng) -> anyhow::Result<GameSummary> {
    let mut defense = RandomPlacement;
    let summary = match args.offense {
        OffenseKind::Hunter => {
            let mut offense = HunterOffense::new(args.config());
            run_solo::<DEFAULT_BOARD_SIZE, _, _, _>(&mut offense, &mut defense, rng)
        }
        OffenseKind::Random => {
            run_solo::<DEFAULT_BOARD_SIZE, _, _, _>(&mut RandomOffense, &mut defense, rng)
        }
    };
    summary.map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            games,
            seed,
            offense,
        } => {
            if games == 0 {
                return Err(anyhow::anyhow!("--games must be at least 1"));
            }
            let mut rng = make_rng(seed);
            let mut shots = Vec::with_capacity(games);
            for _ in 0..games {
                shots.push(play(&offense, &mut rng)?.shots);
            }
            let mean = shots.iter().sum::<usize>() as f64 / games as f64;
            let result = json!({
                "offense": format!("{:?}", offense.offense),
                "config": offense.config(),
                "games": games,
                "seed": seed,
                "mean_shots": mean,
                "min_shots": shots.iter().min(),
                "max_shots": shots.iter().max(),
                "shots": shots,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Game { seed, offense } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let summary = play(&offense, &mut rng)?;
            for (turn, outcome) in summary.history.iter().enumerate() {
                println!("{:>3}. {}", turn + 1, outcome);
            }
            println!(
                "Fleet sunk: {} after {} shots ({} hits, {} misses)",
                summary.fleet_sunk, summary.shots, summary.hits, summary.misses
            );
        }
    }
    Ok(())
}
