#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    use rand::{rngs::SmallRng, SeedableRng};
    use salvo::{run_solo, HunterOffense, OffenseConfig, RandomOffense, RandomPlacement, DEFAULT_BOARD_SIZE};
    use serde_json::json;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    if games == 0 {
        return Err(anyhow::anyhow!("games must be at least 1"));
    }

    let mut rng_hunter = SmallRng::seed_from_u64(seed);
    let mut rng_random = SmallRng::seed_from_u64(seed);
    let mut hunter_shots = Vec::with_capacity(games);
    let mut random_shots = Vec::with_capacity(games);

    for _ in 0..games {
        let mut hunter = HunterOffense::new(OffenseConfig::default());
        let summary = run_solo::<DEFAULT_BOARD_SIZE, _, _, _>(
            &mut hunter,
            &mut RandomPlacement,
            &mut rng_hunter,
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        hunter_shots.push(summary.shots);

        let summary = run_solo::<DEFAULT_BOARD_SIZE, _, _, _>(
            &mut RandomOffense,
            &mut RandomPlacement,
            &mut rng_random,
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        random_shots.push(summary.shots);
    }

    let mean = |v: &[usize]| v.iter().sum::<usize>() as f64 / v.len() as f64;
    let result = json!({
        "seed": seed,
        "games": games,
        "hunter": {"mean_shots": mean(&hunter_shots), "shots": hunter_shots},
        "random": {"mean_shots": mean(&random_shots), "shots": random_shots},
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
