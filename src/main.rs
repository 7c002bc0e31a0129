use broadside::{init_logging, AiPlayer, CliPlayer, Combatant, MatchEngine, RevealMode};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the scripted opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Captain", help = "Your combatant name")]
        name: String,
        #[arg(long, help = "Conceal misses on the enemy tracking board")]
        hits_only: bool,
        #[arg(long, help = "Deploy your fleet automatically")]
        auto: bool,
    },
    /// Watch two scripted opponents fight each other.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible matches (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn build_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (match will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            name,
            hits_only,
            auto,
        } => {
            let mut rng = build_rng(seed);
            let reveal = if hits_only {
                RevealMode::HitsOnly
            } else {
                RevealMode::HitsAndMisses
            };
            let human = Combatant::new(name, Box::new(CliPlayer::new(reveal, auto)));
            let enemy = Combatant::new("Enemy fleet", Box::new(AiPlayer::new()));
            let mut engine = MatchEngine::new(human, enemy);
            let winner = engine.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("\n{} wins the match!", winner);
        }
        Commands::Auto { seed } => {
            let mut rng = build_rng(seed);
            let alpha = Combatant::new("Fleet Alpha", Box::new(AiPlayer::new()));
            let bravo = Combatant::new("Fleet Bravo", Box::new(AiPlayer::new()));
            let mut engine = MatchEngine::new(alpha, bravo);
            let winner = engine.run(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
            println!("{} wins after {} turn(s).", winner, engine.turns_played());
        }
    }
    Ok(())
}
