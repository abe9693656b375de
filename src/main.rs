//! NPC Arena - Entry Point
//!
//! Generates (or loads) a population, saves it, reloads it from disk and lets
//! it fight at growing ranges, logging every fight to the console and a file.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use npc_arena::core::error::Result;
use npc_arena::core::ArenaConfig;
use npc_arena::observer::{CompositeObserver, FightLog, FileObserver, TextObserver};
use npc_arena::simulation::{run_campaign, NpcSnapshot, Roster};
use npc_arena::world::{load_file, save_file, PopulationGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// NPC Arena - Toads, Dragons and Knights fight it out
#[derive(Parser, Debug)]
#[command(name = "npc-arena")]
#[command(about = "Run a proximity combat simulation between NPCs")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of NPCs to generate
    #[arg(long)]
    count: Option<usize>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Load the population from a record file instead of generating it
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where to save the population before fighting
    #[arg(long)]
    save: Option<PathBuf>,

    /// Where to write one line per fight
    #[arg(long)]
    fight_log: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (per-fight narration, skipped records)
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ArenaConfig> {
        let mut config = match &self.config {
            Some(path) => ArenaConfig::load(path)?,
            None => ArenaConfig::default(),
        };

        if let Some(count) = self.count {
            config.population_size = count;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(save) = &self.save {
            config.save_path = save.clone();
        }
        if let Some(fight_log) = &self.fight_log {
            config.fight_log_path = fight_log.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_directive = if args.verbose {
        "npc_arena=debug"
    } else {
        "npc_arena=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = args.resolve_config()?;
    let text = args.format == OutputFormat::Text;

    let population = match &args.load {
        Some(path) => load_file(path)?.npcs,
        None => {
            let mut generator = match config.seed {
                Some(seed) => PopulationGenerator::with_seed(seed),
                None => PopulationGenerator::from_entropy(),
            };
            config.seed = Some(generator.seed());
            tracing::info!(
                "Creating {} NPCs (seed {})",
                config.population_size,
                generator.seed()
            );
            generator.generate(config.population_size)?
        }
    };

    save_file(&config.save_path, &population)?;
    let population = load_file(&config.save_path)?.npcs;

    if text {
        println!("Initial state:\n{}", Roster(&NpcSnapshot::all(&population)));
    }

    let fight_log = Rc::new(RefCell::new(FightLog::new()));
    let file_sink = Rc::new(RefCell::new(FileObserver::create_file(&config.fight_log_path)?));

    let mut observer = CompositeObserver::new();
    if text {
        observer.add(TextObserver::stdout());
    }
    observer.add(Rc::clone(&file_sink));
    observer.add(Rc::clone(&fight_log));

    let output = run_campaign(population, &config, &mut observer);
    file_sink.borrow_mut().flush()?;

    tracing::info!(
        "{} fights recorded, {} won by the attacker",
        fight_log.borrow().len(),
        fight_log.borrow().victories().count()
    );

    if text {
        for round in &output.rounds {
            println!("{}", round);
        }
        println!("{}", output.summary());
        println!("Final alive:\n{}", Roster(&output.survivors));
    } else {
        println!("{}", output.to_json()?);
    }

    Ok(())
}
