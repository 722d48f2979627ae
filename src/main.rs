use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use u_tsp::ga::{GaConfig, GaEngine, Selection};
use u_tsp::io::{parse_instance, write_tour, TspInstance};
use u_tsp::tsp::TspProblem;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectionArg {
    Uniform,
    Tournament,
    Roulette,
    Rank,
}

/// Genetic-algorithm solver for the symmetric TSP.
///
/// Prints the best tour after the first evolve call, then the best tour
/// across the following checkpoints of the same run.
#[derive(Parser)]
#[command(name = "u-tsp", version)]
struct Args {
    /// instance file (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// population size
    #[arg(long, default_value_t = 50)]
    population_size: usize,

    /// generations per evolve call
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// mutation probability
    #[arg(long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// fraction of the population kept as elites
    #[arg(long, default_value_t = 0.2)]
    elite_ratio: f64,

    /// parent selection strategy
    #[arg(long, value_enum, default_value_t = SelectionArg::Uniform)]
    selection: SelectionArg,

    /// tournament size (with --selection tournament)
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// evolve calls after the first one
    #[arg(long, default_value_t = 10)]
    checkpoints: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// reject asymmetric matrices or non-zero diagonals
    #[arg(long, default_value_t = false)]
    validate_matrix: bool,
}

impl Args {
    fn config(&self) -> GaConfig {
        let selection = match self.selection {
            SelectionArg::Uniform => Selection::Uniform,
            SelectionArg::Tournament => Selection::Tournament(self.tournament_size),
            SelectionArg::Roulette => Selection::Roulette,
            SelectionArg::Rank => Selection::Rank,
        };
        let config = GaConfig {
            population_size: self.population_size,
            generations: self.generations,
            elite_ratio: self.elite_ratio,
            mutation_rate: self.mutation_rate,
            selection,
            ..GaConfig::default()
        };
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn read_instance(&self) -> Result<TspInstance> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                parse_instance(BufReader::new(file))
            }
            None => parse_instance(io::stdin().lock()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let instance = args.read_instance()?;
    if args.validate_matrix {
        instance.validate(1e-9)?;
    }
    if args.checkpoints == 0 {
        return Err(anyhow!("--checkpoints must be at least 1"));
    }
    info!("loaded {} cities ({})", instance.num_cities(), instance.label);

    let problem = TspProblem::new(instance.distances).map_err(|e| anyhow!(e))?;
    let mut engine = GaEngine::new(&problem, args.config()).map_err(|e| anyhow!(e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let first = engine.evolve();
    write_tour(&mut out, &first.best)?;
    out.flush()?;

    let best = engine.run_checkpoints(args.checkpoints).into_best();
    info!(
        "first cost {:.6}, best checkpoint cost {:.6}",
        first.best_cost, best.best_cost
    );
    write_tour(&mut out, &best.best)?;
    out.flush()?;

    Ok(())
}
