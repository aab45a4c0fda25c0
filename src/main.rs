use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use hyper_robot_solver::design::{self, Config};
use hyper_robot_solver::{solve, Color, Puzzle};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hyper-robot")]
#[command(about = "Solve and verify sliding-robot puzzles")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,

    /// Enable debug logging.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the shortest path of one or every color.
    Solve {
        file: PathBuf,
        #[arg(short, long)]
        color: Option<Color>,
        #[arg(long, default_value_t = Config::default().max_depth)]
        max_depth: usize,
    },
    /// Check that every color is solvable within the acceptance window.
    Verify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        window: Window,
    },
    /// Print the first accepted layout among the candidates, in order.
    Design {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        window: Window,
    },
    /// Draw the board.
    Show { file: PathBuf },
    /// Re-encode a puzzle in canonical form.
    Fmt { file: PathBuf },
}

#[derive(Args)]
struct Window {
    #[arg(long, default_value_t = Config::default().max_depth)]
    max_depth: usize,
    #[arg(long, default_value_t = *Config::default().accept.start())]
    min_moves: usize,
    #[arg(long, default_value_t = *Config::default().accept.end())]
    max_moves: usize,
}

impl Window {
    fn config(&self) -> Result<Config> {
        let config = Config {
            max_depth: self.max_depth,
            accept: self.min_moves..=self.max_moves,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Cmd::Solve {
            file,
            color,
            max_depth,
        } => {
            let puzzle = load(&file)?;
            let colors = color.map_or(Color::ALL.to_vec(), |color| vec![color]);
            for color in colors {
                match solve::shortest_path(&puzzle, color, max_depth) {
                    Some(path) => {
                        println!("{color}: {} moves", path.len());
                        for mv in &path {
                            println!("  {mv} -> {}", mv.to);
                        }
                    }
                    None => println!("{color}: no solution within {max_depth} moves"),
                }
            }
        }
        Cmd::Verify { files, window } => verify(&files, &window.config()?)?,
        Cmd::Design { files, window } => {
            let config = window.config()?;
            let candidates = files.iter().map(|path| load(path)).collect::<Result<Vec<_>>>()?;
            let Some((idx, report)) = design::first_accepted(&candidates, &config) else {
                bail!("None of the {} candidates is accepted", candidates.len());
            };
            eprintln!("{}: {}", files[idx].display(), style("accepted").green());
            eprint!("{report}");
            print!("{}", candidates[idx]);
        }
        Cmd::Show { file } => {
            let puzzle = load(&file)?;
            print!("{}", puzzle.diagram(puzzle.robots()));
        }
        Cmd::Fmt { file } => print!("{}", load(&file)?),
    }

    Ok(())
}

fn load(path: &Path) -> Result<Puzzle> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    text.parse()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn verify(files: &[PathBuf], config: &Config) -> Result<()> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")?);

    let expanded = AtomicU64::new(0);
    let mut rejected = 0;
    for path in files {
        pb.set_message(path.display().to_string());
        let puzzle = load(path)?;
        let report = design::verify_with(&puzzle, config, || {
            expanded.fetch_add(1, Ordering::Relaxed);
        });
        let verdict = if report.is_accepted() {
            style("ACCEPTED").green()
        } else {
            rejected += 1;
            style("REJECTED").red()
        };
        pb.println(format!("=== {} {verdict}\n{report}", path.display()));
        pb.inc(1);
    }
    pb.finish_and_clear();
    tracing::info!(states = expanded.into_inner(), "Expanded");

    if rejected != 0 {
        bail!("{rejected}/{} puzzles rejected", files.len());
    }
    Ok(())
}
