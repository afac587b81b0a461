use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use gauss_solver::loader::load_coefficients;
use gauss_solver::settings::{EPS, MAX_DIM, MIN_DIM};
use gauss_solver::{cross_check, solve_with, Method, SolverSettings};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodChoice {
    Gauss,
    Jordan,
    /// Gauss, then Gauss-Jordan as a check
    Both,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Coefficient file, one equation per line
    pub file: PathBuf,

    /// Number of equations
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(MIN_DIM as i64..=MAX_DIM as i64))]
    pub dim: u8,

    #[arg(short, long, value_enum, default_value_t = MethodChoice::Gauss)]
    pub method: MethodChoice,

    /// Values below this count as zero, must be positive
    #[arg(long, default_value_t = EPS, value_parser = parse_eps)]
    pub eps: f64,
}

fn parse_eps(value: &str) -> Result<f64, String> {
    let eps: f64 = value.parse().map_err(|e| format!("{e}"))?;
    SolverSettings::with_eps(eps)
        .validate()
        .map_err(|e| e.to_string())?;
    Ok(eps)
}

fn verdict(agree: bool) -> &'static str {
    if agree {
        "Both methods agree"
    } else {
        "Methods disagree"
    }
}

/// Everything printed for one run of `method` over `rows`.
fn render_output(
    method: MethodChoice,
    rows: &[Vec<f64>],
    settings: &SolverSettings,
) -> Result<String> {
    Ok(match method {
        MethodChoice::Gauss => solve_with(Method::Gauss, rows, settings)?.trace.render(),
        MethodChoice::Jordan => solve_with(Method::GaussJordan, rows, settings)?
            .trace
            .render(),
        MethodChoice::Both => {
            let check = cross_check(rows, settings)?;
            format!(
                "{}\n{}\n{}\n",
                check.gauss.trace,
                check.jordan.trace,
                verdict(check.agree)
            )
        }
    })
}

fn run(args: &Args) -> Result<()> {
    let rows = load_coefficients(&args.file, args.dim as usize)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let settings = SolverSettings::with_eps(args.eps);
    print!("{}", render_output(args.method, &rows, &settings)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("cannot solve the system: {err:?}");
        process::exit(1)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
