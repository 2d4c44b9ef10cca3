//! Terminal front end for the equation solver
//!
//! Reads one equation per line (file argument or stdin), solves the system,
//! and prints the solution with a per-equation verification listing. Input
//! errors exit with code 2, a singular system with code 1.

use clap::Parser;
use linsolve::{residuals, solve, LinearSystem, Residual, SolveError};
use ndarray::Array1;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Upper bound on the number of equations accepted at this boundary
const MAX_EQUATIONS: usize = 10;

/// CLI arguments for the equation solver
#[derive(Parser)]
#[command(name = "solve_system")]
#[command(about = "Solve a dense linear system with Gaussian elimination and partial pivoting")]
#[command(
    after_help = "Each line is one equation: n coefficients followed by the right-hand \
constant, separated by whitespace. Example: \"2 3 -1 5\" for 2x + 3y - z = 5."
)]
struct Args {
    /// File with one equation per line; reads stdin when omitted
    input: Option<PathBuf>,

    /// Emit the solution and verification report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let text = match read_input(args.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        eprintln!("error: no equations supplied");
        return ExitCode::from(2);
    }
    if lines.len() > MAX_EQUATIONS {
        eprintln!(
            "error: {} equations supplied, at most {} are supported",
            lines.len(),
            MAX_EQUATIONS
        );
        return ExitCode::from(2);
    }

    let system = match LinearSystem::from_equations(&lines) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    let x = match solve(&system) {
        Ok(x) => x,
        Err(err @ SolveError::Singular { .. }) => {
            eprintln!("error: {}", err);
            eprintln!("the system has no unique solution");
            return ExitCode::from(1);
        }
    };

    let checks = residuals(&system, &x);

    if args.json {
        print_json(&x, &checks);
    } else {
        print_report(&x, &checks);
    }

    ExitCode::SUCCESS
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_report(x: &Array1<f64>, checks: &[Residual<f64>]) {
    println!("Solution:");
    for (i, value) in x.iter().enumerate() {
        println!("  x{} = {:.6}", i + 1, value);
    }

    println!();
    println!("Verification:");
    for (i, check) in checks.iter().enumerate() {
        println!(
            "  equation {}: {:.6} ~ {}",
            i + 1,
            check.computed,
            check.expected
        );
    }
}

fn print_json(x: &Array1<f64>, checks: &[Residual<f64>]) {
    let report = serde_json::json!({
        "solution": x.to_vec(),
        "verification": checks,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );
}
