/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Dioph CLI
//!
//! A thin wrapper: read a problem file, parse it, solve it, print the model.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioph::{BoundedSearch, SearchConfig, SolverAdapter, parse_problem_in_source};

#[derive(Parser)]
#[command(name = "dioph")]
#[command(about = "Solve small Diophantine problems written in plain text")]
#[command(after_help = "\
EXAMPLES:
    # problem.txt: Solve x + 2 = 3, y - x = 1 such that x > 0.
    dioph problem.txt

    # Widen the search
    dioph --bound 60 problem.txt

    # Show the parsed problem without solving
    dioph --ast problem.txt
")]
struct Args {
    /// Path to the problem description
    path: PathBuf,

    /// Absolute bound on every variable during the search
    #[arg(long, default_value_t = SearchConfig::default().bound)]
    bound: u32,

    /// Give up after examining this many assignments
    #[arg(long, default_value_t = SearchConfig::default().max_candidates)]
    max_candidates: u64,

    /// Print the parsed problem instead of solving it
    #[arg(long)]
    ast: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let source = std::fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    println!("{}", source.trim_end());

    let label = args.path.display().to_string();
    let problem = match parse_problem_in_source(&source, &label) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if args.ast {
        println!("{problem}");
        return Ok(());
    }

    let config = SearchConfig::new()
        .bound(args.bound)
        .max_candidates(args.max_candidates);
    log::info!(
        "solving {} equation(s), {} constraint(s) over {} variable(s)",
        problem.equations.len(),
        problem.constraints.len(),
        problem.variables().len()
    );
    let outcome = BoundedSearch::new(config).solve_problem(&problem)?;
    println!("{outcome}");
    Ok(())
}
