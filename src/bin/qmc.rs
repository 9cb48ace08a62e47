//! Quine-McCluskey Logic Minimizer - Command Line Interface

use clap::Parser;
use qmc_logic::{BoolFunction, CoverStrategy, MinimizeConfig};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Number of input variables (1-20)
    #[arg(short = 'n', long = "vars")]
    vars: usize,

    /// Minterm row indices, e.g. -m 0,2,5,7
    #[arg(short = 'm', long = "minterms", value_delimiter = ',')]
    minterms: Vec<usize>,

    /// Don't-care row indices, e.g. -d 3,11
    #[arg(short = 'd', long = "dont-cares", value_delimiter = ',')]
    dont_cares: Vec<usize>,

    /// Variable names, most significant first (defaults to A,B,C,...)
    #[arg(long = "names", value_delimiter = ',')]
    names: Vec<String>,

    /// Force the greedy covering heuristic
    #[arg(short = 'g', long = "greedy")]
    greedy: bool,

    /// Cap on explored branch-and-bound nodes
    #[arg(long = "node-budget")]
    node_budget: Option<u64>,

    /// Print only the minimized expression
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let names: Vec<String> = if args.names.is_empty() {
        ('A'..='T').take(args.vars).map(String::from).collect()
    } else {
        args.names.clone()
    };

    let function = match BoolFunction::new(args.vars, &args.minterms, &args.dont_cares) {
        Ok(function) => function,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let config = MinimizeConfig {
        strategy: if args.greedy {
            CoverStrategy::Greedy
        } else {
            CoverStrategy::Auto
        },
        node_budget: args.node_budget,
        ..Default::default()
    };

    let result = match function.minimize_with_config(&names, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.quiet {
        println!("{}", result.expression());
        return;
    }

    println!("Prime implicants:");
    for (i, prime) in result.prime_implicants().iter().enumerate() {
        let essential = if result.essential_indices().contains(&i) {
            " (essential)"
        } else {
            ""
        };
        let covered: Vec<String> = prime.covered().iter().map(|r| r.to_string()).collect();
        println!(
            "  {}  {:width$}  m({}){}",
            prime.pattern(args.vars),
            prime.product(args.vars, &names),
            covered.join(","),
            essential,
            width = args.vars + 2,
        );
    }
    println!();
    println!(
        "Selected cover ({} of {} primes, {}):",
        result.selected_indices().len(),
        result.prime_implicants().len(),
        if result.is_exact() {
            "exact"
        } else {
            "greedy"
        }
    );
    for prime in result.selected_implicants() {
        println!("  {}", prime.product(args.vars, &names));
    }
    println!();
    println!("F = {}", result.expression());
}
