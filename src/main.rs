use std::process::ExitCode;

use refute::{read_formula, validate_line, Outcome, Solver, SolverConfig};

const MAX_ROUNDS_VAR: &str = "REFUTE_MAX_ROUNDS";

fn config_from_env() -> SolverConfig {
    let mut config = SolverConfig::default();
    if let Ok(value) = std::env::var(MAX_ROUNDS_VAR) {
        match value.parse::<usize>() {
            Ok(max_rounds) => config = config.with_max_rounds(max_rounds),
            Err(e) => log::warn!("Ignoring {MAX_ROUNDS_VAR}={value:?}: {e}"),
        }
    }
    config
}

fn warn_on_malformed_lines(path: &str) {
    let Ok(source) = std::fs::read_to_string(path) else {
        return;
    };
    for (idx, line) in source.lines().enumerate() {
        if let Err(e) = validate_line(line) {
            log::warn!("{path}:{}: {e}", idx + 1);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: refute <formula.cnf>");
        return ExitCode::FAILURE;
    };

    let mut formula = match read_formula(&path) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    warn_on_malformed_lines(&path);

    println!("Formula: {formula}");
    let mut solver = Solver::with_config(&mut formula, config_from_env());
    let outcome = solver.run();
    let stats = solver.stats().clone();

    match outcome {
        Outcome::Refuted => println!("Result: UNSATISFIABLE"),
        Outcome::Exhausted => println!("Result: SATISFIABLE (no refutation found)"),
        Outcome::BudgetExhausted => {
            println!("Result: UNKNOWN (stopped after {} rounds)", stats.rounds)
        }
    }
    println!("Saturated formula: {formula}");
    log::info!("{stats:?}");
    ExitCode::SUCCESS
}
