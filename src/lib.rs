pub mod cnf;
pub mod error;
pub mod sat;
pub mod var;

pub use cnf::{parse_formula, read_formula, validate_line, write_formula};
pub use error::{Error, Result};
pub use sat::clause::Clause;
pub use sat::formula::Formula;
pub use sat::{is_unsatisfiable, Outcome, Solver, SolverConfig, Stats};
pub use var::Lit;

/// The formula as shown to a reader, e.g. `(P ∨ !Q) ∧ (!P)`.
pub fn render(formula: &Formula) -> String {
    formula.to_string()
}
