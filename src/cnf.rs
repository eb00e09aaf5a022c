//! The CNF text format: one clause per line, literals separated by whitespace,
//! `!` for negation, blank lines and lines starting with `#` ignored.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::sat::formula::Formula;
use crate::var::Lit;

pub const COMMENT: char = '#';

pub fn parse_formula(source: &str) -> Formula {
    Formula::parse(source)
}

pub fn read_formula(path: impl AsRef<Path>) -> Result<Formula> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    if source.trim().is_empty() {
        return Err(Error::EmptyFile(path.to_path_buf()));
    }
    let formula = parse_formula(&source);
    log::debug!("Read {} clauses from {}", formula.len(), path.display());
    Ok(formula)
}

/// The empty clause is written as a line holding a single space, which reads back as the empty clause.
pub fn write_formula(formula: &Formula, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, formula.to_cnf_string())?;
    Ok(())
}

/// Checks that every token of a clause line is a literal with an identifier name,
/// and that a non-empty line holds at least one token.
///
/// Parsing never calls this; it only tells a caller which lines would lose tokens
/// or turn into the empty clause.
pub fn validate_line(line: &str) -> Result<()> {
    if line.is_empty() || line.starts_with(COMMENT) {
        return Ok(());
    }
    if line.split_whitespace().next().is_none() {
        return Err(Error::BlankClause);
    }
    for token in line.split_whitespace() {
        match Lit::parse(token) {
            Some(lit) if lit.is_well_formed() => {}
            _ => return Err(Error::InvalidLiteral(token.to_owned())),
        }
    }
    Ok(())
}
