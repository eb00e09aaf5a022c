use std::fmt;
use std::ops::Index;

use itertools::Itertools;

use super::clause::Clause;

pub const AND: &str = " ∧ ";

/// A conjunction of clauses. No two clauses hold the same literal set.
#[derive(Debug, Clone, Default)]
pub struct Formula {
    clauses: Vec<Clause>,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>) -> Self {
        let mut formula = Self::with_capacity(clauses.len());
        for clause in clauses.iter() {
            formula.add(clause);
        }
        formula
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clauses: Vec::with_capacity(capacity),
        }
    }

    /// Stores a copy of `clause` unless a clause with the same literals is present.
    ///
    /// Returns whether the clause was new.
    pub fn add(&mut self, clause: &Clause) -> bool {
        if self.clauses.iter().any(|c| c == clause) {
            return false;
        }
        self.clauses.push(clause.clone());
        true
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|c| c == clause)
    }

    pub fn contains_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Reads the CNF text format: one clause per line, blank lines and lines starting with `#` are skipped.
    pub fn parse(source: &str) -> Self {
        let mut formula = Self::default();
        for line in source.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            formula.add(&Clause::parse(line));
        }
        formula
    }

    /// One line per clause in the CNF text format.
    ///
    /// The empty clause becomes a line holding a single space, since empty lines are skipped on reading.
    pub fn to_cnf_string(&self) -> String {
        self.clauses
            .iter()
            .map(|clause| {
                if clause.is_empty() {
                    " \n".to_owned()
                } else {
                    format!("{}\n", clause.to_line())
                }
            })
            .collect()
    }
}

impl Index<usize> for Formula {
    type Output = Clause;

    fn index(&self, idx: usize) -> &Clause {
        &self.clauses[idx]
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

// Same clause sets, in any order.
impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.clauses.iter().all(|c| other.contains(c))
    }
}

impl Eq for Formula {}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty formula)");
        }
        write!(f, "{}", self.clauses.iter().join(AND))
    }
}

#[cfg(test)]
mod formula_test {
    use super::Formula;
    use crate::sat::clause::Clause;
    use crate::var::Lit;

    #[test]
    fn add_rejects_reordered_duplicate() {
        let mut formula = Formula::default();
        assert!(formula.add(&Clause::new(vec![Lit::pos("P"), Lit::neg("Q")])));
        assert!(!formula.add(&Clause::new(vec![Lit::neg("Q"), Lit::pos("P")])));
        assert_eq!(formula.len(), 1);
    }

    #[test]
    fn add_keeps_subsets_and_supersets() {
        let mut formula = Formula::default();
        assert!(formula.add(&Clause::parse("A B")));
        assert!(formula.add(&Clause::parse("A")));
        assert!(formula.add(&Clause::parse("A B C")));
        assert!(formula.add(&Clause::parse("A !B")));
        assert_eq!(formula.len(), 4);
    }

    #[test]
    fn add_copies_the_clause() {
        let mut clause = Clause::parse("A");
        let mut formula = Formula::with_capacity(1);
        formula.add(&clause);
        clause.add(&Lit::pos("B"));
        assert_eq!(formula[0], Clause::parse("A"));
    }

    #[test]
    fn empty_clause_detection() {
        let mut formula = Formula::parse("A\n!A\n");
        assert!(!formula.contains_empty_clause());
        assert!(formula.add(&Clause::default()));
        assert!(formula.contains_empty_clause());
        assert!(!formula.add(&Clause::default()));
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let formula = Formula::parse("# header\n\nP !Q R\n#Q\n!P\nP !Q R\nR !Q P\n");
        assert_eq!(formula.len(), 2);
        assert_eq!(formula[0].lits(), &[Lit::pos("P"), Lit::neg("Q"), Lit::pos("R")]);
        assert_eq!(formula[1].lits(), &[Lit::neg("P")]);
    }

    #[test]
    fn whitespace_only_line_is_the_empty_clause() {
        // only truly empty lines are skipped
        let formula = Formula::parse("A\n   \n");
        assert_eq!(formula.len(), 2);
        assert!(formula.contains_empty_clause());
    }

    #[test]
    fn display() {
        assert_eq!(Formula::default().to_string(), "(empty formula)");
        let formula = Formula::parse("A B\n!A\n");
        assert_eq!(formula.to_string(), "(A ∨ B) ∧ (!A)");
    }

    #[test]
    fn cnf_string_round_trip() {
        let formula = Formula::parse("P !Q R\n!P\nQ S\n");
        assert_eq!(formula.to_cnf_string(), "P !Q R\n!P\nQ S\n");
        assert_eq!(Formula::parse(&formula.to_cnf_string()), formula);
    }

    #[test]
    fn cnf_string_keeps_the_empty_clause() {
        let mut formula = Formula::parse("P\n!P\n");
        formula.add(&Clause::default());
        assert_eq!(formula.to_cnf_string(), "P\n!P\n \n");
        assert_eq!(Formula::parse(&formula.to_cnf_string()), formula);
    }

    #[test]
    fn equality_ignores_clause_order() {
        let f1 = Formula::parse("A B\n!A\n");
        let f2 = Formula::parse("!A\nB A\n");
        assert_eq!(f1, f2);
        assert_ne!(f1, Formula::parse("A B\n"));
    }
}
