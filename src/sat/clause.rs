use std::fmt;
use std::ops::Index;

use itertools::Itertools;

use crate::var::Lit;

pub const OR: &str = " ∨ ";

/// A disjunction of literals. No literal occurs twice; insertion order is kept for display only.
#[derive(Debug, Clone, Default, Eq)]
pub struct Clause {
    lits: Vec<Lit>,
}

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Self {
        let mut clause = Self::with_capacity(lits.len());
        for lit in lits.iter() {
            clause.add(lit);
        }
        clause
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lits: Vec::with_capacity(capacity),
        }
    }

    /// Stores a copy of `lit` unless an equal literal is already present.
    ///
    /// Returns true in both cases.
    pub fn add(&mut self, lit: &Lit) -> bool {
        if !self.contains(lit) {
            self.lits.push(lit.clone());
        }
        true
    }

    pub fn contains(&self, lit: &Lit) -> bool {
        self.lits.iter().any(|l| l == lit)
    }

    /// The empty clause, i.e. a contradiction.
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn lits(&self) -> &[Lit] {
        &self.lits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lit> {
        self.lits.iter()
    }

    /// True if some pair of literals in the clause is complementary.
    pub fn is_tautology(&self) -> bool {
        self.lits
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a.is_complementary(b))
    }

    /// Whitespace separated literals; tokens which are not literals are dropped.
    pub fn parse(line: &str) -> Self {
        let mut clause = Self::default();
        for token in line.split_whitespace() {
            match Lit::parse(token) {
                Some(lit) => {
                    clause.add(&lit);
                }
                None => log::debug!("Skipping token {token:?} which is not a literal"),
            }
        }
        clause
    }

    /// The clause as a line of the CNF text format.
    pub fn to_line(&self) -> String {
        self.lits.iter().join(" ")
    }
}

// Clauses are compared as literal sets.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.lits.iter().all(|lit| other.contains(lit))
    }
}

impl Index<usize> for Clause {
    type Output = Lit;

    fn index(&self, idx: usize) -> &Lit {
        &self.lits[idx]
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = std::slice::Iter<'a, Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.lits.iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        write!(f, "({})", self.lits.iter().join(OR))
    }
}
