pub mod clause;
pub mod formula;
pub mod pairs;
pub mod resolve;

use itertools::Itertools;

use clause::Clause;
use formula::Formula;
use pairs::ResolvedPairs;
use resolve::{resolvent, Resolution};

/// How a saturation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The empty clause was derived (or was there from the start).
    Refuted,
    /// A round went by without a new clause.
    Exhausted,
    /// `max_rounds` ran out before either of the above.
    BudgetExhausted,
}

impl Outcome {
    pub fn is_unsatisfiable(self) -> bool {
        self == Outcome::Refuted
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_rounds: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub rounds: usize,
    pub pairs_tried: usize,
    pub resolvents_added: usize,
    pub tautologies: usize,
    pub duplicates: usize,
}

/// Resolution refutation over a formula, which grows in place with every derived clause.
#[derive(Debug)]
pub struct Solver<'a> {
    formula: &'a mut Formula,
    config: SolverConfig,
    pairs: ResolvedPairs,
    stats: Stats,
}

impl<'a> Solver<'a> {
    pub fn new(formula: &'a mut Formula) -> Self {
        Self::with_config(formula, SolverConfig::default())
    }

    pub fn with_config(formula: &'a mut Formula, config: SolverConfig) -> Self {
        Self {
            formula,
            config,
            pairs: ResolvedPairs::new(),
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn formula(&self) -> &Formula {
        &*self.formula
    }

    fn budget_spent(&self) -> bool {
        self.config
            .max_rounds
            .is_some_and(|max_rounds| self.stats.rounds >= max_rounds)
    }

    /// Tries every unmarked pair among the first `n` clauses.
    ///
    /// Stops with `Err(Outcome::Refuted)` as soon as the empty clause is added, otherwise
    /// reports whether any clause was added.
    fn round(&mut self, n: usize) -> Result<bool, Outcome> {
        let mut progress = false;
        for (i, j) in (0..n).tuple_combinations() {
            if !self.pairs.mark(i, j) {
                continue;
            }
            self.stats.pairs_tried += 1;
            match resolvent(&self.formula[i], &self.formula[j]) {
                Resolution::Unresolvable => {}
                Resolution::Tautology(clause) => {
                    log::trace!("Dropping tautology {clause} from clauses {i} and {j}");
                    self.stats.tautologies += 1;
                }
                Resolution::Resolvent(clause) => {
                    self.add_resolvent(clause, i, j, &mut progress)?
                }
            }
        }
        Ok(progress)
    }

    fn add_resolvent(
        &mut self,
        clause: Clause,
        i: usize,
        j: usize,
        progress: &mut bool,
    ) -> Result<(), Outcome> {
        if !self.formula.add(&clause) {
            log::trace!("Clauses {i} and {j} resolve to {clause} which is already known");
            self.stats.duplicates += 1;
            return Ok(());
        }
        log::trace!("Clauses {i} and {j} resolve to {clause}");
        self.stats.resolvents_added += 1;
        if clause.is_empty() {
            log::debug!("Derived the empty clause from clauses {i} and {j}");
            return Err(Outcome::Refuted);
        }
        *progress = true;
        Ok(())
    }

    pub fn run(&mut self) -> Outcome {
        let outcome = self.saturate();
        log::info!(
            "Finished with {outcome:?} after {} rounds, {} clauses",
            self.stats.rounds,
            self.formula.len()
        );
        outcome
    }

    fn saturate(&mut self) -> Outcome {
        if self.formula.contains_empty_clause() {
            log::debug!("Formula already contains the empty clause");
            return Outcome::Refuted;
        }
        loop {
            if self.budget_spent() {
                return Outcome::BudgetExhausted;
            }
            self.stats.rounds += 1;
            let n = self.formula.len();
            log::debug!("Round {} over {n} clauses", self.stats.rounds);
            match self.round(n) {
                Err(outcome) => return outcome,
                Ok(false) => return Outcome::Exhausted,
                Ok(true) => log::debug!(
                    "Round {} derived {} new clauses",
                    self.stats.rounds,
                    self.formula.len() - n
                ),
            }
        }
    }
}

/// Saturates `formula` in place and reports whether the empty clause was derived.
pub fn is_unsatisfiable(formula: &mut Formula) -> bool {
    Solver::new(formula).run().is_unsatisfiable()
}
