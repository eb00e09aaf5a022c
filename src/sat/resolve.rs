use super::clause::Clause;
use super::formula::Formula;

/// What resolving one pair of clauses produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The clauses share no complementary pair.
    Unresolvable,
    /// The resolvent held a complementary pair and was thrown away.
    Tautology(Clause),
    Resolvent(Clause),
}

/// First complementary pair `(i, j)` with `c1[i]` and `c2[j]`, scanning `c1` in the outer loop.
pub fn find_resolvable(c1: &Clause, c2: &Clause) -> Option<(usize, usize)> {
    c1.iter().enumerate().find_map(|(i, lit)| {
        c2.iter()
            .position(|other| lit.is_complementary(other))
            .map(|j| (i, j))
    })
}

/// Resolves on the first complementary pair only, even when the clauses admit several.
pub fn resolvent(c1: &Clause, c2: &Clause) -> Resolution {
    let Some((i, j)) = find_resolvable(c1, c2) else {
        return Resolution::Unresolvable;
    };
    let mut clause = Clause::with_capacity((c1.len() + c2.len()).saturating_sub(2));
    for (_, lit) in c1.iter().enumerate().filter(|(idx, _)| *idx != i) {
        clause.add(lit);
    }
    for (_, lit) in c2.iter().enumerate().filter(|(idx, _)| *idx != j) {
        clause.add(lit);
    }
    if clause.is_tautology() {
        Resolution::Tautology(clause)
    } else {
        Resolution::Resolvent(clause)
    }
}

/// Adds the resolvent of `c1` and `c2` to `formula`.
///
/// Returns true only when a new clause was added.
pub fn resolve(formula: &mut Formula, c1: &Clause, c2: &Clause) -> bool {
    match resolvent(c1, c2) {
        Resolution::Resolvent(clause) => formula.add(&clause),
        Resolution::Unresolvable | Resolution::Tautology(_) => false,
    }
}

#[cfg(test)]
mod resolve_test {
    use super::{find_resolvable, resolve, resolvent, Resolution};
    use crate::sat::clause::Clause;
    use crate::sat::formula::Formula;

    #[test]
    fn finds_first_pair_in_scan_order() {
        let c1 = Clause::parse("A B C");
        let c2 = Clause::parse("!C !B");
        // B (index 1) is met before C in c1
        assert_eq!(find_resolvable(&c1, &c2), Some((1, 1)));
        assert_eq!(find_resolvable(&c2, &c1), Some((0, 2)));
    }

    #[test]
    fn no_pair() {
        let c1 = Clause::parse("A B");
        let c2 = Clause::parse("A !C");
        assert_eq!(find_resolvable(&c1, &c2), None);
        assert_eq!(resolvent(&c1, &c2), Resolution::Unresolvable);
        let mut formula = Formula::new(vec![c1.clone(), c2.clone()]);
        assert!(!resolve(&mut formula, &c1, &c2));
        assert_eq!(formula.len(), 2);
    }

    #[test]
    fn resolvent_is_union_without_pair() {
        let c1 = Clause::parse("A B !C");
        let c2 = Clause::parse("C D A");
        assert_eq!(
            resolvent(&c1, &c2),
            Resolution::Resolvent(Clause::parse("A B D"))
        );
    }

    #[test]
    fn units_give_empty_clause() {
        let c1 = Clause::parse("P");
        let c2 = Clause::parse("!P");
        assert_eq!(resolvent(&c1, &c2), Resolution::Resolvent(Clause::default()));
        let mut formula = Formula::new(vec![c1.clone(), c2.clone()]);
        assert!(resolve(&mut formula, &c1, &c2));
        assert!(formula.contains_empty_clause());
    }

    #[test]
    fn tautology_is_rejected() {
        let c1 = Clause::parse("P Q");
        let c2 = Clause::parse("!P !Q");
        assert_eq!(
            resolvent(&c1, &c2),
            Resolution::Tautology(Clause::parse("Q !Q"))
        );
        let mut formula = Formula::new(vec![c1.clone(), c2.clone()]);
        assert!(!resolve(&mut formula, &c1, &c2));
        assert_eq!(formula.len(), 2);
    }

    #[test]
    fn duplicate_resolvent_is_not_added() {
        let c1 = Clause::parse("A B");
        let c2 = Clause::parse("A !B");
        let mut formula = Formula::new(vec![c1.clone(), c2.clone()]);
        assert!(resolve(&mut formula, &c1, &c2));
        assert!(formula.contains(&Clause::parse("A")));
        assert!(!resolve(&mut formula, &c1, &c2));
        assert_eq!(formula.len(), 3);
    }
}
