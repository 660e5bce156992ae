use std::collections::BTreeSet;

use tabula::{
    classify, parse,
    procedures::classify::{is_contradiction, is_tautology},
    reports::{Cause, Witness},
    structures::valuation::{Assignments, Valuation},
    Classifier, Config, Formula, Literal, Verdict,
};

fn lit(name: &str, polarity: bool) -> Literal {
    Literal::new(name.to_string(), polarity)
}

fn cause(names: &[&str]) -> Cause {
    names.iter().map(|name| name.to_string()).collect()
}

fn causes_of(text: &str) -> Vec<Cause> {
    match classify(&parse(text).unwrap()) {
        Verdict::Tautology { causes } | Verdict::Contradiction { causes } => causes,
        Verdict::Contingency { .. } => panic!("{text} is contingent"),
    }
}

fn witnesses_of(text: &str) -> (Vec<Witness>, Vec<Witness>) {
    match classify(&parse(text).unwrap()) {
        Verdict::Contingency { true_on, false_on } => (true_on, false_on),
        other => panic!("{text} is a {other}"),
    }
}

mod causes {
    use super::*;

    #[test]
    fn disjoined_occurrences() {
        // ((¬a) ∨ b) ∨ (c ∨ a) stands on a alone: without it, b ∨ c remains,
        // a contingency.
        assert_eq!(causes_of("((~a) | b) | (c | a)"), vec![cause(&["a"])]);
    }

    #[test]
    fn simplest_contradiction() {
        assert_eq!(causes_of("a & ~a"), vec![cause(&["a"])]);
    }

    #[test]
    fn modus_ponens_stands_on_its_conclusion() {
        // Removing b collapses ((a → b) ∧ a) → b to a ∧ a, a contingency;
        // removing a leaves b → b.
        assert_eq!(causes_of("((a -> b) & a) -> b"), vec![cause(&["b"])]);
    }

    #[test]
    fn de_morgan_stands_on_both() {
        // Removing either variable alone leaves a biconditional of equals.
        assert_eq!(causes_of("~(a & b) <-> (~a | ~b)"), vec![cause(&["a", "b"])]);
    }

    #[test]
    fn no_strict_subset_of_a_cause_destroys() {
        for text in [
            "((~a) | b) | (c | a)",
            "~(a & b) <-> (~a | ~b)",
            "((a -> b) & (b -> c)) -> (a -> c)",
            "a & ~a",
            "(a | b) & (~a & ~b)",
        ] {
            let formula = parse(text).unwrap();
            let verdict = classify(&formula);
            let (causes, still_holds): (&Vec<Cause>, fn(&Formula) -> bool) = match &verdict {
                Verdict::Tautology { causes } => (causes, is_tautology),
                Verdict::Contradiction { causes } => (causes, is_contradiction),
                Verdict::Contingency { .. } => panic!("{text} is contingent"),
            };
            assert!(!causes.is_empty(), "no causes for {text}");
            for cause in causes {
                for dropped in cause {
                    let subset: BTreeSet<_> =
                        cause.iter().filter(|name| *name != dropped).cloned().collect();
                    let survives = match formula.without(&subset) {
                        None => false,
                        Some(reduced) => still_holds(&reduced),
                    };
                    assert!(
                        survives,
                        "{subset:?} already destroys {text}, so {cause:?} is not minimal"
                    );
                }
            }
        }
    }

    #[test]
    fn width_cap_prunes_the_search() {
        let formula = parse("~(a & b) <-> (~a | ~b)").unwrap();
        let capped = Classifier::new(Config {
            max_cause_width: Some(1),
            ..Config::default()
        });
        match capped.classify(&formula) {
            // The only cause has size two, over the cap.
            Verdict::Tautology { causes } => assert!(causes.is_empty()),
            other => panic!("unexpected {other}"),
        }
    }
}

mod witnesses {
    use super::*;

    #[test]
    fn single_atom() {
        let (true_on, false_on) = witnesses_of("a");
        assert_eq!(true_on, vec![vec![lit("a", true)]]);
        assert_eq!(false_on, vec![vec![lit("a", false)]]);
    }

    #[test]
    fn worked_example() {
        let (true_on, false_on) = witnesses_of("((~a) & b) | c");
        assert_eq!(
            true_on,
            vec![vec![lit("a", false), lit("b", true)], vec![lit("c", true)]]
        );
        assert_eq!(
            false_on,
            vec![
                vec![lit("a", true), lit("c", false)],
                vec![lit("b", false), lit("c", false)],
            ]
        );
    }

    #[test]
    fn minimization_collapses_redundancy() {
        // The branch for a ∧ b is minimized to a, then deduplicated.
        let (true_on, false_on) = witnesses_of("a | (a & b)");
        assert_eq!(true_on, vec![vec![lit("a", true)]]);
        assert_eq!(false_on, vec![vec![lit("a", false)]]);
    }

    #[test]
    fn raw_branches_without_minimization() {
        let formula = parse("a | (a & b)").unwrap();
        let raw = Classifier::new(Config {
            minimize_witnesses: false,
            ..Config::default()
        });
        match raw.classify(&formula) {
            Verdict::Contingency { true_on, .. } => {
                assert_eq!(
                    true_on,
                    vec![vec![lit("a", true)], vec![lit("a", true), lit("b", true)]]
                );
            }
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn no_literal_of_a_witness_is_redundant() {
        for text in ["((~a) & b) | c", "a <-> b", "(a & b) | (c & d)"] {
            let formula = parse(text).unwrap();
            let Verdict::Contingency { true_on, false_on } = classify(&formula) else {
                panic!("{text} is not contingent");
            };
            for (value, clauses) in [(true, &true_on), (false, &false_on)] {
                for clause in clauses {
                    for dropped in clause {
                        let rest: Vec<_> =
                            clause.iter().filter(|literal| *literal != dropped).cloned().collect();
                        assert!(
                            !forces(&formula, &rest, value),
                            "a witness of {text} still forces without {dropped}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn the_two_sides_partition_the_truth_table() {
        for text in [
            "a",
            "a & b",
            "a <-> b",
            "((~a) & b) | c",
            "(a & (b | c)) -> (a <-> b)",
            "(a -> b) & (c | ~d)",
        ] {
            let formula = parse(text).unwrap();
            let Verdict::Contingency { true_on, false_on } = classify(&formula) else {
                panic!("{text} is not contingent");
            };
            for valuation in Assignments::over(&formula.atoms()) {
                let on_true = true_on.iter().any(|clause| satisfies(&valuation, clause));
                let on_false = false_on.iter().any(|clause| satisfies(&valuation, clause));
                assert_ne!(on_true, on_false, "on {text} at {valuation:?}");
                assert_eq!(
                    formula.value_on(&valuation),
                    Some(on_true),
                    "on {text} at {valuation:?}"
                );
            }
        }
    }

    fn satisfies(valuation: &Valuation, clause: &Witness) -> bool {
        clause
            .iter()
            .all(|literal| valuation.get(literal.atom()) == Some(&literal.polarity()))
    }

    fn forces(formula: &Formula, literals: &[Literal], value: bool) -> bool {
        let assigned: Valuation = literals
            .iter()
            .map(|literal| (literal.atom().clone(), literal.polarity()))
            .collect();
        let free: BTreeSet<_> = formula
            .atoms()
            .into_iter()
            .filter(|atom| !assigned.contains_key(atom))
            .collect();
        Assignments::over(&free).all(|completion| {
            let mut valuation = assigned.clone();
            valuation.extend(completion);
            formula.value_on(&valuation) == Some(value)
        })
    }
}
