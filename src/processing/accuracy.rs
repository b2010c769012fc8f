//! Entity-set comparison between a generated output and its ground truth.
//!
//! Absent entity sets (`None`) are handled explicitly by every operation and
//! each operation has its own policy for them:
//!
//! | operation                 | output absent               | ground truth absent              | equal sets  |
//! |---------------------------|-----------------------------|----------------------------------|-------------|
//! | [`get_unique_entities`]   | ground truth                | output                           | union       |
//! | [`unique_in_output`]      | `NoEntitiesInOutput`        | output unchanged                 | AllAttested |
//! | [`unique_in_ground_truth`]| ground truth unchanged      | `NoEntitiesInGroundTruth`        | AllAttested |

use crate::domain::entities::{DiffStatus, Difference, EntitySet};

/// Check that every ground-truth fact is present in the output entities.
///
/// A fact counts as present when it is a substring of at least one output
/// entity. Returns `false` when there is nothing to validate against (absent
/// or empty ground truth) or when the output has no entities.
pub fn check_factual_accuracy(
    output_entities: Option<&EntitySet>,
    ground_truth_entities: Option<&EntitySet>,
) -> bool {
    let (Some(output), Some(ground_truth)) = (output_entities, ground_truth_entities) else {
        return false;
    };
    if ground_truth.is_empty() {
        return false;
    }

    ground_truth
        .iter()
        .all(|fact| output.iter().any(|entity| entity.contains(fact)))
}

/// Union of both entity sets; `None` only when both sides are absent.
pub fn get_unique_entities(
    output_entities: Option<&EntitySet>,
    ground_truth_entities: Option<&EntitySet>,
) -> Option<EntitySet> {
    match (output_entities, ground_truth_entities) {
        (None, None) => None,
        (None, Some(ground_truth)) => Some(ground_truth.clone()),
        (Some(output), None) => Some(output.clone()),
        (Some(output), Some(ground_truth)) => Some(output.union(ground_truth)),
    }
}

/// Entities mentioned by the output but not by the ground truth.
pub fn unique_in_output(
    output_entities: Option<&EntitySet>,
    ground_truth_entities: Option<&EntitySet>,
) -> Difference {
    let Some(output) = output_entities else {
        return Difference::Status(DiffStatus::NoEntitiesInOutput);
    };
    let Some(ground_truth) = ground_truth_entities else {
        return Difference::Entities(output.clone());
    };

    one_sided_difference(output, ground_truth, DiffStatus::NoneInOutput)
}

/// Entities mentioned by the ground truth but missing from the output.
pub fn unique_in_ground_truth(
    ground_truth_entities: Option<&EntitySet>,
    output_entities: Option<&EntitySet>,
) -> Difference {
    let Some(output) = output_entities else {
        // Ground truth is passed through; with both sides absent there is
        // nothing to pass through.
        return match ground_truth_entities {
            Some(ground_truth) => Difference::Entities(ground_truth.clone()),
            None => Difference::Status(DiffStatus::NoEntitiesInGroundTruth),
        };
    };
    let Some(ground_truth) = ground_truth_entities else {
        return Difference::Status(DiffStatus::NoEntitiesInGroundTruth);
    };

    one_sided_difference(ground_truth, output, DiffStatus::NoneInGroundTruth)
}

fn one_sided_difference(left: &EntitySet, right: &EntitySet, empty: DiffStatus) -> Difference {
    if left == right {
        return Difference::Status(DiffStatus::AllAttested);
    }

    let unique = left.difference(right);
    if unique.is_empty() {
        Difference::Status(empty)
    } else {
        Difference::Entities(unique)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> EntitySet {
        items.iter().copied().collect()
    }

    #[test]
    fn covered_when_all_facts_are_present() {
        let output = set(&["Apple", "American", "Cupertino", "California", "United States"]);
        let ground_truth = set(&["Apple", "Cupertino", "American"]);

        assert!(check_factual_accuracy(Some(&output), Some(&ground_truth)));
    }

    #[test]
    fn removing_any_required_fact_flips_coverage() {
        let ground_truth = set(&["Apple", "Cupertino", "American"]);

        for missing in ground_truth.iter() {
            let output: EntitySet = ["Apple", "American", "Cupertino", "California"]
                .into_iter()
                .filter(|entity| *entity != missing)
                .collect();

            assert!(
                !check_factual_accuracy(Some(&output), Some(&ground_truth)),
                "coverage should fail without {missing}"
            );
        }
    }

    #[test]
    fn facts_match_by_substring() {
        let output = set(&["Apple Inc.", "Cupertino, California"]);
        let ground_truth = set(&["Apple", "California"]);

        assert!(check_factual_accuracy(Some(&output), Some(&ground_truth)));
        assert!(!check_factual_accuracy(
            Some(&ground_truth),
            Some(&set(&["Apple Inc."]))
        ));
    }

    #[test]
    fn empty_or_absent_ground_truth_is_never_covered() {
        let output = set(&["Apple"]);

        assert!(!check_factual_accuracy(Some(&set(&[])), Some(&set(&[]))));
        assert!(!check_factual_accuracy(Some(&output), Some(&set(&[]))));
        assert!(!check_factual_accuracy(Some(&output), None));
        assert!(!check_factual_accuracy(None, None));
    }

    #[test]
    fn absent_output_is_not_covered() {
        assert!(!check_factual_accuracy(None, Some(&set(&["Apple"]))));
    }

    #[test]
    fn missing_facts_are_not_covered() {
        let output = set(&["Apple", "American", "Cupertino", "California", "United States"]);

        assert!(!check_factual_accuracy(
            Some(&output),
            Some(&set(&["Grapes", "Peach"]))
        ));
        assert!(!check_factual_accuracy(
            Some(&set(&["Banana", "Mango", "Pineapple"])),
            Some(&set(&["Apple", "Cupertino", "American"]))
        ));
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut result = Vec::new();
        for (idx, first) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(idx);
            for mut tail in permutations(&rest) {
                tail.insert(0, *first);
                result.push(tail);
            }
        }
        result
    }

    #[test]
    fn coverage_ignores_input_order() {
        let cases: [(&[&str], &[&str], bool); 3] = [
            (&["Apple Inc", "Inc"], &["Inc", "Apple"], true),
            (&["American", "Cupertino", "Apple"], &["Apple", "Cupertino", "American"], true),
            (&["Apple Inc", "Cupertino"], &["Inc", "Apple", "Cherry"], false),
        ];

        for (output, ground_truth, expected) in cases {
            for output_order in permutations(output) {
                for ground_truth_order in permutations(ground_truth) {
                    let output_set: EntitySet = output_order.iter().copied().collect();
                    let ground_truth_set: EntitySet = ground_truth_order.iter().copied().collect();

                    assert_eq!(
                        check_factual_accuracy(Some(&output_set), Some(&ground_truth_set)),
                        expected,
                        "output {output_order:?}, ground truth {ground_truth_order:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn union_handles_absent_sides() {
        let output = set(&["Apple", "Banana", "Orange"]);
        let ground_truth = set(&["Banana", "Cherry", "Orange"]);

        assert_eq!(get_unique_entities(None, None), None);
        assert_eq!(
            get_unique_entities(None, Some(&ground_truth)),
            Some(ground_truth.clone())
        );
        assert_eq!(get_unique_entities(Some(&output), None), Some(output.clone()));
        assert_eq!(
            get_unique_entities(Some(&output), Some(&ground_truth)),
            Some(set(&["Apple", "Banana", "Cherry", "Orange"]))
        );
    }

    #[test]
    fn union_is_commutative() {
        let a = set(&["Apple", "Banana"]);
        let b = set(&["Banana", "Cherry"]);

        assert_eq!(
            get_unique_entities(Some(&a), Some(&b)),
            get_unique_entities(Some(&b), Some(&a))
        );
    }

    #[test]
    fn unique_sides_of_overlapping_sets() {
        let output = set(&["Apple", "Banana", "Orange"]);
        let ground_truth = set(&["Banana", "Cherry", "Orange"]);

        assert_eq!(
            unique_in_output(Some(&output), Some(&ground_truth)),
            Difference::Entities(set(&["Apple"]))
        );
        assert_eq!(
            unique_in_ground_truth(Some(&ground_truth), Some(&output)),
            Difference::Entities(set(&["Cherry"]))
        );
    }

    #[test]
    fn disjoint_sets_keep_every_entity() {
        let output = set(&["Grape", "Mango", "Pineapple"]);
        let ground_truth = set(&["Banana", "Cherry", "Orange"]);

        assert_eq!(
            unique_in_output(Some(&output), Some(&ground_truth)),
            Difference::Entities(output.clone())
        );
        assert_eq!(
            unique_in_ground_truth(Some(&ground_truth), Some(&output)),
            Difference::Entities(ground_truth.clone())
        );
    }

    #[test]
    fn unique_sides_partition_the_union() {
        let output = set(&["Apple", "Banana", "Orange"]);
        let ground_truth = set(&["Banana", "Cherry", "Orange"]);

        let in_output = unique_in_output(Some(&output), Some(&ground_truth));
        let in_ground_truth = unique_in_ground_truth(Some(&ground_truth), Some(&output));
        let rebuilt = in_output
            .entities()
            .expect("real set")
            .union(in_ground_truth.entities().expect("real set"))
            .union(&output.intersection(&ground_truth));

        assert_eq!(
            Some(rebuilt),
            get_unique_entities(Some(&output), Some(&ground_truth))
        );
    }

    #[test]
    fn identical_sets_are_all_attested() {
        let entities = set(&["Apple", "Cupertino"]);

        assert_eq!(
            unique_in_output(Some(&entities), Some(&entities.clone())),
            Difference::Status(DiffStatus::AllAttested)
        );
        assert_eq!(
            unique_in_ground_truth(Some(&entities), Some(&entities.clone())),
            Difference::Status(DiffStatus::AllAttested)
        );
    }

    #[test]
    fn subset_yields_no_unique_status() {
        let small = set(&["Apple"]);
        let large = set(&["Apple", "Cupertino"]);

        assert_eq!(
            unique_in_output(Some(&small), Some(&large)),
            Difference::Status(DiffStatus::NoneInOutput)
        );
        assert_eq!(
            unique_in_ground_truth(Some(&small), Some(&large)),
            Difference::Status(DiffStatus::NoneInGroundTruth)
        );
    }

    #[test]
    fn absent_ground_truth_passes_output_through() {
        let output = set(&["Apple"]);

        assert_eq!(
            unique_in_output(Some(&output), None),
            Difference::Entities(output.clone())
        );
        assert_eq!(
            unique_in_ground_truth(None, Some(&output)),
            Difference::Status(DiffStatus::NoEntitiesInGroundTruth)
        );
        assert!(!check_factual_accuracy(Some(&output), None));
    }

    #[test]
    fn absent_output_passes_ground_truth_through() {
        let ground_truth = set(&["Banana", "Cherry", "Orange"]);

        assert_eq!(
            unique_in_output(None, Some(&ground_truth)),
            Difference::Status(DiffStatus::NoEntitiesInOutput)
        );
        assert_eq!(
            unique_in_ground_truth(Some(&ground_truth), None),
            Difference::Entities(ground_truth.clone())
        );
    }

    #[test]
    fn both_absent_resolve_to_statuses() {
        assert_eq!(
            unique_in_output(None, None),
            Difference::Status(DiffStatus::NoEntitiesInOutput)
        );
        assert_eq!(
            unique_in_ground_truth(None, None),
            Difference::Status(DiffStatus::NoEntitiesInGroundTruth)
        );
    }
}
