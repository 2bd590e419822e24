use crate::models::{ConnectionWeights, Student, StudentId, StudentRegistry};
use std::collections::HashMap;

/// Calculate the connection strength from `a` towards `b`
///
/// Scoring formula (bonuses are additive):
/// strength = (
///     roommate          # b is a's assigned roommate
///     + shared * k      # k = shared internships, counted as a multiset
///     + same_major      # exact major match
///     + same_age
/// )
///
/// The roommate bonus only looks at `a`'s slot, so the score is directional
/// on its own; the registry keeps pairings symmetric.
pub fn connection_strength(
    registry: &StudentRegistry,
    a: StudentId,
    b: StudentId,
    weights: &ConnectionWeights,
) -> u32 {
    let mut strength = 0;

    if registry.roommate_of(a) == Some(b) {
        strength = weights.roommate;
    }

    strength.saturating_add(attribute_strength(registry.student(a), registry.student(b), weights))
}

/// Connection strength from personal attributes alone (no roommate bonus)
pub fn attribute_strength(a: &Student, b: &Student, weights: &ConnectionWeights) -> u32 {
    // Saturating so oversized configured weights cannot wrap a score to zero
    let mut strength = weights
        .shared_internship
        .saturating_mul(shared_internships(a, b));

    if a.major == b.major {
        strength = strength.saturating_add(weights.same_major);
    }

    if a.age == b.age {
        strength = strength.saturating_add(weights.same_age);
    }

    strength
}

/// Size of the multiset intersection of both internship histories
fn shared_internships(a: &Student, b: &Student) -> u32 {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for company in &b.previous_internships {
        *counts.entry(company.as_str()).or_default() += 1;
    }

    let mut shared = 0;
    for company in &a.previous_internships {
        if let Some(remaining) = counts.get_mut(company.as_str()) {
            if *remaining > 0 {
                *remaining -= 1;
                shared += 1;
            }
        }
    }

    shared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_student(name: &str, age: u32, major: &str, internships: &[&str]) -> Student {
        Student::new(
            name,
            age,
            "F",
            2,
            major,
            3.4,
            vec![],
            internships.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let registry = StudentRegistry::new(vec![
            create_student("A", 20, "CS", &["Google"]),
            create_student("B", 21, "Math", &["Meta"]),
        ])
        .unwrap();

        let weights = ConnectionWeights::default();
        assert_eq!(connection_strength(&registry, StudentId(0), StudentId(1), &weights), 0);
    }

    #[test]
    fn test_bonuses_are_additive() {
        let registry = StudentRegistry::new(vec![
            create_student("A", 20, "CS", &["Google", "Meta"]),
            create_student("B", 20, "CS", &["Google", "Amazon"]),
        ])
        .unwrap();

        // major 2 + age 1 + one shared internship 3
        let weights = ConnectionWeights::default();
        assert_eq!(connection_strength(&registry, StudentId(0), StudentId(1), &weights), 6);
    }

    #[test]
    fn test_roommate_bonus() {
        let mut registry = StudentRegistry::new(vec![
            create_student("A", 20, "CS", &[]),
            create_student("B", 22, "Math", &[]),
        ])
        .unwrap();
        let weights = ConnectionWeights::default();

        registry.pair(StudentId(0), StudentId(1));
        assert_eq!(connection_strength(&registry, StudentId(0), StudentId(1), &weights), 4);
        assert_eq!(connection_strength(&registry, StudentId(1), StudentId(0), &weights), 4);
    }

    #[test]
    fn test_shared_internships_count_as_multiset() {
        let a = create_student("A", 20, "CS", &["Google", "Google", "Meta"]);
        let b = create_student("B", 21, "Math", &["Google", "Google", "Google"]);
        let c = create_student("C", 22, "Art", &["Google"]);

        assert_eq!(shared_internships(&a, &b), 2);
        assert_eq!(shared_internships(&b, &a), 2);
        assert_eq!(shared_internships(&a, &c), 1);
    }

    #[test]
    fn test_oversized_weights_saturate() {
        let mut registry = StudentRegistry::new(vec![
            create_student("A", 20, "CS", &["Google", "Meta"]),
            create_student("B", 20, "CS", &["Google", "Meta"]),
        ])
        .unwrap();
        registry.pair(StudentId(0), StudentId(1));
        let weights = ConnectionWeights {
            roommate: u32::MAX,
            shared_internship: u32::MAX / 2 + 1,
            same_major: u32::MAX,
            same_age: u32::MAX,
        };

        assert_eq!(
            attribute_strength(registry.student(StudentId(0)), registry.student(StudentId(1)), &weights),
            u32::MAX
        );
        assert_eq!(connection_strength(&registry, StudentId(0), StudentId(1), &weights), u32::MAX);
    }

    #[test]
    fn test_internship_match_is_case_sensitive() {
        let a = create_student("A", 20, "CS", &["Google"]);
        let b = create_student("B", 21, "Math", &["google"]);

        assert_eq!(attribute_strength(&a, &b, &ConnectionWeights::default()), 0);
    }
}
