// Unit tests for Campus Graph

use campus_graph::core::{
    assign_roommates, build_graph, connection_strength, find_referral_path,
};
use campus_graph::models::{ConnectionWeights, Student, StudentId, StudentRegistry};

fn create_student(name: &str, age: u32, major: &str, prefs: &[&str], internships: &[&str]) -> Student {
    Student::new(
        name,
        age,
        "Female",
        2,
        major,
        3.5,
        prefs.iter().map(|s| s.to_string()).collect(),
        internships.iter().map(|s| s.to_string()).collect(),
    )
}

fn registry(students: Vec<Student>) -> StudentRegistry {
    StudentRegistry::new(students).unwrap()
}

#[test]
fn test_unrelated_students_have_no_edge() {
    let reg = registry(vec![
        create_student("A", 20, "CS", &[], &["Google"]),
        create_student("B", 23, "History", &[], &["Meta"]),
    ]);
    let weights = ConnectionWeights::default();

    assert_eq!(connection_strength(&reg, StudentId(0), StudentId(1), &weights), 0);
    assert_eq!(build_graph(&reg, &weights).edge_count(), 0);
}

#[test]
fn test_strength_sums_independent_bonuses() {
    let reg = registry(vec![
        create_student("A", 20, "CS", &[], &["Google"]),
        create_student("B", 20, "CS", &[], &["Google"]),
    ]);

    // major 2 + age 1 + one shared internship 3
    let strength = connection_strength(&reg, StudentId(0), StudentId(1), &ConnectionWeights::default());
    assert_eq!(strength, 6);
}

#[test]
fn test_custom_weights() {
    let reg = registry(vec![
        create_student("A", 20, "CS", &[], &[]),
        create_student("B", 20, "CS", &[], &[]),
    ]);
    let weights = ConnectionWeights {
        roommate: 0,
        shared_internship: 0,
        same_major: 5,
        same_age: 0,
    };

    assert_eq!(connection_strength(&reg, StudentId(0), StudentId(1), &weights), 5);
}

#[test]
fn test_build_graph_is_deterministic() {
    let reg = registry(vec![
        create_student("A", 20, "CS", &[], &["Google"]),
        create_student("B", 20, "Math", &[], &["Google"]),
        create_student("C", 21, "CS", &[], &[]),
    ]);
    let weights = ConnectionWeights::default();

    assert_eq!(build_graph(&reg, &weights), build_graph(&reg, &weights));
}

#[test]
fn test_displaced_student_keeps_proposing() {
    // C reaches B first; A arrives later and B prefers A
    let mut reg = registry(vec![
        create_student("C", 20, "CS", &["B", "D"], &[]),
        create_student("B", 20, "CS", &["A", "C"], &[]),
        create_student("A", 20, "CS", &["B"], &[]),
        create_student("D", 20, "CS", &["C"], &[]),
    ]);
    let (c, b, a, d) = (StudentId(0), StudentId(1), StudentId(2), StudentId(3));

    let result = assign_roommates(&mut reg);

    assert_eq!(reg.roommate_of(b), Some(a));
    assert_eq!(reg.roommate_of(c), Some(d));
    assert_eq!(result.roommate_of(d), Some(c));
    assert!(result.unpaired.is_empty());
}

#[test]
fn test_displaced_student_with_no_fallback_stays_single() {
    let mut reg = registry(vec![
        create_student("C", 20, "CS", &["B"], &[]),
        create_student("B", 20, "CS", &["A", "C"], &[]),
        create_student("A", 20, "CS", &["B"], &[]),
    ]);

    let result = assign_roommates(&mut reg);

    assert_eq!(reg.roommate_of(StudentId(1)), Some(StudentId(2)));
    assert_eq!(reg.roommate_of(StudentId(0)), None);
    assert_eq!(result.unpaired, vec![StudentId(0)]);
}

#[test]
fn test_students_without_preferences_can_still_be_chosen() {
    // B never proposes, and without listing A it cannot accept either
    let mut reg = registry(vec![
        create_student("A", 20, "CS", &["B"], &[]),
        create_student("B", 20, "CS", &[], &[]),
    ]);

    let result = assign_roommates(&mut reg);
    assert!(result.pairs.is_empty());
}

#[test]
fn test_referral_prefers_cheaper_direct_route() {
    // start-X and start-Y weight 1, X-Z weight 1, Y is the target
    let reg = registry(vec![
        create_student("Start", 20, "Art", &[], &[]),
        create_student("X", 20, "Law", &[], &["Initech"]),
        create_student("Y", 20, "Music", &[], &["Globex"]),
        create_student("Z", 30, "Dance", &[], &["Initech"]),
    ]);
    let weights = ConnectionWeights {
        roommate: 4,
        shared_internship: 1,
        same_major: 2,
        same_age: 1,
    };
    let graph = build_graph(&reg, &weights);

    assert_eq!(graph.weight(StudentId(0), StudentId(1)), Some(1));
    assert_eq!(graph.weight(StudentId(0), StudentId(2)), Some(1));
    assert_eq!(graph.weight(StudentId(1), StudentId(3)), Some(1));

    let path = find_referral_path(&graph, &reg, StudentId(0), "globex");
    assert_eq!(path, vec![StudentId(0), StudentId(2)]);
}

#[test]
fn test_referral_unreachable_target() {
    let reg = registry(vec![
        create_student("A", 20, "CS", &[], &[]),
        create_student("B", 20, "CS", &[], &[]),
    ]);
    let graph = build_graph(&reg, &ConnectionWeights::default());

    assert!(find_referral_path(&graph, &reg, StudentId(0), "Google").is_empty());
}
