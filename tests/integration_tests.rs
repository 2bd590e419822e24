// Integration tests for Campus Graph

use campus_graph::core::{assign_roommates, build_graph, find_referral_path};
use campus_graph::models::{ConnectionWeights, Student, StudentId, StudentRegistry};
use campus_graph::services::parse_roster;

const ROSTER: &str = include_str!("../data/roster.txt");

fn load_registry() -> StudentRegistry {
    StudentRegistry::new(parse_roster(ROSTER).unwrap()).unwrap()
}

fn names(registry: &StudentRegistry, path: &[StudentId]) -> Vec<String> {
    path.iter().map(|id| registry.student(*id).name.clone()).collect()
}

/// Deterministic roster where preferences point all over the place
fn create_tangled_roster(count: usize) -> Vec<Student> {
    (0..count)
        .map(|i| {
            let prefs = (1..=4)
                .map(|step| format!("S{}", (i * 3 + step * 5) % (count + 2)))
                .collect();
            Student::new(
                format!("S{}", i),
                18 + (i % 4) as u32,
                "Female",
                1,
                if i % 3 == 0 { "CS" } else { "Math" },
                3.0,
                prefs,
                vec![],
            )
        })
        .collect()
}

#[test]
fn test_integration_roster_to_referral() {
    let registry = load_registry();
    let graph = build_graph(&registry, &ConnectionWeights::default());

    assert_eq!(graph.node_count(), 5);

    let bob = registry.lookup("Bob").unwrap();
    let path = find_referral_path(&graph, &registry, bob, "stripe");
    assert_eq!(names(&registry, &path), vec!["Bob", "Alice", "Charlie"]);

    let evan = registry.lookup("Evan").unwrap();
    assert!(find_referral_path(&graph, &registry, evan, "Google").is_empty());
}

#[test]
fn test_integration_matching_then_rebuild() {
    let mut registry = load_registry();
    let weights = ConnectionWeights::default();
    let before = build_graph(&registry, &weights);

    let result = assign_roommates(&mut registry);

    let alice = registry.lookup("Alice").unwrap();
    let bob = registry.lookup("Bob").unwrap();
    let charlie = registry.lookup("Charlie").unwrap();
    let dana = registry.lookup("Dana").unwrap();
    let evan = registry.lookup("Evan").unwrap();

    assert_eq!(result.pairs, vec![(alice, bob), (charlie, dana)]);
    assert_eq!(result.unpaired, vec![evan]);

    // The old graph is a snapshot; only a rebuild sees the roommate bonus
    let after = build_graph(&registry, &weights);
    assert_eq!(before.weight(alice, bob), Some(2));
    assert_eq!(after.weight(alice, bob), Some(6));
    assert_eq!(after.weight(charlie, dana), Some(6));
}

#[test]
fn test_integration_matching_invariants() {
    for count in [2, 5, 9, 16, 33] {
        let mut registry = StudentRegistry::new(create_tangled_roster(count)).unwrap();
        let result = assign_roommates(&mut registry);

        for id in registry.ids() {
            if let Some(roommate) = registry.roommate_of(id) {
                // Symmetric
                assert_eq!(registry.roommate_of(roommate), Some(id));
                assert_ne!(roommate, id);

                // Mutual consent
                let me = registry.student(id);
                let them = registry.student(roommate);
                assert!(me.prefers(&them.name), "{} paired without listing {}", me.name, them.name);
                assert!(them.prefers(&me.name), "{} paired without listing {}", them.name, me.name);
            }
        }

        assert_eq!(result.pairs.len() * 2 + result.unpaired.len(), count);
    }
}

#[test]
fn test_integration_graph_symmetry() {
    let registry = StudentRegistry::new(create_tangled_roster(20)).unwrap();
    let graph = build_graph(&registry, &ConnectionWeights::default());

    for a in graph.nodes() {
        for edge in graph.neighbors(a) {
            assert!(edge.weight >= 1);
            assert_eq!(graph.weight(edge.neighbor, a), Some(edge.weight));
        }
    }
}
