use crate::models::{StudentId, StudentRegistry};
use std::collections::VecDeque;

/// Result of a roommate matching run
///
/// Mirrors the roommate slots of the registry at the end of the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoommateAssignment {
    /// Each pair once, lower id first
    pub pairs: Vec<(StudentId, StudentId)>,
    /// Students left without a roommate
    pub unpaired: Vec<StudentId>,
    /// Number of proposals made during the run
    pub proposals: usize,
}

impl RoommateAssignment {
    pub fn roommate_of(&self, id: StudentId) -> Option<StudentId> {
        self.pairs.iter().find_map(|&(a, b)| {
            if a == id {
                Some(b)
            } else if b == id {
                Some(a)
            } else {
                None
            }
        })
    }
}

/// Assign roommates through mutual-preference proposals
///
/// # Protocol
/// 1. Every student with a non-empty preference list starts in the queue
/// 2. A free proposer tries the next name on their list
/// 3. The proposal only counts if the receiver also lists the proposer
/// 4. A free receiver accepts; a paired receiver trades up when the proposer
///    ranks strictly better than the current roommate, and the displaced
///    roommate goes back into the queue
///
/// Students without preferences never propose but can still be proposed to.
/// Existing pairings in the registry are the starting state.
pub fn assign_roommates(registry: &mut StudentRegistry) -> RoommateAssignment {
    let mut next_proposal = vec![0usize; registry.len()];
    let mut queue: VecDeque<StudentId> = registry
        .iter()
        .filter(|(_, student)| !student.roommate_preferences.is_empty())
        .map(|(id, _)| id)
        .collect();
    let mut proposals = 0;

    while let Some(proposer) = queue.pop_front() {
        // Stale queue entries are no-ops
        if registry.roommate_of(proposer).is_some() {
            continue;
        }

        let preference_count = registry.student(proposer).roommate_preferences.len();
        let index = next_proposal[proposer.index()];
        if index >= preference_count {
            continue;
        }
        next_proposal[proposer.index()] = index + 1;
        let has_more = index + 1 < preference_count;
        proposals += 1;

        let proposer_name = registry.student(proposer).name.clone();
        let preferred = &registry.student(proposer).roommate_preferences[index];

        let receiver = match registry.lookup(preferred) {
            Some(receiver) if receiver != proposer => receiver,
            _ => {
                tracing::debug!("{} prefers unknown student {}", proposer_name, preferred);
                if has_more {
                    queue.push_back(proposer);
                }
                continue;
            }
        };

        let receiver_student = registry.student(receiver);
        let Some(proposer_rank) = receiver_student.rank_of(&proposer_name) else {
            tracing::debug!(
                "{} does not list {}, proposal rejected",
                receiver_student.name,
                proposer_name
            );
            if has_more {
                queue.push_back(proposer);
            }
            continue;
        };

        match registry.roommate_of(receiver) {
            None => {
                registry.pair(proposer, receiver);
                tracing::debug!("{} paired with {}", proposer_name, registry.student(receiver).name);
            }
            Some(current) => {
                let current_rank = receiver_student
                    .rank_of(&registry.student(current).name)
                    .unwrap_or(usize::MAX);

                if proposer_rank < current_rank {
                    tracing::debug!(
                        "{} leaves {} for {}",
                        registry.student(receiver).name,
                        registry.student(current).name,
                        proposer_name
                    );
                    registry.pair(proposer, receiver);
                    // Displaced student resumes from their saved index
                    queue.push_back(current);
                } else if has_more {
                    queue.push_back(proposer);
                }
            }
        }
    }

    let pairs = registry.roommate_pairs();
    let unpaired: Vec<StudentId> = registry
        .ids()
        .filter(|&id| registry.roommate_of(id).is_none())
        .collect();

    tracing::info!(
        "Roommate matching finished: {} pairs, {} unpaired, {} proposals",
        pairs.len(),
        unpaired.len(),
        proposals
    );

    RoommateAssignment {
        pairs,
        unpaired,
        proposals,
    }
}
