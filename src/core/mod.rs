// Core algorithm exports
pub mod graph;
pub mod referral;
pub mod roommates;
pub mod scoring;

pub use graph::{build_graph, Edge, SocialGraph};
pub use referral::find_referral_path;
pub use roommates::{assign_roommates, RoommateAssignment};
pub use scoring::{attribute_strength, connection_strength};
