//! Campus Graph - social graph analysis for university students
//!
//! Models a roster of students as a weighted social graph and answers two
//! questions over it: who should room with whom, and which chain of
//! acquaintances leads to someone who interned at a given company.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{assign_roommates, build_graph, connection_strength, find_referral_path, RoommateAssignment, SocialGraph};
pub use models::{ConnectionWeights, Student, StudentId, StudentRegistry};
