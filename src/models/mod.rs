// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ConnectionWeights, RegistryError, Student, StudentId, StudentRegistry};
pub use requests::{ChatRequest, FriendRequestRequest, LoadRosterRequest, ReferralRequest, StudentRecord};
pub use responses::{
    ErrorResponse, GraphEdge, GraphResponse, HealthResponse, InboxResponse, MessageResponse,
    ReferralResponse, RoommatePair, RoommatesResponse, StudentSummary,
};
