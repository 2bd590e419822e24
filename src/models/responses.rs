use serde::{Deserialize, Serialize};

/// Student as listed by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub year: u32,
    pub major: String,
    pub gpa: f64,
    #[serde(rename = "roommatePreferences")]
    pub roommate_preferences: Vec<String>,
    #[serde(rename = "previousInternships")]
    pub previous_internships: Vec<String>,
    pub roommate: Option<String>,
}

/// Undirected edge between two named students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Response for the graph endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<String>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoommatePair {
    pub first: String,
    pub second: String,
}

/// Response for the roommate endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoommatesResponse {
    pub pairs: Vec<RoommatePair>,
    pub unpaired: Vec<String>,
}

/// Response for the referral endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralResponse {
    #[serde(rename = "targetCompany")]
    pub target_company: String,
    pub path: Vec<String>,
    pub found: bool,
}

/// Friend requests and chat history of one student
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboxResponse {
    pub student: String,
    #[serde(rename = "friendRequests")]
    pub friend_requests: Vec<String>,
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<String>,
}

/// Acknowledgement for a broadcast message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub students: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
