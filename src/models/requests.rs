use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Student;

/// Student record as submitted over the API
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StudentRecord {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(max = 150))]
    pub age: u32,
    #[validate(length(min = 1))]
    pub gender: String,
    pub year: u32,
    #[validate(length(min = 1))]
    pub major: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub gpa: f64,
    #[serde(alias = "roommate_preferences", rename = "roommatePreferences", default)]
    pub roommate_preferences: Vec<String>,
    #[serde(alias = "previous_internships", rename = "previousInternships", default)]
    pub previous_internships: Vec<String>,
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        Student::new(
            record.name,
            record.age,
            record.gender,
            record.year,
            record.major,
            record.gpa,
            record.roommate_preferences,
            record.previous_internships,
        )
    }
}

/// Request to replace the loaded roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoadRosterRequest {
    #[validate(nested)]
    pub students: Vec<StudentRecord>,
}

/// Request to find a referral path
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReferralRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "start_student", rename = "startStudent")]
    pub start_student: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_company", rename = "targetCompany")]
    pub target_company: String,
}

/// Request to send a friend request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FriendRequestRequest {
    #[validate(length(min = 1))]
    pub sender: String,
    #[validate(length(min = 1))]
    pub receiver: String,
}

/// Request to send a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub sender: String,
    #[validate(length(min = 1))]
    pub receiver: String,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}
