use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{assign_roommates, build_graph, find_referral_path};
use crate::models::{
    ChatRequest, ConnectionWeights, ErrorResponse, FriendRequestRequest, GraphEdge, GraphResponse,
    HealthResponse, InboxResponse, LoadRosterRequest, MessageResponse, ReferralRequest,
    ReferralResponse, RoommatePair, RoommatesResponse, Student, StudentRegistry, StudentSummary,
};
use crate::services::Broadcaster;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RwLock<StudentRegistry>>,
    pub broadcaster: Arc<Broadcaster>,
    pub weights: ConnectionWeights,
}

impl AppState {
    pub fn new(registry: StudentRegistry, weights: ConnectionWeights) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            broadcaster: Arc::new(Broadcaster::new()),
            weights,
        }
    }
}

/// Configure all network routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/students", web::get().to(list_students))
        .route("/students/{name}/inbox", web::get().to(get_inbox))
        .route("/roster", web::post().to(load_roster))
        .route("/graph", web::get().to(get_graph))
        .route("/roommates", web::get().to(get_roommates))
        .route("/roommates/assign", web::post().to(run_roommate_matching))
        .route("/referrals", web::post().to(find_referral))
        .route("/friend-requests", web::post().to(send_friend_request))
        .route("/chats", web::post().to(send_chat));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn unknown_student(name: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Unknown student".to_string(),
        message: format!("No student named '{}' in the roster", name),
        status_code: 404,
    })
}

fn roommates_response(registry: &StudentRegistry) -> RoommatesResponse {
    let pairs = registry
        .roommate_pairs()
        .into_iter()
        .map(|(a, b)| RoommatePair {
            first: registry.student(a).name.clone(),
            second: registry.student(b).name.clone(),
        })
        .collect();
    let unpaired = registry
        .iter()
        .filter(|(id, _)| registry.roommate_of(*id).is_none())
        .map(|(_, student)| student.name.clone())
        .collect();

    RoommatesResponse { pairs, unpaired }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let students = state.registry.read().await.len();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        students,
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/students
async fn list_students(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.read().await;

    let students: Vec<StudentSummary> = registry
        .iter()
        .map(|(id, student)| StudentSummary {
            name: student.name.clone(),
            age: student.age,
            gender: student.gender.clone(),
            year: student.year,
            major: student.major.clone(),
            gpa: student.gpa,
            roommate_preferences: student.roommate_preferences.clone(),
            previous_internships: student.previous_internships.clone(),
            roommate: registry
                .roommate_of(id)
                .map(|other| registry.student(other).name.clone()),
        })
        .collect();

    HttpResponse::Ok().json(students)
}

/// Replace the roster
///
/// POST /api/v1/roster
///
/// Request body:
/// ```json
/// {
///   "students": [
///     { "name": "Alice", "age": 20, "gender": "Female", "year": 2, "major": "CS",
///       "gpa": 3.5, "roommatePreferences": ["Bob"], "previousInternships": [] }
///   ]
/// }
/// ```
async fn load_roster(
    state: web::Data<AppState>,
    req: web::Json<LoadRosterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for roster upload: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let students: Vec<Student> = req.into_inner().students.into_iter().map(Student::from).collect();
    let registry = match StudentRegistry::new(students) {
        Ok(registry) => registry,
        Err(e) => return bad_request("Invalid roster", e.to_string()),
    };

    let count = registry.len();
    *state.registry.write().await = registry;

    tracing::info!("Roster replaced with {} students", count);

    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "students": count,
    }))
}

/// Build the social graph from the current roster
///
/// GET /api/v1/graph
async fn get_graph(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.read().await;
    let graph = build_graph(&registry, &state.weights);

    let response = GraphResponse {
        nodes: registry.iter().map(|(_, s)| s.name.clone()).collect(),
        edges: graph
            .edges()
            .into_iter()
            .map(|(a, b, weight)| GraphEdge {
                source: registry.student(a).name.clone(),
                target: registry.student(b).name.clone(),
                weight,
            })
            .collect(),
    };

    tracing::debug!("Social graph:\n{}", graph.display(&registry));

    HttpResponse::Ok().json(response)
}

/// GET /api/v1/roommates
async fn get_roommates(state: web::Data<AppState>) -> impl Responder {
    let registry = state.registry.read().await;
    HttpResponse::Ok().json(roommates_response(&registry))
}

/// Run roommate matching over the current roster
///
/// POST /api/v1/roommates/assign
async fn run_roommate_matching(state: web::Data<AppState>) -> impl Responder {
    let mut registry = state.registry.write().await;
    let assignment = assign_roommates(&mut registry);

    for (a, b) in &assignment.pairs {
        tracing::info!(
            "{} paired with {}",
            registry.student(*a).name,
            registry.student(*b).name
        );
    }

    HttpResponse::Ok().json(roommates_response(&registry))
}

/// Find a referral path
///
/// POST /api/v1/referrals
///
/// Request body:
/// ```json
/// {
///   "startStudent": "Alice",
///   "targetCompany": "Google"
/// }
/// ```
async fn find_referral(
    state: web::Data<AppState>,
    req: web::Json<ReferralRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let registry = state.registry.read().await;
    let Some(start) = registry.lookup(&req.start_student) else {
        return unknown_student(&req.start_student);
    };

    // Rebuilt per request so the roommate bonus is current
    let graph = build_graph(&registry, &state.weights);
    let path: Vec<String> = find_referral_path(&graph, &registry, start, &req.target_company)
        .into_iter()
        .map(|id| registry.student(id).name.clone())
        .collect();

    tracing::info!(
        "Referral path from {} to {}: {:?}",
        req.start_student,
        req.target_company,
        path
    );

    HttpResponse::Ok().json(ReferralResponse {
        target_company: req.target_company.clone(),
        found: !path.is_empty(),
        path,
    })
}

/// POST /api/v1/friend-requests
async fn send_friend_request(
    state: web::Data<AppState>,
    req: web::Json<FriendRequestRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    {
        let registry = state.registry.read().await;
        for name in [&req.sender, &req.receiver] {
            if registry.lookup(name).is_none() {
                return unknown_student(name);
            }
        }
    }

    let message_id = state
        .broadcaster
        .send_friend_request(&req.sender, &req.receiver)
        .await;

    HttpResponse::Ok().json(MessageResponse {
        success: true,
        message_id: message_id.to_string(),
    })
}

/// POST /api/v1/chats
async fn send_chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    {
        let registry = state.registry.read().await;
        for name in [&req.sender, &req.receiver] {
            if registry.lookup(name).is_none() {
                return unknown_student(name);
            }
        }
    }

    let message_id = state
        .broadcaster
        .send_chat(&req.sender, &req.receiver, &req.message)
        .await;

    HttpResponse::Ok().json(MessageResponse {
        success: true,
        message_id: message_id.to_string(),
    })
}

/// GET /api/v1/students/{name}/inbox
async fn get_inbox(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();

    if state.registry.read().await.lookup(&name).is_none() {
        return unknown_student(&name);
    }

    let inbox = state.broadcaster.inbox(&name).await;

    HttpResponse::Ok().json(InboxResponse {
        student: name,
        friend_requests: inbox.friend_requests,
        chat_history: inbox.chat_history,
    })
}
