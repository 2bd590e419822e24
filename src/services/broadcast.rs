use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Per-student append-only message lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    pub friend_requests: Vec<String>,
    pub chat_history: Vec<String>,
}

/// Serialises friend requests and chat messages between students
///
/// Each message kind goes through its own lock so that log lines of the same
/// kind never interleave. Inboxes are keyed by student name and are never
/// read by the graph or matching code.
#[derive(Debug, Default)]
pub struct Broadcaster {
    friend_requests: Mutex<HashMap<String, Vec<String>>>,
    chats: Mutex<HashMap<String, Vec<String>>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a friend request from `sender` to `receiver`
    pub async fn send_friend_request(&self, sender: &str, receiver: &str) -> Uuid {
        let mut requests = self.friend_requests.lock().await;
        tracing::info!("FriendRequest: {} sent a friend request to {}", sender, receiver);
        requests
            .entry(receiver.to_string())
            .or_default()
            .push(sender.to_string());
        Uuid::new_v4()
    }

    /// Record a chat message from `sender` to `receiver`
    pub async fn send_chat(&self, sender: &str, receiver: &str, message: &str) -> Uuid {
        let mut chats = self.chats.lock().await;
        tracing::info!("Chat: {} to {}: {}", sender, receiver, message);
        chats
            .entry(receiver.to_string())
            .or_default()
            .push(format!("{}: {}", sender, message));
        Uuid::new_v4()
    }

    /// Snapshot of everything delivered to `student` so far
    pub async fn inbox(&self, student: &str) -> Inbox {
        let friend_requests = self
            .friend_requests
            .lock()
            .await
            .get(student)
            .cloned()
            .unwrap_or_default();
        let chat_history = self
            .chats
            .lock()
            .await
            .get(student)
            .cloned()
            .unwrap_or_default();

        Inbox {
            friend_requests,
            chat_history,
        }
    }
}
