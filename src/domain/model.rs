use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a ticket. Serialized as the original wire strings ("OPEN", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub comments: Vec<String>,
}

impl Ticket {
    pub fn new(id: impl Into<String>, subject: impl Into<String>, status: TicketStatus) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            status,
            comments: Vec::new(),
        }
    }
}

// Request/response envelopes for the ticketing procedures.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub ticket: Ticket,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTicketByIdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTicketsRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub ticket_id: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTicketStatusRequest {
    pub ticket_id: String,
    pub new_status: TicketStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketResponse {
    pub ticket: Ticket,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<Ticket>,
}

// Ping service messages.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingRequest {
    pub message: String,
    #[serde(default)]
    pub number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub reply: String,
    pub number: i64,
    pub processed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetServerInfoRequest {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub server_name: String,
    pub server_version: String,
    pub current_time: DateTime<Utc>,
}

/// A product in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
}
