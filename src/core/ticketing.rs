use crate::domain::model::{Ticket, TicketStatus};
use crate::domain::ports::TicketingService;
use crate::rpc::code::{RpcError, RpcResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory ticket store. All access is serialized behind one mutex;
/// every operation is lock, look up, mutate, return.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Mutex<HashMap<String, Ticket>>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tickets.lock().expect("ticket map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TicketingService for TicketStore {
    async fn create_ticket(&self, ticket: Ticket) -> RpcResult<Ticket> {
        if ticket.id.trim().is_empty() {
            return Err(RpcError::invalid_argument("ticket id must not be empty"));
        }

        let mut tickets = self.tickets.lock().expect("ticket map poisoned");
        if tickets.contains_key(&ticket.id) {
            return Err(RpcError::already_exists("ticket already exists"));
        }

        tickets.insert(ticket.id.clone(), ticket.clone());
        tracing::debug!("Created ticket {}", ticket.id);
        Ok(ticket)
    }

    async fn get_ticket_by_id(&self, id: &str) -> RpcResult<Ticket> {
        let tickets = self.tickets.lock().expect("ticket map poisoned");
        tickets
            .get(id)
            .cloned()
            .ok_or_else(|| RpcError::not_found("ticket not found"))
    }

    async fn list_tickets(&self) -> RpcResult<Vec<Ticket>> {
        let tickets = self.tickets.lock().expect("ticket map poisoned");
        Ok(tickets.values().cloned().collect())
    }

    async fn add_comment(&self, ticket_id: &str, comment: String) -> RpcResult<Ticket> {
        let mut tickets = self.tickets.lock().expect("ticket map poisoned");
        let ticket = tickets
            .get_mut(ticket_id)
            .ok_or_else(|| RpcError::not_found("ticket not found"))?;

        ticket.comments.push(comment);
        Ok(ticket.clone())
    }

    async fn update_ticket_status(
        &self,
        ticket_id: &str,
        new_status: TicketStatus,
    ) -> RpcResult<Ticket> {
        let mut tickets = self.tickets.lock().expect("ticket map poisoned");
        let ticket = tickets
            .get_mut(ticket_id)
            .ok_or_else(|| RpcError::not_found("ticket not found"))?;

        ticket.status = new_status;
        Ok(ticket.clone())
    }
}
