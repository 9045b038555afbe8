use crate::domain::model::{PingRequest, PingResponse, ServerInfo, Ticket, TicketStatus};
use crate::rpc::code::RpcResult;
use async_trait::async_trait;

/// The ping service surface: Ping and GetServerInfo.
#[async_trait]
pub trait PingService: Send + Sync {
    async fn ping(&self, request: PingRequest) -> RpcResult<PingResponse>;
    async fn get_server_info(&self) -> RpcResult<ServerInfo>;
}

/// The ticketing service surface: CRUD over tickets plus comments.
#[async_trait]
pub trait TicketingService: Send + Sync {
    async fn create_ticket(&self, ticket: Ticket) -> RpcResult<Ticket>;
    async fn get_ticket_by_id(&self, id: &str) -> RpcResult<Ticket>;
    async fn list_tickets(&self) -> RpcResult<Vec<Ticket>>;
    async fn add_comment(&self, ticket_id: &str, comment: String) -> RpcResult<Ticket>;
    async fn update_ticket_status(
        &self,
        ticket_id: &str,
        new_status: TicketStatus,
    ) -> RpcResult<Ticket>;
}
