use crate::domain::model::{
    AddCommentRequest, CreateTicketRequest, GetServerInfoRequest, GetTicketByIdRequest,
    ListTicketsRequest, ListTicketsResponse, PingRequest, PingResponse, ServerInfo, Ticket,
    TicketResponse, TicketStatus, UpdateTicketStatusRequest,
};
use crate::rpc::auth::TOKEN_HEADER;
use crate::rpc::code::RpcError;
use crate::utils::error::{Result, SampleError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Minimal JSON-RPC client: POSTs a JSON body to `<base>/<service>/<Method>`
/// and decodes either the response type or the error envelope.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RpcClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| SampleError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(SampleError::InvalidConfigValueError {
                    field: "base_url".to_string(),
                    value: base_url.to_string(),
                    reason: format!("Unsupported URL scheme: {}", scheme),
                })
            }
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn call<Req, Resp>(&self, procedure: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, procedure);
        tracing::debug!("Calling {}", url);

        let mut builder = self.http.post(&url).json(request);
        if let Some(token) = &self.token {
            builder = builder.header(TOKEN_HEADER, token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await?;
            let err = serde_json::from_str::<RpcError>(&body)
                .unwrap_or_else(|_| RpcError::internal(format!("HTTP {}: {}", status, body)));
            Err(SampleError::RpcError(err))
        }
    }
}

/// Typed client for the ping service.
#[derive(Debug, Clone)]
pub struct PingClient {
    rpc: RpcClient,
}

impl PingClient {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    pub async fn ping(&self, message: impl Into<String>, number: i64) -> Result<PingResponse> {
        let request = PingRequest {
            message: message.into(),
            number,
        };
        self.rpc.call("ping.v1.PingService/Ping", &request).await
    }

    pub async fn get_server_info(&self) -> Result<ServerInfo> {
        self.rpc
            .call("ping.v1.PingService/GetServerInfo", &GetServerInfoRequest {})
            .await
    }
}

/// Typed client for the ticketing service.
#[derive(Debug, Clone)]
pub struct TicketingClient {
    rpc: RpcClient,
}

impl TicketingClient {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    pub async fn create_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        let response: TicketResponse = self
            .rpc
            .call(
                "ticketing.v1.TicketingService/CreateTicket",
                &CreateTicketRequest { ticket },
            )
            .await?;
        Ok(response.ticket)
    }

    pub async fn get_ticket_by_id(&self, id: impl Into<String>) -> Result<Ticket> {
        let response: TicketResponse = self
            .rpc
            .call(
                "ticketing.v1.TicketingService/GetTicketByID",
                &GetTicketByIdRequest { id: id.into() },
            )
            .await?;
        Ok(response.ticket)
    }

    pub async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let response: ListTicketsResponse = self
            .rpc
            .call(
                "ticketing.v1.TicketingService/ListTickets",
                &ListTicketsRequest {},
            )
            .await?;
        Ok(response.tickets)
    }

    pub async fn add_comment(
        &self,
        ticket_id: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<Ticket> {
        let response: TicketResponse = self
            .rpc
            .call(
                "ticketing.v1.TicketingService/AddComment",
                &AddCommentRequest {
                    ticket_id: ticket_id.into(),
                    comment: comment.into(),
                },
            )
            .await?;
        Ok(response.ticket)
    }

    pub async fn update_ticket_status(
        &self,
        ticket_id: impl Into<String>,
        new_status: TicketStatus,
    ) -> Result<Ticket> {
        let response: TicketResponse = self
            .rpc
            .call(
                "ticketing.v1.TicketingService/UpdateTicketStatus",
                &UpdateTicketStatusRequest {
                    ticket_id: ticket_id.into(),
                    new_status,
                },
            )
            .await?;
        Ok(response.ticket)
    }
}
