use crate::domain::model::{
    AddCommentRequest, CreateTicketRequest, GetServerInfoRequest, GetTicketByIdRequest,
    ListTicketsRequest, ListTicketsResponse, PingRequest, PingResponse, ServerInfo,
    TicketResponse, UpdateTicketStatusRequest,
};
use crate::domain::ports::{PingService, TicketingService};
use crate::rpc::auth::{require_token, AuthConfig};
use crate::rpc::code::RpcError;
use axum::extract::State;
use axum::routing::post;
use axum::{middleware, Json, Router};
use std::sync::Arc;

/// Shared handler state for both services.
#[derive(Clone)]
pub struct AppState {
    pub ping: Arc<dyn PingService>,
    pub ticketing: Arc<dyn TicketingService>,
}

/// Builds the service router. Every procedure is POST with a JSON body;
/// only the ping service sits behind the token check.
pub fn build_router(state: AppState, auth: Arc<AuthConfig>) -> Router {
    let ping_routes = Router::new()
        .route("/ping.v1.PingService/Ping", post(ping))
        .route("/ping.v1.PingService/GetServerInfo", post(get_server_info))
        .layer(middleware::from_fn_with_state(auth, require_token));

    let ticketing_routes = Router::new()
        .route(
            "/ticketing.v1.TicketingService/CreateTicket",
            post(create_ticket),
        )
        .route(
            "/ticketing.v1.TicketingService/GetTicketByID",
            post(get_ticket_by_id),
        )
        .route(
            "/ticketing.v1.TicketingService/ListTickets",
            post(list_tickets),
        )
        .route(
            "/ticketing.v1.TicketingService/AddComment",
            post(add_comment),
        )
        .route(
            "/ticketing.v1.TicketingService/UpdateTicketStatus",
            post(update_ticket_status),
        );

    ping_routes.merge(ticketing_routes).with_state(state)
}

async fn ping(
    State(state): State<AppState>,
    Json(request): Json<PingRequest>,
) -> Result<Json<PingResponse>, RpcError> {
    state.ping.ping(request).await.map(Json)
}

async fn get_server_info(
    State(state): State<AppState>,
    Json(_request): Json<GetServerInfoRequest>,
) -> Result<Json<ServerInfo>, RpcError> {
    state.ping.get_server_info().await.map(Json)
}

async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<TicketResponse>, RpcError> {
    let ticket = state.ticketing.create_ticket(request.ticket).await?;
    Ok(Json(TicketResponse { ticket }))
}

async fn get_ticket_by_id(
    State(state): State<AppState>,
    Json(request): Json<GetTicketByIdRequest>,
) -> Result<Json<TicketResponse>, RpcError> {
    let ticket = state.ticketing.get_ticket_by_id(&request.id).await?;
    Ok(Json(TicketResponse { ticket }))
}

async fn list_tickets(
    State(state): State<AppState>,
    Json(_request): Json<ListTicketsRequest>,
) -> Result<Json<ListTicketsResponse>, RpcError> {
    let tickets = state.ticketing.list_tickets().await?;
    Ok(Json(ListTicketsResponse { tickets }))
}

async fn add_comment(
    State(state): State<AppState>,
    Json(request): Json<AddCommentRequest>,
) -> Result<Json<TicketResponse>, RpcError> {
    let ticket = state
        .ticketing
        .add_comment(&request.ticket_id, request.comment)
        .await?;
    Ok(Json(TicketResponse { ticket }))
}

async fn update_ticket_status(
    State(state): State<AppState>,
    Json(request): Json<UpdateTicketStatusRequest>,
) -> Result<Json<TicketResponse>, RpcError> {
    let ticket = state
        .ticketing
        .update_ticket_status(&request.ticket_id, request.new_status)
        .await?;
    Ok(Json(TicketResponse { ticket }))
}
