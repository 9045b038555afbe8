pub mod auth;
pub mod client;
pub mod code;
pub mod router;

pub use auth::AuthConfig;
pub use client::{PingClient, RpcClient, TicketingClient};
pub use code::{RpcCode, RpcError, RpcResult};
pub use router::{build_router, AppState};
