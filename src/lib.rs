pub mod config;
pub mod core;
pub mod domain;
pub mod rpc;
pub mod utils;

pub use config::{CliConfig, ServerSettings};
pub use core::{PingHandler, TicketStore};
pub use domain::model::{PingRequest, PingResponse, Product, ServerInfo, Ticket, TicketStatus};
pub use domain::ports::{PingService, TicketingService};
pub use rpc::{build_router, AppState, AuthConfig, PingClient, RpcClient, RpcCode, RpcError, TicketingClient};
pub use utils::error::{Result, SampleError};
