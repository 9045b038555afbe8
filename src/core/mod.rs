pub mod ecommerce;
pub mod ping;
pub mod ticketing;

pub use crate::domain::model::{PingRequest, PingResponse, Product, ServerInfo, Ticket, TicketStatus};
pub use crate::domain::ports::{PingService, TicketingService};
pub use ping::PingHandler;
pub use ticketing::TicketStore;
