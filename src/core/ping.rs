use crate::domain::model::{PingRequest, PingResponse, ServerInfo};
use crate::domain::ports::PingService;
use crate::rpc::code::RpcResult;
use async_trait::async_trait;
use chrono::Utc;

/// Echo-style ping handler. Replies with the request message plus "World"
/// and stamps responses with the current time.
#[derive(Debug, Clone)]
pub struct PingHandler {
    server_name: String,
    server_version: String,
}

impl PingHandler {
    pub fn new(server_name: impl Into<String>, server_version: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            server_version: server_version.into(),
        }
    }
}

impl Default for PingHandler {
    fn default() -> Self {
        Self::new("MyServer", "1.0")
    }
}

#[async_trait]
impl PingService for PingHandler {
    async fn ping(&self, request: PingRequest) -> RpcResult<PingResponse> {
        Ok(PingResponse {
            reply: format!("{}World", request.message),
            number: request.number,
            processed_at: Utc::now(),
        })
    }

    async fn get_server_info(&self) -> RpcResult<ServerInfo> {
        Ok(ServerInfo {
            server_name: self.server_name.clone(),
            server_version: self.server_version.clone(),
            current_time: Utc::now(),
        })
    }
}
