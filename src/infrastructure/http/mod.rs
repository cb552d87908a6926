//! HTTP Layer - 对外 HTTP 接口
//!
//! 无状态的请求/响应接口，JSON 输出

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
