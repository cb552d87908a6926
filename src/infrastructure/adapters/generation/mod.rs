//! Generation Adapter - 文本生成客户端实现

mod fake_text_generator;
mod vertex_text_client;

pub use fake_text_generator::FakeTextGenerator;
pub use vertex_text_client::{VertexTextClient, VertexTextClientConfig};
