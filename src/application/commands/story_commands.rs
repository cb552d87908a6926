//! Story Commands - 故事生成命令

use crate::domain::story::StoryRequest;

/// 生成故事命令
#[derive(Debug, Clone)]
pub struct GenerateStoryCommand {
    pub request: StoryRequest,
}

/// 生成故事响应
#[derive(Debug, Clone)]
pub struct GenerateStoryResponse {
    /// 模型原始输出，可能为空
    pub text: String,
}
