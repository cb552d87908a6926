//! Prompt 构造
//!
//! 将 StoryRequest 映射为文本模型的单条 prompt，纯函数

use super::{LengthMode, StoryRequest};

/// 构造 prompt
///
/// 篇幅参数不是 `short` / `long` 时返回空字符串
pub fn build_prompt(request: &StoryRequest) -> String {
    let genre = &request.genre;
    let grade = request.grade_level.as_str();

    match request.length() {
        Some(LengthMode::Short) => format!(
            "Generate an imaginative {genre} story suitable for {grade} graders in under 350 words. \
             Keep the story engaging but avoid complex language, focusing on concepts and events \
             {grade} students can understand."
        ),
        Some(LengthMode::Long) => format!(
            "Write a creative {genre} story for {grade} graders over 350 words. \
             Use vivid language and descriptive details to craft an engaging tale {grade} students will enjoy. \
             Develop compelling characters and build suspense to keep readers interested. \
             Focus on themes and situations appropriate for {grade}-grade students."
        ),
        None => String::new(),
    }
}
