//! Story Context - 故事生成限界上下文
//!
//! 职责:
//! - 表单参数（题材、年级、篇幅）建模
//! - Prompt 模板选择与填充

mod prompt;
mod value_objects;

pub use prompt::build_prompt;
pub use value_objects::{
    GradeLevel, LengthMode, StoryRequest, DEFAULT_GENRE, DEFAULT_GRADE_LEVEL, DEFAULT_LENGTH_MODE,
};
