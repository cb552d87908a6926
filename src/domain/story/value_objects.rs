//! Story Context - Value Objects

use serde::{Deserialize, Serialize};

/// 默认题材
pub const DEFAULT_GENRE: &str = "sci-fi";

/// 默认年级
pub const DEFAULT_GRADE_LEVEL: &str = "7";

/// 默认篇幅参数
pub const DEFAULT_LENGTH_MODE: &str = "short";

/// 篇幅模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    Short,
    Long,
}

impl LengthMode {
    /// 解析查询参数，只接受 `short` / `long`（区分大小写）
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "short" => Some(Self::Short),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
        }
    }
}

impl Default for LengthMode {
    fn default() -> Self {
        Self::Short
    }
}

impl std::fmt::Display for LengthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 受众年级
///
/// 表单提供四个固定档位，后端同样接受任意年级字符串（如 `"7"`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeLevel {
    Toddler,
    PreSchool,
    SchoolAge,
    Adolescent,
    Custom(String),
}

impl GradeLevel {
    /// 表单中可选的档位
    pub const AUDIENCE_LEVELS: [GradeLevel; 4] = [
        GradeLevel::Toddler,
        GradeLevel::PreSchool,
        GradeLevel::SchoolAge,
        GradeLevel::Adolescent,
    ];

    pub fn parse(value: &str) -> Self {
        match value {
            "Toddler" => Self::Toddler,
            "Pre-School" => Self::PreSchool,
            "School-Age" => Self::SchoolAge,
            "Adolescent" => Self::Adolescent,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Toddler => "Toddler",
            Self::PreSchool => "Pre-School",
            Self::SchoolAge => "School-Age",
            Self::Adolescent => "Adolescent",
            Self::Custom(s) => s,
        }
    }
}

impl Default for GradeLevel {
    fn default() -> Self {
        Self::Custom(DEFAULT_GRADE_LEVEL.to_string())
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GradeLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// 故事生成请求
///
/// `length_mode` 保留原始字符串：未知取值会生成空 prompt，而不是报错
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRequest {
    pub genre: String,
    pub grade_level: GradeLevel,
    pub length_mode: String,
}

impl StoryRequest {
    pub fn new(genre: impl Into<String>, grade_level: GradeLevel, length_mode: LengthMode) -> Self {
        Self {
            genre: genre.into(),
            grade_level,
            length_mode: length_mode.as_str().to_string(),
        }
    }

    /// 从可选参数构造，缺失项使用默认值
    pub fn from_params(
        genre: Option<String>,
        grade_level: Option<String>,
        length_mode: Option<String>,
    ) -> Self {
        Self {
            genre: genre.unwrap_or_else(|| DEFAULT_GENRE.to_string()),
            grade_level: grade_level
                .map(|g| GradeLevel::parse(&g))
                .unwrap_or_default(),
            length_mode: length_mode.unwrap_or_else(|| DEFAULT_LENGTH_MODE.to_string()),
        }
    }

    pub fn length(&self) -> Option<LengthMode> {
        LengthMode::from_param(&self.length_mode)
    }
}

impl Default for StoryRequest {
    fn default() -> Self {
        Self::from_params(None, None, None)
    }
}
