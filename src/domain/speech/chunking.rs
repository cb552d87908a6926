//! 文本分块
//!
//! 语音合成接口对单次输入长度有限制，长文本按固定字符数切分。
//! 字符以 Unicode 标量值（`char`）计数，切分点永远落在字符边界上。

/// 单块最大字符数
pub const MAX_CHUNK_CHARS: usize = 5000;

/// 文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// 从 0 开始的块序号
    pub index: usize,
    /// 块内容（借用自原文）
    pub content: &'a str,
    /// 在原文中的起始字符位置
    pub char_offset: usize,
}

impl TextChunk<'_> {
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// 按 [`MAX_CHUNK_CHARS`] 切分文本
pub fn split_into_chunks(text: &str) -> Vec<TextChunk<'_>> {
    split_with_limit(text, MAX_CHUNK_CHARS)
}

/// 按指定字符数切分文本
///
/// 从左到右连续切分，无重叠，最后一块可以更短；空文本返回空列表
pub fn split_with_limit(text: &str, max_chars: usize) -> Vec<TextChunk<'_>> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (byte_idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(TextChunk {
                index: chunks.len(),
                content: &text[start..byte_idx],
                char_offset: chunks.len() * max_chars,
            });
            start = byte_idx;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        chunks.push(TextChunk {
            index: chunks.len(),
            content: &text[start..],
            char_offset: chunks.len() * max_chars,
        });
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_into_chunks("").is_empty());
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks = split_into_chunks("Once upon a time.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[0].content, "Once upon a time.");
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_chunk() {
        let text = "a".repeat(MAX_CHUNK_CHARS * 2);
        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.char_count() == MAX_CHUNK_CHARS));
    }

    #[test]
    fn test_twelve_thousand_chars_gives_three_chunks() {
        let text: String = (0..12_000)
            .map(|i| char::from(b'a' + (i % 26) as u8))
            .collect();
        let chunks = split_into_chunks(&text);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].content, &text[0..5000]);
        assert_eq!(chunks[1].content, &text[5000..10000]);
        assert_eq!(chunks[2].content, &text[10000..12000]);
        assert_eq!(
            chunks.iter().map(|c| c.char_offset).collect::<Vec<_>>(),
            vec![0, 5000, 10000]
        );
    }

    #[test]
    fn test_chunks_concatenate_back_to_input() {
        let text = "龙与骑士的故事。".repeat(1500);
        let chunks = split_with_limit(&text, 777);

        let joined: String = chunks.iter().map(|c| c.content).collect();
        assert_eq!(joined, text);
        let total = text.chars().count();
        assert_eq!(chunks.len(), (total + 776) / 777);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
            assert!(chunk.char_count() <= 777);
        }
    }

    #[test]
    fn test_multibyte_chars_are_counted_once() {
        let text = "é".repeat(5001);
        let chunks = split_into_chunks(&text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].char_count(), 5000);
        assert_eq!(chunks[1].content, "é");
    }
}
