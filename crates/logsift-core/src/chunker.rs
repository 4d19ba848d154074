//! Chunk planning under a token-estimate ceiling

use crate::{estimate_tokens, Chunk};

/// Window length after shrinking a window whose estimate exceeds `ceiling`
///
/// Scales `len` by `ceiling / estimate`, rounding down, clamped to `1..=len`.
/// Windows within the ceiling keep their length.
pub fn shrink_window(len: usize, estimate: usize, ceiling: usize) -> usize {
    if estimate <= ceiling || len == 0 {
        return len;
    }
    let scaled = (len as u128 * ceiling as u128 / estimate as u128) as usize;
    scaled.clamp(1, len)
}

/// Split `lines` into ordered chunks of at most `max_lines` lines
///
/// A window whose token estimate exceeds `max_tokens` is shrunk with
/// [`shrink_window`]; the lines it gives up start the next window, so every
/// input line lands in exactly one chunk.
pub fn plan_chunks(lines: &[String], max_lines: usize, max_tokens: usize) -> Vec<Chunk> {
    let lines_per_chunk = max_lines.max(1).min(lines.len());
    let mut chunks = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let end = (cursor + lines_per_chunk).min(lines.len());
        let window = &lines[cursor..end];
        let estimate = estimate_tokens(&window.join("\n"));

        let len = shrink_window(window.len(), estimate, max_tokens);
        let shrunk = len < window.len();
        if shrunk {
            tracing::info!(
                "Chunk {} too large ({} tokens), reducing from {} to {} lines",
                chunks.len() + 1,
                estimate,
                window.len(),
                len
            );
        }

        let kept = window[..len].to_vec();
        let estimated_tokens = if shrunk {
            estimate_tokens(&kept.join("\n"))
        } else {
            estimate
        };

        chunks.push(Chunk {
            index: chunks.len() + 1,
            first_line: cursor + 1,
            lines: kept,
            estimated_tokens,
            shrunk,
        });
        cursor += len;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize, width: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("{:0>width$}", i, width = width))
            .collect()
    }

    fn flatten(chunks: &[Chunk]) -> Vec<String> {
        chunks.iter().flat_map(|c| c.lines.clone()).collect()
    }

    #[test]
    fn test_shrink_window_within_ceiling_is_untouched() {
        assert_eq!(shrink_window(30, 1500, 1500), 30);
        assert_eq!(shrink_window(30, 10, 1500), 30);
    }

    #[test]
    fn test_shrink_window_scales_down() {
        // floor(30 * 1500 / 2000) = 22
        assert_eq!(shrink_window(30, 2000, 1500), 22);
        // floor(30 * 1500 / 4501) = 9
        assert_eq!(shrink_window(30, 4501, 1500), 9);
    }

    #[test]
    fn test_shrink_window_keeps_at_least_one_line() {
        assert_eq!(shrink_window(30, 1_000_000, 1500), 1);
        assert_eq!(shrink_window(1, 5000, 1500), 1);
    }

    #[test]
    fn test_plan_chunks_empty() {
        assert!(plan_chunks(&[], 30, 1500).is_empty());
    }

    #[test]
    fn test_plan_chunks_fewer_lines_than_limit() {
        let input = lines(7, 10);
        let chunks = plan_chunks(&input, 30, 1500);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 7);
        assert_eq!(chunks[0].first_line, 1);
        assert!(!chunks[0].shrunk);
    }

    #[test]
    fn test_plan_chunks_fixed_windows() {
        let input = lines(45, 10);
        let chunks = plan_chunks(&input, 30, 1500);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 30);
        assert_eq!(chunks[1].len(), 15);
        assert_eq!(chunks[1].first_line, 31);
        assert_eq!(chunks[1].last_line(), 45);
        assert_eq!(flatten(&chunks), input);
    }

    #[test]
    fn test_plan_chunks_shrinks_oversized_window() {
        // 30 lines of 399 bytes joined by 29 newlines = 11999 bytes -> 2999 tokens
        let input = lines(30, 399);
        let chunks = plan_chunks(&input, 30, 1500);

        let expected_first = 30 * 1500 / 2999;
        assert_eq!(chunks[0].len(), expected_first);
        assert!(chunks[0].shrunk);
        assert!(chunks[0].estimated_tokens <= 1500);
        assert_eq!(flatten(&chunks), input);
    }

    #[test]
    fn test_plan_chunks_shrunk_lines_start_next_chunk() {
        let input = lines(60, 399);
        let chunks = plan_chunks(&input, 30, 1500);

        assert_eq!(flatten(&chunks), input);
        for pair in chunks.windows(2) {
            assert_eq!(pair[1].first_line, pair[0].last_line() + 1);
        }
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i + 1);
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_plan_chunks_single_huge_line() {
        let input = vec!["x".repeat(100_000), "small".to_string()];
        let chunks = plan_chunks(&input, 30, 1500);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines, vec!["x".repeat(100_000)]);
        assert_eq!(chunks[1].lines, vec!["small".to_string()]);
    }

    #[test]
    fn test_plan_chunks_zero_max_lines_is_treated_as_one() {
        let input = lines(3, 4);
        let chunks = plan_chunks(&input, 0, 1500);
        assert_eq!(chunks.len(), 3);
    }
}
