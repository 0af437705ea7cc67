//! Greedy word wrap into a fixed number of fixed-width lines.

use super::RenderError;
use super::template::Geometry;

/// Wrap `message` into exactly `geometry.line_count` lines of exactly
/// `geometry.max_line_width` characters. Words are never split.
pub(super) fn wrap(message: &str, geometry: Geometry) -> Result<Vec<String>, RenderError> {
    let width = geometry.max_line_width;
    let words: Vec<&str> = message.split(' ').collect();

    if let Some(word) = words.iter().find(|w| w.chars().count() > width) {
        return Err(RenderError::WordTooLong {
            word: word.to_string(),
            len: word.chars().count(),
            max: width,
        });
    }

    let len = message.chars().count();
    if len > geometry.capacity() {
        return Err(RenderError::InputTooLong {
            len,
            capacity: geometry.capacity(),
        });
    }

    let mut lines = Vec::with_capacity(geometry.line_count);
    let mut current = String::with_capacity(width);
    let mut current_len = 0;

    for word in words {
        let word_len = word.chars().count();
        if current_len + word_len > width {
            if lines.len() + 1 >= geometry.line_count {
                return Err(RenderError::LayoutExhausted {
                    line_count: geometry.line_count,
                });
            }
            lines.push(pad(current, current_len, width));
            current = String::with_capacity(width);
            current_len = 0;
        }
        current.push_str(word);
        current_len += word_len;
        // Separator only while there is room; a full line needs none.
        if current_len < width {
            current.push(' ');
            current_len += 1;
        }
    }
    lines.push(pad(current, current_len, width));

    // Unused trailing lines keep the bubble border intact.
    while lines.len() < geometry.line_count {
        lines.push(" ".repeat(width));
    }
    Ok(lines)
}

fn pad(mut line: String, len: usize, width: usize) -> String {
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    line
}
