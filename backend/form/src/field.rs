use payloads::MAX_POINT_CHARS;
use thiserror::Error;

/// Inline message shown under an input that fails validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("此字段为必填项")]
    Required,

    #[error("不能超过{max}个字符")]
    TooLong { max: usize },
}

/// Every input shares the same rules: required, at most [`MAX_POINT_CHARS`] characters.
///
/// Length is counted in characters, not bytes, so a CJK answer gets the same room as a latin one.
/// Characters are Unicode scalar values, not UTF-16 units as in a browser `maxLength`, so an
/// emoji counts once here where a browser counts it twice.
/// Whitespace is not trimmed, a blank answer still counts as filled in.
pub fn validate(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }

    if value.chars().count() > MAX_POINT_CHARS {
        return Err(FieldError::TooLong {
            max: MAX_POINT_CHARS,
        });
    }

    Ok(())
}

/// `value` broken into rows of at most `width` characters, at least one row.
///
/// Inputs grow with their content instead of scrolling.
pub fn wrap_rows(value: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    value
        .split('\n')
        .flat_map(|line| {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                return vec![String::new()];
            }

            chars
                .chunks(width)
                .map(|row| row.iter().collect::<String>())
                .collect()
        })
        .collect()
}

/// Rows needed to show `value` at `width` columns.
pub fn display_rows(value: &str, width: usize) -> usize {
    wrap_rows(value, width).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(validate(""), Err(FieldError::Required));
        assert_eq!(validate(" "), Ok(()));
        assert_eq!(validate("闭包"), Ok(()));
    }

    #[test]
    fn test_length_boundary() {
        assert_eq!(validate(&"a".repeat(100)), Ok(()));
        assert_eq!(
            validate(&"a".repeat(101)),
            Err(FieldError::TooLong { max: 100 })
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // 100 CJK characters are 300 bytes
        let answer = "所".repeat(100);
        assert_eq!(answer.len(), 300);
        assert_eq!(validate(&answer), Ok(()));

        assert!(validate(&"所".repeat(101)).is_err());
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::Required.to_string(), "此字段为必填项");
        assert_eq!(
            FieldError::TooLong { max: 100 }.to_string(),
            "不能超过100个字符"
        );
    }

    #[test]
    fn test_display_rows() {
        assert_eq!(display_rows("", 40), 1);
        assert_eq!(display_rows("short", 40), 1);
        assert_eq!(display_rows(&"x".repeat(41), 40), 2);
        assert_eq!(display_rows(&"x".repeat(80), 40), 2);
        assert_eq!(display_rows("one\ntwo\n", 40), 3);
        assert_eq!(display_rows("abc", 0), 3);
    }

    #[test]
    fn test_wrap_rows() {
        assert_eq!(wrap_rows("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap_rows("借用检查器", 2), vec!["借用", "检查", "器"]);
        assert_eq!(wrap_rows("ab\n\ncd", 5), vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_emoji_count_once() {
        assert_eq!(validate(&"🦀".repeat(100)), Ok(()));
    }
}
