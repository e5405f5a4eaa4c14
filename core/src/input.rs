//! Reading the target list

use std::io::BufRead;

use crate::error::{FanoutError, FanoutResult};
use crate::partition::WorkItem;

/// Read one target per line until end of input
///
/// Line terminators and surrounding whitespace are stripped and blank lines
/// skipped. A last line without a trailing newline is still a target.
///
/// # Errors
/// [`FanoutError::EmptyInput`] if no target precedes end of input,
/// [`FanoutError::Io`] if reading fails.
pub fn read_targets<R: BufRead>(reader: R) -> FanoutResult<Vec<WorkItem>> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let target = line.trim();
        if !target.is_empty() {
            targets.push(target.to_string());
        }
    }

    if targets.is_empty() {
        return Err(FanoutError::EmptyInput);
    }

    tracing::debug!(count = targets.len(), "Read targets");
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_in_order() {
        let input = Cursor::new("http://a\nhttp://b\r\nhttp://c\n");
        let targets = read_targets(input).unwrap();
        assert_eq!(targets, vec!["http://a", "http://b", "http://c"]);
    }

    #[test]
    fn test_keeps_unterminated_last_line() {
        let targets = read_targets(Cursor::new("http://a\nhttp://b")).unwrap();
        assert_eq!(targets, vec!["http://a", "http://b"]);
    }

    #[test]
    fn test_skips_blank_lines() {
        let targets = read_targets(Cursor::new("\n  \nhttp://a\n\n")).unwrap();
        assert_eq!(targets, vec!["http://a"]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            read_targets(Cursor::new("")),
            Err(FanoutError::EmptyInput)
        ));
        assert!(matches!(
            read_targets(Cursor::new("\n\n")),
            Err(FanoutError::EmptyInput)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let input = Cursor::new(vec![b'h', 0xff, b'\n']);
        assert!(matches!(read_targets(input), Err(FanoutError::Io(_))));
    }
}
