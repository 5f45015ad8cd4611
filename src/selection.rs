// Selection parsing: converts answers such as `1,3,5`, `2-4` or `all` into
// 1-based file indices.

use std::collections::HashSet;
use std::num::ParseIntError;
use thiserror::Error;

/// Answers that select every file.
const SELECT_ALL: [&str; 4] = ["vse", "all", "a", "*"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid choice: {0}")]
    InvalidIndex(String),
    #[error("Not a number: {token} ({source})")]
    NotANumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse `input` against `total` discovered files.
///
/// The result keeps the order in which indices first appear and drops later
/// repeats, so `3,1-3` selects `[3, 1, 2]`. Any bad token rejects the whole
/// answer.
pub fn parse_selection(input: &str, total: usize) -> Result<Vec<usize>, SelectionError> {
    let answer = input.trim().to_lowercase();
    if SELECT_ALL.contains(&answer.as_str()) {
        return Ok((1..=total).collect());
    }

    let compact: String = answer.chars().filter(|c| !c.is_whitespace()).collect();
    let mut selection = Vec::new();
    for token in compact.split(',').filter(|t| !t.is_empty()) {
        if let Some((start, end)) = token.split_once('-') {
            let start = parse_number(start, token)?;
            let end = parse_number(end, token)?;
            if start < 1 || end > total as i64 || start > end {
                return Err(SelectionError::InvalidRange(token.to_string()));
            }
            selection.extend((start..=end).map(|i| i as usize));
        } else {
            let index = parse_number(token, token)?;
            if index < 1 || index > total as i64 {
                return Err(SelectionError::InvalidIndex(token.to_string()));
            }
            selection.push(index as usize);
        }
    }

    let mut seen = HashSet::new();
    selection.retain(|i| seen.insert(*i));
    Ok(selection)
}

fn parse_number(text: &str, token: &str) -> Result<i64, SelectionError> {
    text.parse::<i64>().map_err(|source| SelectionError::NotANumber {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_ignores_case_and_padding() {
        assert_eq!(parse_selection("  ALL \n", 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_selection("A", 2).unwrap(), vec![1, 2]);
    }

    #[test]
    fn inner_whitespace_is_stripped() {
        assert_eq!(parse_selection("1 , 2 -\t3", 4).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn half_open_range_is_not_a_number() {
        assert!(matches!(
            parse_selection("-3", 5),
            Err(SelectionError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_selection("2-", 5),
            Err(SelectionError::NotANumber { .. })
        ));
    }
}
