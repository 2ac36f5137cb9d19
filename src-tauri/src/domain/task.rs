//! Task Rules

use super::{DomainError, DomainResult, TaskLists};

/// Titles must not be empty; any other string is kept verbatim
pub fn validate_title(title: &str) -> DomainResult<()> {
    if title.is_empty() {
        return Err(DomainError::InvalidInput("task title must not be empty".into()));
    }
    Ok(())
}

pub fn validate_lists(lists: &TaskLists) -> DomainResult<()> {
    lists
        .ongoing
        .iter()
        .chain(lists.done.iter())
        .try_for_each(|title| validate_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_titles_rejected() {
        assert!(validate_title("buy milk").is_ok());
        assert!(validate_title(" ").is_ok());
        assert!(matches!(validate_title(""), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_lists_rejected_if_any_title_empty() {
        let ok = TaskLists::new(vec!["a".into()], vec!["b".into()]);
        let bad = TaskLists::new(vec!["a".into()], vec!["".into()]);
        assert!(validate_lists(&ok).is_ok());
        assert!(validate_lists(&bad).is_err());
    }
}
