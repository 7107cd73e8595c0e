use crate::types::CollectError;

/// Resolve a 1-based selection against the detected assignment list.
pub fn select_by_index<'a>(
    assignments: &'a [String],
    index: usize,
) -> Result<&'a str, CollectError> {
    if index == 0 || index > assignments.len() {
        return Err(CollectError::InvalidSelection {
            given: index,
            available: assignments.len(),
        });
    }
    Ok(assignments[index - 1].as_str())
}

/// Resolve raw prompt input: a 1-based index if it parses as one, otherwise an
/// exact assignment name. `None` when neither matches.
pub fn resolve_choice<'a>(assignments: &'a [String], raw: &str) -> Option<&'a str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(index) = raw.parse::<usize>() {
        return select_by_index(assignments, index).ok();
    }
    assignments
        .iter()
        .find(|name| name.as_str() == raw)
        .map(String::as_str)
}
