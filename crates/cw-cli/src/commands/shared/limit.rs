/// Compute effective limit with precedence: global flag -> configured default.
/// Zero from either source means "no limit".
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> Option<usize> {
    let limit = global.unwrap_or(configured);
    (limit > 0).then(|| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Keep at most `limit` items.
#[must_use]
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}
