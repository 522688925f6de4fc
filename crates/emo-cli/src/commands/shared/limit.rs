/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// [`effective_limit`] as a slice length.
#[must_use]
pub fn effective_len(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(effective_limit(local, global, fallback)).unwrap_or(usize::MAX)
}
