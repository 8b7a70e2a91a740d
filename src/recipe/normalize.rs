/// Number of entries in a diet or allergy list.
///
/// The backing store encodes "no entries" as a single empty string, so a
/// one-element list whose element is blank counts as zero. Blank elements in
/// longer lists are counted normally.
pub fn effective_count<S: AsRef<str>>(items: &[S]) -> usize {
    match items {
        [only] if only.as_ref().trim().is_empty() => 0,
        _ => items.len(),
    }
}
