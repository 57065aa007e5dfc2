//! Block section - finds the longest run of identical adjacent characters.

/// Returns the length of the longest run of identical adjacent characters.
///
/// For non-empty input the result is in `[1, len]`. Empty input yields `0`;
/// validated candidates are never empty.
pub fn longest_run(candidate: &str) -> usize {
    let mut chars = candidate.chars();
    let Some(mut prev) = chars.next() else {
        return 0;
    };

    let mut longest = 1;
    let mut current = 1;
    for c in chars {
        if c == prev {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
        prev = c;
    }
    longest
}
