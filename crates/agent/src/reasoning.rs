//! Removal of the model's reasoning segment.
//!
//! Reasoning models wrap their scratch work in `<think>...</think>` ahead of
//! the answer. Only the answer is shown to the user.

pub const REASONING_START: &str = "<think>";
pub const REASONING_END: &str = "</think>";

/// Remove every terminated reasoning segment, markers included, then trim.
///
/// Each segment runs from a start marker to the nearest following end
/// marker, across newlines. A start marker with no end marker after it is
/// left in place along with everything after it.
pub fn strip_reasoning(raw: &str) -> String {
    let mut answer = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find(REASONING_START) {
        let inside = &rest[start + REASONING_START.len()..];
        let Some(end) = inside.find(REASONING_END) else {
            break;
        };
        answer.push_str(&rest[..start]);
        rest = &inside[end + REASONING_END.len()..];
    }
    answer.push_str(rest);

    answer.trim().to_string()
}
