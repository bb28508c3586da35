//! Comma tokenization and parenthetical splitting.
//!
//! Bulletins enumerate locations as comma-delimited lists where a comma
//! inside parentheses is part of a sub-location group, not a delimiter:
//!
//!   "Isabela (Santo Tomas, Santa Maria), Cagayan"
//!
//! splits into two tokens, not four. Splitting is depth-aware at any nesting
//! level; unbalanced input is accepted best-effort with depth clamped at 0.

/// Split `text` on commas at parenthesis depth 0, trimming each token.
///
/// Round-trip law: for tokens with balanced parentheses and no surrounding
/// whitespace, `tokenize(tokens.join(", ")) == tokens`.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    split_top_level(text, ',')
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect()
}

/// Split on `delimiter` wherever parenthesis depth is 0. Untrimmed segments;
/// depth never goes below 0 so a stray `)` does not swallow the rest.
pub(crate) fn split_top_level(text: &str, delimiter: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for ch in text.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c == delimiter && depth == 0 => {
                segments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}

/// Split one token into its main phrase and parenthetical sub-locations.
///
/// Only the first top-level `(...)` group yields sub-locations; any text
/// after its closing paren — including further groups — is appended verbatim
/// to the main phrase ("first group wins"). A token with no parentheses
/// returns the trimmed token and an empty list.
pub fn split_parenthetical(token: &str) -> (String, Vec<String>) {
    let open = match token.find('(') {
        Some(pos) => pos,
        None => return (token.trim().to_string(), Vec::new()),
    };

    // Find the matching close for the first top-level open
    let mut depth = 0usize;
    let mut close = None;
    for (i, ch) in token.char_indices().skip_while(|(i, _)| *i < open) {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            _ => {}
        }
    }

    let mut main = token[..open].trim().to_string();
    let interior = match close {
        Some(end) => &token[open + 1..end],
        // Unbalanced: treat everything after the open paren as the interior
        None => &token[open + 1..],
    };

    let sub_locations: Vec<String> = split_top_level(interior, ',')
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(end) = close {
        let remainder = token[end + 1..].trim();
        if !remainder.is_empty() {
            if main.is_empty() {
                main = remainder.to_string();
            } else {
                main = format!("{main} {remainder}");
            }
        }
    }

    (main, sub_locations)
}
