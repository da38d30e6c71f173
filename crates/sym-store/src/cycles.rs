use sym_core::{ErrorInfo, PermId, SymError};

use crate::store::PermStore;

/// Parses 1-based disjoint cycle notation into an image array.
///
/// Cycles are parenthesised integer lists concatenated without separators;
/// whitespace and commas inside a cycle are equivalent. `"()"` denotes the
/// identity and parses to the empty image. Non-positive or non-integer
/// tokens and repeated points are input errors.
pub fn parse_cycles(text: &str) -> Result<Vec<u32>, SymError> {
    let mut cycles: Vec<Vec<u32>> = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let Some(stripped) = rest.strip_prefix('(') else {
            return Err(syntax_error(text, "expected '('"));
        };
        let Some(close) = stripped.find(')') else {
            return Err(syntax_error(text, "unterminated cycle"));
        };
        let body = &stripped[..close];
        rest = stripped[close + 1..].trim_start();

        let mut cycle = Vec::new();
        for token in body.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            let point: u32 = token.parse().map_err(|_| {
                SymError::Input(
                    ErrorInfo::new("cycle-token", "cycle entries must be positive integers")
                        .with_context("token", token),
                )
            })?;
            if point == 0 {
                return Err(SymError::Input(
                    ErrorInfo::new("cycle-token", "cycle entries are 1-based")
                        .with_context("token", token),
                ));
            }
            cycle.push(point - 1);
        }
        if !cycle.is_empty() {
            cycles.push(cycle);
        }
    }

    let Some(max_point) = cycles.iter().flatten().max().copied() else {
        return Ok(Vec::new());
    };
    let length = max_point as usize + 1;
    let mut image: Vec<u32> = (0..length as u32).collect();
    let mut moved = vec![false; length];
    for cycle in &cycles {
        for idx in 0..cycle.len() {
            let from = cycle[idx] as usize;
            let to = cycle[(idx + 1) % cycle.len()];
            if moved[from] {
                return Err(SymError::Input(
                    ErrorInfo::new("cycle-overlap", "point occurs in more than one position")
                        .with_context("point", from + 1),
                ));
            }
            moved[from] = true;
            image[from] = to;
        }
    }
    Ok(image)
}

/// Renders an interned permutation in disjoint 1-based cycle notation.
pub fn format_cycles(store: &PermStore, id: PermId) -> String {
    let image = store.get(id);
    let mut seen = vec![false; image.len()];
    let mut out = String::new();
    for start in 0..image.len() {
        if seen[start] || image[start] as usize == start {
            continue;
        }
        out.push('(');
        let mut point = start;
        let mut first = true;
        loop {
            seen[point] = true;
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(&(point + 1).to_string());
            point = image[point] as usize;
            if point == start {
                break;
            }
        }
        out.push(')');
    }
    if out.is_empty() {
        out.push_str("()");
    }
    out
}

fn syntax_error(text: &str, message: &str) -> SymError {
    SymError::Input(
        ErrorInfo::new("cycle-syntax", message).with_context("input", text.trim()),
    )
}
