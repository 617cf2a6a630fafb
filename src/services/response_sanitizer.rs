use std::str::FromStr;

/// Stand-in handed to the parser when a completion carries no object.
pub const EMPTY_OBJECT: &str = "{}";

/// How a JSON object is cut out of a free-form completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SanitizerStrategy {
    /// First `{` through last `}`. Prompts were tuned against this.
    #[default]
    Greedy,
    /// First structurally balanced object, falling back to `Greedy`.
    Balanced,
}

impl FromStr for SanitizerStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(SanitizerStrategy::Greedy),
            "balanced" => Ok(SanitizerStrategy::Balanced),
            other => Err(format!("unknown sanitizer strategy '{}'", other)),
        }
    }
}

/// Extracts the JSON-looking part of `text`, or `None` when nothing
/// brace-delimited is present.
pub fn sanitize(text: &str, strategy: SanitizerStrategy) -> Option<&str> {
    match strategy {
        SanitizerStrategy::Greedy => greedy_object(text),
        SanitizerStrategy::Balanced => balanced_object(text).or_else(|| greedy_object(text)),
    }
}

fn greedy_object(text: &str) -> Option<&str> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Some(&text[start..=end]),
        _ => None,
    }
}

fn balanced_object(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|(_, c)| *c == '{')
        .find_map(|(start, _)| balanced_from(text, start))
}

// Scans from an opening brace, skipping string literals and JSON5 comments.
// Every delimiter is ASCII, so walking bytes never splits a UTF-8 sequence.
fn balanced_from(text: &str, start: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut in_string: Option<u8> = None;
    let mut i = start;

    while i < bytes.len() {
        let b = bytes[i];
        match in_string {
            Some(_) if b == b'\\' => i += 1,
            Some(quote) if b == quote => in_string = None,
            Some(_) => {}
            None => match (b, bytes.get(i + 1)) {
                (b'"' | b'\'', _) => in_string = Some(b),
                (b'/', Some(b'/')) => {
                    i = text[i..].find('\n').map_or(bytes.len(), |n| i + n);
                    continue;
                }
                (b'/', Some(b'*')) => {
                    i = text[i + 2..]
                        .find("*/")
                        .map_or(bytes.len(), |n| i + 2 + n + 2);
                    continue;
                }
                (b'{', _) => depth += 1,
                (b'}', _) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=i]);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}
