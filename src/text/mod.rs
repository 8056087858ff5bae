//! Text manipulation utilities for working with raw source code.
//!
//! These scanners back the parts of classification that work on source
//! text rather than the syntax tree: matching delimiters, splitting
//! declaration statements, and validating identifier tokens. All
//! positions at this level are *character* indices, not byte offsets.

/// Check if a character is considered part of an identifier.
///
/// Uses Unicode Standard Annex #31 rules for identifier characters,
/// extended with `$`, which Java-like sources allow in names.
#[inline]
pub fn is_identifier_part(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}

/// Check if a token is lexically a plain identifier.
///
/// Empty text is not an identifier.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_identifier_part)
}

/// Find the character index of the delimiter matching the one at `start`.
///
/// Scans forward from an opening `{`/`(` or backward from a closing
/// `}`/`)`, counting nesting depth. The two delimiter pairs share one
/// depth counter, so `(` may be answered by `}` in malformed source;
/// the caller decides whether that matters.
///
/// Returns `None` if `start` is not on a delimiter or the depth never
/// returns to zero inside `chars`. On well-balanced text the function
/// is an involution: `matching_brace(matching_brace(i)) == i`.
pub fn matching_brace(chars: &[char], start: usize) -> Option<usize> {
    let forward = match chars.get(start)? {
        '{' | '(' => true,
        '}' | ')' => false,
        _ => return None,
    };

    let mut depth = 1usize;
    let mut index = start;
    loop {
        if forward {
            index += 1;
            if index >= chars.len() {
                return None;
            }
        } else {
            if index == 0 {
                return None;
            }
            index -= 1;
        }

        match (chars[index], forward) {
            ('{' | '(', true) | ('}' | ')', false) => depth += 1,
            ('}' | ')', true) | ('{' | '(', false) => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
}

/// Find the matching delimiter in a source string.
///
/// Convenience wrapper over [`matching_brace`]; `start` and the returned
/// position are character indices into `text`.
pub fn find_matching_brace(text: &str, start: usize) -> Option<usize> {
    let chars: Vec<char> = text.chars().collect();
    matching_brace(&chars, start)
}

/// Split a declaration statement into its individual declarators.
///
/// Splits on top-level commas only: commas nested inside a
/// brace-delimited initializer (`{1, 2, 3}`) are skipped via
/// [`matching_brace`]. Each returned piece keeps its trailing `,` or
/// `;`. An unmatched initializer brace consumes the rest of the
/// statement as a single piece.
///
/// # Example
/// ```
/// use helplink::text::split_declarators;
///
/// let pieces = split_declarators("a = new int[5], b = {1,2,3}, c = new int[1];");
/// assert_eq!(
///     pieces,
///     vec!["a = new int[5],", " b = {1,2,3},", " c = new int[1];"]
/// );
/// ```
pub fn split_declarators(statement: &str) -> Vec<&str> {
    let chars: Vec<char> = statement.chars().collect();
    let byte_offsets: Vec<usize> = statement.char_indices().map(|(offset, _)| offset).collect();
    let byte_at =
        |index: usize| byte_offsets.get(index).copied().unwrap_or(statement.len());

    let mut pieces = Vec::new();
    let mut current = 0usize;
    let mut piece_start = 0usize;

    while current < chars.len() {
        match chars[current] {
            '{' => match matching_brace(&chars, current) {
                // The closing brace itself is consumed by the next pass.
                Some(close) => current = close,
                None => break,
            },
            ',' => {
                pieces.push(&statement[byte_at(piece_start)..byte_at(current + 1)]);
                piece_start = current + 1;
                current += 1;
            }
            _ => current += 1,
        }
    }

    pieces.push(&statement[byte_at(piece_start)..]);
    pieces
}

/// Trim a possibly dot-qualified type name to its simple name.
///
/// Idempotent; empty input yields empty output.
///
/// # Example
/// ```
/// use helplink::text::trim_type;
///
/// assert_eq!(trim_type("java.lang.String"), "String");
/// assert_eq!(trim_type("int"), "int");
/// ```
pub fn trim_type(type_name: &str) -> &str {
    match type_name.rfind('.') {
        Some(dot) => &type_name[dot + 1..],
        None => type_name,
    }
}

/// Get the element type from an array type's textual form.
///
/// Strips exactly the first `[]` occurrence; a non-array type is
/// returned unchanged.
pub fn element_type(array_type: &str) -> String {
    match array_type.find("[]") {
        Some(open) => format!("{}{}", &array_type[..open], &array_type[open + 2..]),
        None => array_type.to_string(),
    }
}
