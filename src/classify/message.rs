//! Classification of raw preprocessor status messages.
//!
//! Parse failures surface as message strings with a character offset,
//! before any tree exists. The handlers here recover enough structure
//! from the source text alone to pick a topic; positions are character
//! indices throughout, matching the [`crate::text`] scanners.

use smol_str::SmolStr;
use tracing::trace;

use crate::text::{is_identifier, is_identifier_part, matching_brace, split_declarators, trim_type};

use super::topic::HelpTopic;
use super::unexpected_token_topic;

const EXTRA_BRACE_MESSAGE: &str = "expecting EOF, found '}'";
const MODE_MIXING_MESSAGE: &str =
    "It looks like you're mixing \"active\" and \"static\" modes.";

/// Classify a raw status message against the unit source.
///
/// `error_offset` is the character index the message was reported at;
/// text at and above that position is what the handlers inspect.
/// Messages outside the recognized set yield `None`.
pub fn classify_message(message: &str, source: &str, error_offset: usize) -> Option<HelpTopic> {
    trace!("[CLASSIFY] message '{}' at char {}", message, error_offset);

    if message == EXTRA_BRACE_MESSAGE {
        extra_closing_brace(source, error_offset)
    } else if message.starts_with("expecting DOT") {
        incorrect_array_declaration(source, error_offset)
    } else if message == MODE_MIXING_MESSAGE {
        incorrect_method_declaration(source, error_offset)
    } else if let Some(token) = message.strip_prefix("unexpected token:") {
        unexpected_token_topic(token.trim())
    } else {
        None
    }
}

/// Rebuild the block around an extra `}` with its body elided, so the
/// page can show the shape of the mistake next to the corrected form.
fn extra_closing_brace(source: &str, error_offset: usize) -> Option<HelpTopic> {
    let above: Vec<char> = source.chars().take(error_offset).collect();

    // The last brace is the extra one; the one before it closes the
    // block the user actually finished.
    let extra = rfind_char(&above, '}', above.len())?;
    let block_close = rfind_char(&above, '}', extra)?;
    let block_open = matching_brace(&above, block_close)?;

    // Start one line above the opening brace for context.
    let snippet_start = match rfind_char(&above, '\n', block_open) {
        None => 0,
        Some(0) => 1,
        Some(line_break) => match rfind_char(&above, '\n', line_break) {
            None => 0,
            Some(previous_break) => previous_break + 1,
        },
    };

    let opening: String = above[snippet_start..=block_open].iter().collect();
    let closing: String = above[block_close..=extra].iter().collect();
    let original = format!("{opening}\n  /* your code */\n{closing}");
    // The fixed form is the same snippet without the extra brace.
    let fixed = SmolStr::new(&original[..original.len() - 1]);

    Some(HelpTopic::ExtraClosingBrace {
        original: SmolStr::new(original),
        fixed,
    })
}

/// Pick the broken declarator out of an array declaration statement.
///
/// The statement runs from the error to the next `;`. The first
/// declarator that is not a well-formed array declarator names the
/// variable; the element type sits just before the error, behind any
/// brackets. A statement of only well-formed declarators yields `None`.
fn incorrect_array_declaration(source: &str, error_offset: usize) -> Option<HelpTopic> {
    let chars: Vec<char> = source.chars().collect();
    if error_offset > chars.len() {
        return None;
    }

    let rest: String = chars[error_offset..].iter().collect();
    let statement = match rest.find(';') {
        Some(end) => &rest[..end],
        None => rest.as_str(),
    };

    let declarator = split_declarators(statement)
        .into_iter()
        .find(|piece| !is_well_formed_array_declarator(piece))?;
    let var_name: String = declarator
        .trim_start()
        .chars()
        .take_while(|&c| is_identifier_part(c))
        .collect();
    if var_name.is_empty() {
        return None;
    }

    let type_name = scan_type_backward(&chars[..error_offset]);
    if type_name.is_empty() {
        return None;
    }

    Some(HelpTopic::IncorrectDeclaration {
        type_name: SmolStr::new(trim_type(&type_name)),
        var_name: SmolStr::new(var_name),
    })
}

/// Shape check for one declarator piece: `name = new Type[size]` with a
/// literal size, or `name = { ... }`, trailing separator ignored.
fn is_well_formed_array_declarator(piece: &str) -> bool {
    let body = piece.trim().trim_end_matches([',', ';']).trim_end();
    let Some((name, initializer)) = body.split_once('=') else {
        return false;
    };
    if !is_identifier(name.trim()) {
        return false;
    }

    let initializer = initializer.trim();
    if let Some(creation) = initializer.strip_prefix("new") {
        let creation = creation.trim_start();
        let Some(open) = creation.find('[') else {
            return false;
        };
        let element = creation[..open].trim_end();
        let Some(size) = creation[open + 1..].strip_suffix(']') else {
            return false;
        };
        is_identifier(element) && !size.is_empty() && size.chars().all(|c| c.is_ascii_digit())
    } else {
        initializer.starts_with('{') && initializer.ends_with('}')
    }
}

/// Walk backward over whitespace and brackets, then collect the
/// contiguous run of type characters.
fn scan_type_backward(before: &[char]) -> String {
    let mut collected: Vec<char> = Vec::new();
    for &c in before.iter().rev() {
        if !(c.is_whitespace() || c == '[' || c == ']') {
            collected.push(c);
        } else if !collected.is_empty() {
            break;
        }
    }
    collected.reverse();
    collected.into_iter().collect()
}

/// The method name sits just before the last `(` above the error.
fn incorrect_method_declaration(source: &str, error_offset: usize) -> Option<HelpTopic> {
    let above: Vec<char> = source.chars().take(error_offset).collect();
    let open_paren = rfind_char(&above, '(', above.len())?;

    let name_start = above[..open_paren]
        .iter()
        .rposition(|&c| !is_identifier_part(c))
        .map(|boundary| boundary + 1)
        .unwrap_or(0);
    if name_start == open_paren {
        return None;
    }

    let method_name: String = above[name_start..open_paren].iter().collect();
    Some(HelpTopic::IncorrectMethodDeclaration {
        method_name: SmolStr::new(method_name),
    })
}

/// Last position of `needle` strictly before `end`.
fn rfind_char(chars: &[char], needle: char, end: usize) -> Option<usize> {
    chars[..end].iter().rposition(|&c| c == needle)
}
