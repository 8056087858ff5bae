#![allow(clippy::unwrap_used)]

//! The text-only diagnostic surface: raw preprocessor messages with a
//! source offset and no tree behind them.

use helplink::{HelpTopic, classify_message};

use crate::helpers::link_fixtures::{BASE, assembler};

/// A sketch with one closing brace too many at the end.
const BROKEN_SKETCH: &str =
    "void setup() {\n  size(400, 400);\n}\n\nvoid draw() {\n  background(0);\n}\n}\n";

#[test]
fn test_extra_closing_brace_elides_the_block_body() {
    let topic = classify_message(
        "expecting EOF, found '}'",
        BROKEN_SKETCH,
        BROKEN_SKETCH.chars().count(),
    )
    .unwrap();

    // Snippet runs from the line above `void draw` through the stray
    // brace, with the block body replaced by a comment.
    assert_eq!(
        topic,
        HelpTopic::ExtraClosingBrace {
            original: "\nvoid draw() {\n  /* your code */\n}\n}".into(),
            fixed: "\nvoid draw() {\n  /* your code */\n}\n".into(),
        }
    );
}

#[test]
fn test_extra_closing_brace_link_is_fully_encoded() {
    let topic = classify_message(
        "expecting EOF, found '}'",
        BROKEN_SKETCH,
        BROKEN_SKETCH.chars().count(),
    )
    .unwrap();

    assert_eq!(
        assembler().assemble(&topic),
        format!(
            "{BASE}extraneousclosingcurlybrace\
             ?original=%0Avoid+draw%28%29+%7B%0A++%2F*+your+code+*%2F%0A%7D%0A%7D\
             &fixed=%0Avoid+draw%28%29+%7B%0A++%2F*+your+code+*%2F%0A%7D%0A"
        )
    );
}

#[test]
fn test_expecting_dot_names_the_bad_declarator() {
    let source = "size(400, 400);\nint[] a = new int[5], b = new int[];\n";

    // Offset points at `a`; the first declarator is fine, the second
    // gives `new int[]` no size.
    assert_eq!(
        classify_message("expecting DOT, found '['", source, 22),
        Some(HelpTopic::IncorrectDeclaration {
            type_name: "int".into(),
            var_name: "b".into(),
        })
    );
}

#[test]
fn test_mode_mixing_names_the_method() {
    let source = "size(400, 400);\nvoid draw() {\n";

    assert_eq!(
        classify_message(
            "It looks like you're mixing \"active\" and \"static\" modes.",
            source,
            source.chars().count(),
        ),
        Some(HelpTopic::IncorrectMethodDeclaration {
            method_name: "draw".into(),
        })
    );
}

#[test]
fn test_unexpected_token_messages_keep_identifiers_only() {
    assert_eq!(
        classify_message("unexpected token: int", "int;", 0),
        Some(HelpTopic::UnexpectedToken {
            type_name: "int".into(),
        })
    );
    assert_eq!(classify_message("unexpected token: ;", "int;", 0), None);
}

#[test]
fn test_unknown_messages_stay_unclassified() {
    assert_eq!(classify_message("cannot find symbol", "int x;", 0), None);
}
