//! Line-level lexical state for C sources.
//!
//! A two-flag state machine decides, one physical line at a time, whether the
//! line sits inside a block comment or a preprocessor macro. Only lines that are
//! neither are handed to the extractor.
//!
//! Precedence per line:
//!
//! 1. Block comment: the line is a comment line if it starts inside a comment or
//!    a `/*` opens on it. A `*/` on the same line ends the state for the lines
//!    that follow, not for this one.
//! 2. Macro: the line is a macro line if it starts with `#` (after leading
//!    whitespace), ends with a `\` continuation, or follows a line that did.
//! 3. Anything else is code.
//!
//! String literals containing comment tokens and nested comments are not handled.

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Comment,
    Macro,
    Code,
}

impl LineClass {
    pub fn is_eligible(self) -> bool {
        self == LineClass::Code
    }
}

#[derive(Debug, Default)]
pub struct LexicalState {
    in_comment: bool,
    continuation: bool,
}

impl LexicalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine over `line` and classify it.
    pub fn classify(&mut self, line: &str) -> LineClass {
        let comment_line = self.advance_comment(line);

        let continues = line.trim_end().ends_with('\\');
        let macro_line = self.continuation || continues || line.trim_start().starts_with('#');
        self.continuation = continues;

        if comment_line {
            LineClass::Comment
        } else if macro_line {
            LineClass::Macro
        } else {
            LineClass::Code
        }
    }

    /// Walk comment tokens left to right; returns whether the line counts as a comment line.
    fn advance_comment(&mut self, line: &str) -> bool {
        let mut comment_line = self.in_comment;
        let mut rest = line;

        loop {
            if self.in_comment {
                match rest.find(COMMENT_CLOSE) {
                    Some(pos) => {
                        self.in_comment = false;
                        rest = &rest[pos + COMMENT_CLOSE.len()..];
                    }
                    None => break,
                }
            } else {
                match rest.find(COMMENT_OPEN) {
                    Some(pos) => {
                        self.in_comment = true;
                        comment_line = true;
                        rest = &rest[pos + COMMENT_OPEN.len()..];
                    }
                    None => break,
                }
            }
        }

        comment_line
    }
}
