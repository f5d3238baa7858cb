//! The declarator state machine
//!
//! Six states peel the outermost already-interpreted construct off the
//! declaration buffer, emitting English fragments in the order a human reads
//! a C declarator: find the declared name, then alternate outward between
//! the right side (array and function suffixes) and the left side (grouping
//! parentheses, pointers, qualifiers) until only the base type remains.
//!
//! Each state handler is a method on [`Translator`] returning the next
//! [`State`]; [`Translator::run`] is the driving loop. All state lives in
//! the per-call `Translator` value, so independent translations never share
//! anything.

use super::buffer::DeclBuffer;
use super::scanner::{self, Direction, Keywords};
use crate::trace::{Trace, TraceStep};
use std::fmt;

/// Translation error type.
///
/// All failures are structural and deterministic: either no declared
/// identifier exists, or a bracket/parenthesis scan ran into the end of the
/// buffer without finding its match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MalformedDeclarator { message: String },
}

impl ParseError {
    fn malformed(message: impl Into<String>) -> Self {
        ParseError::MalformedDeclarator {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedDeclarator { message } => {
                write!(f, "malformed declarator: {}", message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The machine's states, in the order control normally flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Locate the declared name (the first non-keyword identifier).
    FindIdentifier,
    /// Consume an `[...]` suffix right of the cursor.
    ArraySuffix,
    /// Consume a `(...)` suffix right of the cursor.
    FunctionSuffix,
    /// Consume a grouping `(...)` enclosing the part parsed so far.
    Grouping,
    /// Consume one `*`, `const`, or `volatile` left of the cursor.
    Prefix,
    /// Terminal: whatever remains is the base type.
    BaseType,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            State::FindIdentifier => "find identifier",
            State::ArraySuffix => "array suffix",
            State::FunctionSuffix => "function suffix",
            State::Grouping => "grouping",
            State::Prefix => "prefix",
            State::BaseType => "base type",
        };
        write!(f, "{}", label)
    }
}

/// Translate one C declarator into an English sentence.
///
/// Pure and side-effect free; identical input always produces identical
/// output, and independent calls may run concurrently.
pub fn translate(declarator: &str) -> Result<String, ParseError> {
    Translator::new(declarator).run()
}

/// One translation in progress: the buffer, the fragments emitted so far,
/// and the step trace. Created per call and discarded on completion.
pub struct Translator {
    buffer: DeclBuffer,
    keywords: Keywords,
    fragments: Vec<String>,
    trace: Trace,
}

impl Translator {
    pub fn new(declarator: &str) -> Self {
        let buffer = DeclBuffer::new(declarator);
        let mut trace = Trace::new();
        trace.push(TraceStep {
            state: State::FindIdentifier,
            action: "start".to_string(),
            fragment: None,
            buffer: buffer.remaining(),
            cursor: buffer.cursor(),
        });
        Translator {
            buffer,
            keywords: Keywords::new(),
            fragments: Vec::new(),
            trace,
        }
    }

    /// Run the machine to completion and assemble the sentence.
    pub fn run(&mut self) -> Result<String, ParseError> {
        let mut state = State::FindIdentifier;
        loop {
            state = match state {
                State::FindIdentifier => self.find_identifier()?,
                State::ArraySuffix => self.array_suffix()?,
                State::FunctionSuffix => self.function_suffix()?,
                State::Grouping => self.grouping()?,
                State::Prefix => self.prefix()?,
                State::BaseType => return self.base_type(),
            };
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// S1: scan left to right for the first maximal identifier token that is
    /// not a keyword; that token is the declared name.
    fn find_identifier(&mut self) -> Result<State, ParseError> {
        let mut i = 0;
        while i < self.buffer.len() {
            match self.buffer.char_at(i) {
                Some(c) if scanner::is_identifier_start(c) => {
                    let (word, end) = scanner::scan_word(self.buffer.chars(), i, Direction::Right);
                    if self.keywords.contains(&word) {
                        i = end;
                    } else {
                        self.buffer.erase(i..end);
                        self.buffer.set_cursor(i);
                        self.buffer.compact();
                        self.record(
                            State::FindIdentifier,
                            format!("declared name '{}'", word),
                            Some(format!("{} is", word)),
                        );
                        return Ok(State::ArraySuffix);
                    }
                }
                _ => i += 1,
            }
        }
        Err(ParseError::malformed("no declared identifier found"))
    }

    /// S2: if the next significant character right of the cursor is `[`,
    /// erase through the matching `]`. Dimension digits are discarded.
    fn array_suffix(&mut self) -> Result<State, ParseError> {
        self.buffer.skip_whitespace(Direction::Right);
        if self.buffer.peek_right() == Some('[') {
            let open = self.buffer.cursor();
            let close = self.find_closing(open, '[', ']')?;
            self.buffer.erase(open..close + 1);
            self.buffer.compact();
            self.record(
                State::ArraySuffix,
                "array suffix".to_string(),
                Some("array of".to_string()),
            );
        }
        Ok(State::FunctionSuffix)
    }

    /// S3: if the next significant character right of the cursor is `(`,
    /// erase through the matching `)`. Parameter lists are discarded.
    fn function_suffix(&mut self) -> Result<State, ParseError> {
        self.buffer.skip_whitespace(Direction::Right);
        if self.buffer.peek_right() == Some('(') {
            let open = self.buffer.cursor();
            let close = self.find_closing(open, '(', ')')?;
            self.buffer.erase(open..close + 1);
            self.buffer.compact();
            self.record(
                State::FunctionSuffix,
                "function suffix".to_string(),
                Some("function returning".to_string()),
            );
        }
        Ok(State::Grouping)
    }

    /// S4: if the character left of the cursor is `(`, it groups the part
    /// already parsed; erase through its `)` and loop back to the suffix
    /// states, since the group may itself carry `[]` or `()` outside the
    /// parentheses. Otherwise restore the cursor and move on to prefixes.
    fn grouping(&mut self) -> Result<State, ParseError> {
        let saved = self.buffer.cursor();
        self.buffer.skip_whitespace(Direction::Left);
        if self.buffer.peek_left() == Some('(') {
            let open = self.buffer.cursor() - 1;
            let close = self.find_closing(open, '(', ')')?;
            self.buffer.erase(open..close + 1);
            self.buffer.compact();
            self.record(
                State::Grouping,
                "grouping parentheses".to_string(),
                None,
            );
            Ok(State::ArraySuffix)
        } else {
            self.buffer.set_cursor(saved);
            Ok(State::Prefix)
        }
    }

    /// S5: consume exactly one `*`, `const`, or `volatile` left of the
    /// cursor, then re-check for an enclosing parenthesis before scanning
    /// for the next prefix. This alternation is what handles forms like
    /// `*(*x)[]`. When nothing is consumed, the base type is all that's left.
    fn prefix(&mut self) -> Result<State, ParseError> {
        let saved = self.buffer.cursor();
        self.buffer.skip_whitespace(Direction::Left);
        match self.buffer.peek_left() {
            Some('*') => {
                let position = self.buffer.cursor() - 1;
                self.buffer.erase_at(position);
                self.buffer.compact();
                self.record(
                    State::Prefix,
                    "pointer prefix".to_string(),
                    Some("pointer to".to_string()),
                );
                Ok(State::Grouping)
            }
            Some(c) if scanner::is_identifier_char(c) => {
                let boundary = self.buffer.cursor();
                let (word, start) =
                    scanner::scan_word(self.buffer.chars(), boundary, Direction::Left);
                let fragment = match word.as_str() {
                    "const" => "read only",
                    "volatile" => "volatile",
                    _ => {
                        // Part of the base type, not a qualifier.
                        self.buffer.set_cursor(saved);
                        return Ok(State::BaseType);
                    }
                };
                self.buffer.erase(start..boundary);
                self.buffer.compact();
                self.record(
                    State::Prefix,
                    format!("qualifier '{}'", word),
                    Some(fragment.to_string()),
                );
                Ok(State::Grouping)
            }
            _ => {
                self.buffer.set_cursor(saved);
                Ok(State::BaseType)
            }
        }
    }

    /// S6: the remaining buffer is the base type. Reject anything that is
    /// not identifier text (a stray unmatched `]` or `)` ends up here), then
    /// assemble the sentence.
    fn base_type(&mut self) -> Result<String, ParseError> {
        let rest = self.buffer.remaining();
        if let Some(c) = rest
            .chars()
            .find(|&c| !scanner::is_identifier_char(c) && c != ' ')
        {
            return Err(ParseError::malformed(format!(
                "unexpected '{}' in base type",
                c
            )));
        }
        let base = rest.split_whitespace().collect::<Vec<_>>().join(" ");
        let fragment = if base.is_empty() { None } else { Some(base) };
        self.record(State::BaseType, "base type".to_string(), fragment);
        Ok(self.fragments.join(" "))
    }

    /// Scan rightward from `open` for `close`; fail if the buffer ends first.
    fn find_closing(&self, open: usize, open_ch: char, close: char) -> Result<usize, ParseError> {
        let mut i = open + 1;
        while i < self.buffer.len() {
            if self.buffer.char_at(i) == Some(close) {
                return Ok(i);
            }
            i += 1;
        }
        Err(ParseError::malformed(format!(
            "unmatched '{}': no closing '{}'",
            open_ch, close
        )))
    }

    /// Append an emitted fragment (if any) and record the trace step.
    fn record(&mut self, state: State, action: String, fragment: Option<String>) {
        if let Some(fragment) = &fragment {
            self.fragments.push(fragment.clone());
        }
        self.trace.push(TraceStep {
            state,
            action,
            fragment,
            buffer: self.buffer.remaining(),
            cursor: self.buffer.cursor(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_fails() {
        let err = translate("int").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDeclarator { .. }));

        let err = translate("unsigned long int").unwrap_err();
        assert!(matches!(err, ParseError::MalformedDeclarator { .. }));
    }

    #[test]
    fn test_keyword_prefix_of_name_is_not_a_keyword() {
        // "intx" starts with "int" but is a distinct identifier.
        assert_eq!(translate("int intx").unwrap(), "intx is int");
    }

    #[test]
    fn test_repeated_prefixes_consume_one_token_at_a_time() {
        assert_eq!(
            translate("char* const* p").unwrap(),
            "p is pointer to read only pointer to char"
        );
    }

    #[test]
    fn test_volatile_qualifier() {
        assert_eq!(
            translate("int* volatile v").unwrap(),
            "v is volatile pointer to int"
        );
    }

    #[test]
    fn test_grouping_alternates_with_prefixes() {
        assert_eq!(
            translate("int *(*x)[]").unwrap(),
            "x is pointer to array of pointer to int"
        );
    }

    #[test]
    fn test_unmatched_open_bracket() {
        let err = translate("int x[").unwrap_err();
        assert!(err.to_string().contains("unmatched"));
    }

    #[test]
    fn test_unmatched_close_bracket() {
        assert!(translate("int x]").is_err());
    }

    #[test]
    fn test_unmatched_open_paren() {
        assert!(translate("int (x").is_err());
        assert!(translate("int x(").is_err());
    }

    #[test]
    fn test_unmatched_close_paren() {
        assert!(translate("int x)").is_err());
    }

    #[test]
    fn test_array_dimension_is_discarded() {
        assert_eq!(translate("char buf[80]").unwrap(), "buf is array of char");
    }

    #[test]
    fn test_parameter_list_is_discarded() {
        assert_eq!(
            translate("void handler(int sig)").unwrap(),
            "handler is function returning void"
        );
    }

    #[test]
    fn test_multi_word_base_type() {
        assert_eq!(
            translate("unsigned long int n").unwrap(),
            "n is unsigned long int"
        );
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(translate("  int   *  x  ").unwrap(), "x is pointer to int");
    }
}
