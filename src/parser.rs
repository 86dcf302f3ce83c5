use crate::scan::{is_ws, terminator_at};

/// Alias for [`Result`] for [`ParseError`].
pub type ParseResult<'u, T> = std::result::Result<T, ParseError<'u>>;

/// A single token of a usage pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'u> {
    /// A word compared byte-for-byte against the argument at the same
    /// position.
    Literal(Span<'u>),
    /// An angle-bracketed token bound to a caller-supplied output slot at
    /// match time. The identifier between the brackets is documentary.
    Placeholder(Span<'u>),
    /// The trailing `$` marker: no tokens expected past the program name.
    Terminator(Span<'u>),
}

impl<'u> Token<'u> {
    #[inline]
    pub fn span(&self) -> &Span<'u> {
        match self {
            Token::Literal(span) | Token::Placeholder(span) | Token::Terminator(span) => span,
        }
    }

    /// The token text as written in the pattern.
    #[inline]
    pub fn text(&self) -> &'u str {
        self.span().text()
    }
}

/// Error returned when attempting to parse an invalid usage pattern.
///
/// Both variants indicate a defect in the calling code's pattern rather
/// than anything an end user did; callers that do not care to recover can
/// treat them as assertion failures, as [`bnf`](crate::bnf) does.
#[derive(Debug, thiserror::Error)]
pub enum ParseError<'u> {
    #[error("leading whitespace in usage pattern")]
    LeadingWhitespace { span: Span<'u> },

    /// A `<` placeholder with no closing `>` before the end of the pattern.
    #[error("unterminated '<' placeholder")]
    UnterminatedPlaceholder { span: Span<'u> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span<'u> {
    start: usize,
    end: usize,

    text: &'u str,
}

impl<'u> Span<'u> {
    #[inline]
    pub fn new(start: usize, end: usize, text: &'u str) -> Self {
        Self { start, end, text }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn text(&self) -> &'u str {
        self.text
    }
}

/// Split a usage pattern into its tokens, validating it in the process.
///
/// Tokens are separated by one or more whitespace characters. A placeholder
/// runs from its `<` to the next `>`, even across whitespace; non-whitespace
/// text attached after the `>` belongs to no token, since the matcher's
/// word-skip never examines it. A `$` in the final byte position is split
/// off as the terminator even when attached to the last word.
pub fn tokenize(pattern: &str) -> ParseResult<'_, Vec<Token<'_>>> {
    let bytes = pattern.as_bytes();

    if bytes.first().map_or(false, |&c| is_ws(c)) {
        return Err(ParseError::LeadingWhitespace {
            span: Span::new(0, 1, &pattern[..1]),
        });
    }

    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if is_ws(bytes[pos]) {
            pos += 1;
        } else if terminator_at(pattern, pos) {
            tokens.push(Token::Terminator(Span::new(pos, pos + 1, &pattern[pos..])));
            pos += 1;
        } else if bytes[pos] == b'<' {
            match pattern[pos..].find('>') {
                Some(off) => {
                    let end = pos + off + 1;
                    tokens.push(Token::Placeholder(Span::new(pos, end, &pattern[pos..end])));
                    pos = end;
                    // Anything glued onto the `>` is dead text.
                    while pos < bytes.len() && !is_ws(bytes[pos]) && !terminator_at(pattern, pos) {
                        pos += 1;
                    }
                }
                None => {
                    return Err(ParseError::UnterminatedPlaceholder {
                        span: Span::new(pos, bytes.len(), &pattern[pos..]),
                    });
                }
            }
        } else {
            let start = pos;
            while pos < bytes.len() && !is_ws(bytes[pos]) && !terminator_at(pattern, pos) {
                pos += 1;
            }
            tokens.push(Token::Literal(Span::new(start, pos, &pattern[start..pos])));
        }
    }

    Ok(tokens)
}
