use crate::parser::{self, Token};
use crate::scan;

use std::process;

pub use crate::parser::ParseResult;

/// A validated usage pattern for matching command-line arguments against a
/// BNF-like description of the expected invocation, e.g.
/// `"prog <name> @ <host>"`.
///
/// Literal words must appear verbatim at the same position in the argument
/// vector; each `<placeholder>` binds the argument at its position to a
/// caller-supplied output slot; a trailing `$` marks an invocation that
/// expects nothing past the program name.
///
/// ```
/// use bnfmatch::Usage;
///
/// let usage = Usage::new("prog <name> @ <host>").unwrap();
/// let args = ["prog", "alice", "@", "example.com"];
///
/// let (mut name, mut host) = (None, None);
/// assert!(usage.matches(&args, &mut [&mut name, &mut host]).unwrap());
/// assert_eq!(name, Some("alice"));
/// assert_eq!(host, Some("example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct Usage {
    /// The usage pattern represented by this structure.
    pattern: String,
    /// Number of placeholder tokens in the pattern.
    placeholders: usize,
}

impl Usage {
    /// Validate a usage pattern. Leading whitespace and an unterminated `<`
    /// are rejected here, before any matching can take place.
    pub fn new(pattern: &'_ str) -> ParseResult<'_, Self> {
        let tokens = parser::tokenize(pattern)?;
        let placeholders = tokens
            .iter()
            .filter(|t| matches!(t, Token::Placeholder(_)))
            .count();

        Ok(Self {
            pattern: pattern.to_owned(),
            placeholders,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of output slots a call to [`matches`](Usage::matches) expects.
    #[inline]
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Determine whether an argument vector fits this usage pattern.
    ///
    /// `args[0]` is the program's invocation name. `slots` holds one write
    /// target per placeholder, in the left-to-right order the placeholders
    /// appear in the pattern; each bound slot borrows the corresponding
    /// argument string, nothing is copied. Binding is eager: slots reached
    /// before a mismatch are written even when the verdict is `Ok(false)`.
    ///
    /// A literal is compared as a raw byte prefix of the pattern at the
    /// current position, with the word boundary enforced by the following
    /// word-skip and the end-of-pattern check rather than at comparison
    /// time. Consequently arguments beyond a satisfied pattern do not
    /// invalidate the match.
    ///
    /// Errors are reserved for caller mistakes: a slot count that differs
    /// from [`placeholders`](Usage::placeholders), or a pattern that still
    /// has unconsumed tokens after an option literal matched. An ordinary
    /// mismatch is `Ok(false)`.
    pub fn matches<'v, S>(
        &self,
        args: &'v [S],
        slots: &mut [&mut Option<&'v str>],
    ) -> Result<bool, MatchError>
    where
        S: AsRef<str>,
    {
        if slots.len() != self.placeholders {
            return Err(MatchError::SlotCount {
                expected: self.placeholders,
                given: slots.len(),
            });
        }

        let pattern = self.pattern.as_bytes();
        let mut ptr = 0;
        let mut slot = 0;
        let mut prog_matched = false;
        let mut opt_matched = false;

        let mut n = 0;
        while n != args.len() {
            if pattern.get(ptr) == Some(&b'<') {
                // Required argument: bind it to the next output slot. The
                // closing bracket exists, the pattern was validated.
                ptr += self.pattern[ptr..]
                    .find('>')
                    .expect("validated pattern has a closing '>'");
                *slots[slot] = Some(args[n].as_ref());
                slot += 1;
            } else {
                let arg = args[n].as_ref().as_bytes();
                let rest = &pattern[ptr..];

                if rest.len() >= arg.len() && &rest[..arg.len()] == arg {
                    if n == 0 {
                        prog_matched = true;
                    } else {
                        opt_matched = true;
                    }
                    ptr += arg.len();
                } else {
                    break;
                }
            }

            ptr = scan::next_word(&self.pattern, ptr);
            n += 1;
        }

        if opt_matched {
            if ptr == pattern.len() {
                Ok(true)
            } else {
                Err(MatchError::TrailingPattern {
                    usage: self.pattern.clone(),
                })
            }
        } else if prog_matched {
            Ok(pattern.get(ptr) == Some(&b'$'))
        } else {
            Ok(false)
        }
    }

    /// Convenience for zero-placeholder patterns.
    #[inline]
    pub fn is_match<S: AsRef<str>>(&self, args: &[S]) -> Result<bool, MatchError> {
        self.matches(args, &mut [])
    }
}

/// Error returned when a match cannot be carried out as requested.
///
/// An ordinary mismatch is not an error; see [`Usage::matches`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    /// The caller supplied a different number of output slots than the
    /// pattern has placeholders.
    #[error("pattern expects {expected} output slot(s), got {given}")]
    SlotCount { expected: usize, given: usize },

    /// An option literal matched but unconsumed pattern remained: the
    /// pattern promises more than the invocation supplied.
    #[error("usage pattern {usage:?} not fully consumed")]
    TrailingPattern { usage: String },
}

/// Match an argument vector against a usage pattern with the classic
/// terminal behavior: a defective pattern or slot list panics, and a
/// pattern left unconsumed after an option literal matched prints the
/// usage line to stderr and exits the process with status 1.
///
/// ```no_run
/// use bnfmatch::bnf;
/// use std::env;
///
/// let args: Vec<String> = env::args().collect();
///
/// let mut word = None;
/// if bnf("prog -x <word>", &args, &mut [&mut word]) {
///     println!("{}", word.unwrap());
/// }
/// ```
///
/// Callers that want to handle the fatal conditions themselves should use
/// [`Usage::new`] and [`Usage::matches`], which report them as errors.
pub fn bnf<'v, S>(pattern: &str, args: &'v [S], slots: &mut [&mut Option<&'v str>]) -> bool
where
    S: AsRef<str>,
{
    let usage = match Usage::new(pattern) {
        Ok(usage) => usage,
        Err(err) => panic!("bnf: {}", err),
    };

    match usage.matches(args, slots) {
        Ok(verdict) => verdict,
        Err(err @ MatchError::SlotCount { .. }) => panic!("bnf: {}", err),
        Err(MatchError::TrailingPattern { .. }) => {
            eprintln!("(Usage) {}", pattern);
            process::exit(1);
        }
    }
}
