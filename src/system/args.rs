//! Splitting a line into positional arguments.

use crate::io::ASCII_SPACE;
use heapless::{String, Vec};

/// Maximum number of arguments per line, including the command name.
pub const MAX_ARGS: usize = 5;

/// Capacity of a single argument in bytes.
pub const TOKEN_CAPACITY: usize = 64;

/// One argument.
pub type Token = String<TOKEN_CAPACITY>;

/// The arguments of one command line.
///
/// `args[0]` always exists and is the command name, which is empty for an
/// empty line. Arguments are positional only; there is no flag syntax.
///
/// # Examples
///
/// ```rust
/// use netshell::system::args::{Args, MAX_ARGS};
///
/// let args = Args::parse("set-mode STA", MAX_ARGS);
/// assert_eq!(args.command(), "set-mode");
/// assert_eq!(args.arg(1), "STA");
/// assert_eq!(args.arg(2), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    tokens: Vec<Token, MAX_ARGS>,
    truncated: bool,
}

impl Args {
    /// Tokenize `line`, keeping at most `max_tokens` arguments.
    ///
    /// The single space character is the only delimiter and runs of spaces
    /// are not collapsed: `"a  b"` yields `"a"`, `""`, `"b"`. `max_tokens` is
    /// clamped to `1..=MAX_ARGS`. Tokens past the limit are dropped and
    /// tokens longer than [`TOKEN_CAPACITY`] are cut short; either case is
    /// reported by [`is_truncated`](Args::is_truncated).
    pub fn parse(line: &str, max_tokens: usize) -> Self {
        let limit = max_tokens.clamp(1, MAX_ARGS);
        let mut args = Args::default();

        for part in line.split(ASCII_SPACE as char) {
            if args.tokens.len() >= limit {
                args.truncated = true;
                break;
            }

            let mut token = Token::new();
            for ch in part.chars() {
                if token.push(ch).is_err() {
                    args.truncated = true;
                    break;
                }
            }

            if args.tokens.push(token).is_err() {
                args.truncated = true;
                break;
            }
        }

        if args.truncated {
            warn!("input truncated to {=usize} arguments", args.tokens.len());
        }
        args
    }

    /// The command name, `args[0]`.
    pub fn command(&self) -> &str {
        self.arg(0)
    }

    /// Argument `index`, or the empty string if the line had fewer arguments.
    pub fn arg(&self, index: usize) -> &str {
        self.tokens.get(index).map_or("", |token| token.as_str())
    }

    /// Argument `index`, or `None` if the line had fewer arguments.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|token| token.as_str())
    }

    /// Number of arguments, including the command name. Never zero.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Only a default-constructed `Args` is empty; parsing always yields `args[0]`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any argument or part of one was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Iterate over the arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.as_str())
    }
}
