//! Request tokenizer.
//!
//! Tokens are split on single spaces. Two consecutive spaces yield an empty
//! token, and a trailing space is absorbed by the token before it.

/// Cursor over the space-separated tokens of one request line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `line`.
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Take the next token.
    ///
    /// With no space left, the whole remainder is the token and the cursor
    /// becomes empty. Calling this on an empty cursor returns `""`.
    pub fn next_token(&mut self) -> &'a str {
        match self.rest.split_once(' ') {
            Some((token, rest)) => {
                self.rest = rest;
                token
            }
            None => std::mem::take(&mut self.rest),
        }
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            None
        } else {
            Some(self.next_token())
        }
    }
}
