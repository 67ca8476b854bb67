//! Line source
//!
//! The collaborator that feeds physical lines to the parser. Peeking is
//! required by multi-line constructs (comments, value tables) and the
//! `NS_` symbol block, which consume continuation lines ahead of the
//! orchestrator. Lines keep their original internal whitespace; trimming
//! is the grammar rules' job.

/// Supplies lines one at a time, with single-line lookahead.
pub trait LineSource {
    /// Fetch the next unconsumed line, or `None` at end of input.
    fn next_line(&mut self) -> Option<String>;

    /// Look at the next line without consuming it.
    fn peek_line(&mut self) -> Option<&str>;

    /// 1-based number of the most recently consumed line. Continuations
    /// pulled by a rule advance this too, so diagnostics raised after a
    /// multi-line construct still point at the right place.
    fn line_number(&self) -> usize;
}

/// In-memory line source over a complete DBC text.
pub struct TextLines<'a> {
    inner: std::iter::Peekable<std::str::Lines<'a>>,
    consumed: usize,
}

impl<'a> TextLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().peekable(),
            consumed: 0,
        }
    }
}

impl LineSource for TextLines<'_> {
    fn next_line(&mut self) -> Option<String> {
        let line = self.inner.next().map(str::to_owned);
        if line.is_some() {
            self.consumed += 1;
        }
        line
    }

    fn peek_line(&mut self) -> Option<&str> {
        self.inner.peek().copied()
    }

    fn line_number(&self) -> usize {
        self.consumed
    }
}
