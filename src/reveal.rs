//! Incremental Revealer
//!
//! Presents an already-received response as if it were being typed: each
//! step re-renders a growing prefix with a trailing cursor, and the last
//! step is a full render identical to a one-shot `markdown::render`.
//!
//! `Reveal` is the pure step machine; `RevealedMarkdown` in
//! `components::revealed_markdown` drives it from a `Ticker`.

use crate::markdown;

/// One rendered step of a reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Markdown of the current prefix plus cursor
    Partial(String),
    /// Full render, cursor removed
    Final(String),
}

impl Frame {
    pub fn html(&self) -> &str {
        match self {
            Frame::Partial(html) | Frame::Final(html) => html,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Frame::Final(_))
    }
}

#[derive(Debug, Clone)]
pub struct Reveal {
    text: String,
    /// Byte offset of every char boundary after the first, ending at `text.len()`
    boundaries: Vec<usize>,
    chunk_chars: usize,
    shown_chars: usize,
    finished: bool,
}

impl Reveal {
    /// `chunk_chars` of zero is treated as one
    pub fn new(text: impl Into<String>, chunk_chars: usize) -> Self {
        let text = text.into();
        let boundaries = text
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .filter(|&i| i > 0)
            .collect();
        Self {
            text,
            boundaries,
            chunk_chars: chunk_chars.max(1),
            shown_chars: 0,
            finished: false,
        }
    }

    pub fn total_chars(&self) -> usize {
        self.boundaries.len()
    }

    #[cfg(test)]
    pub fn shown_chars(&self) -> usize {
        self.shown_chars
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of frames a full reveal yields (partials plus the final one)
    pub fn frame_count(&self) -> usize {
        self.total_chars().div_ceil(self.chunk_chars) + 1
    }

    fn prefix(&self) -> &str {
        match self.shown_chars {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    /// Advance one step. Returns `None` once the final frame was produced.
    pub fn step(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        if self.shown_chars < self.total_chars() {
            self.shown_chars = (self.shown_chars + self.chunk_chars).min(self.total_chars());
            return Some(Frame::Partial(markdown::render_with_cursor(self.prefix())));
        }
        self.finished = true;
        Some(Frame::Final(markdown::render(&self.text)))
    }
}

impl Iterator for Reveal {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Here is code:\n\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\n- one\n- two\n\n| a | b |\n|---|---|\n| 1 | 2 |";

    #[test]
    fn test_final_frame_matches_one_shot_render() {
        for text in [SAMPLE, "", "plain", "**unclosed", "héllo wörld ✓ 日本語"] {
            let frames: Vec<Frame> = Reveal::new(text, 3).collect();
            let last = frames.last().expect("at least one frame");
            assert!(last.is_final());
            assert_eq!(last.html(), markdown::render(text));
        }
    }

    #[test]
    fn test_exactly_one_final_frame_and_cursor_removed() {
        let frames: Vec<Frame> = Reveal::new(SAMPLE, 3).collect();
        let finals = frames.iter().filter(|f| f.is_final()).count();
        assert_eq!(finals, 1);
        assert!(frames[..frames.len() - 1]
            .iter()
            .all(|f| f.html().contains(markdown::CURSOR_HTML)));
        assert!(!frames.last().unwrap().html().contains("typing-cursor"));
    }

    #[test]
    fn test_step_count_covers_text() {
        let mut reveal = Reveal::new("abcdefgh", 3);
        assert_eq!(reveal.frame_count(), 4);
        let partials = reveal.by_ref().filter(|f| !f.is_final()).count();
        assert!(partials * 3 >= 8);
        assert_eq!(partials, 3);
        assert!(reveal.is_finished());
        assert_eq!(reveal.step(), None);
    }

    #[test]
    fn test_empty_text_yields_single_final() {
        let frames: Vec<Frame> = Reveal::new("", 3).collect();
        assert_eq!(frames, vec![Frame::Final(markdown::render(""))]);
    }

    #[test]
    fn test_multibyte_prefixes_never_split_chars() {
        let mut reveal = Reveal::new("日本語テキスト", 2);
        assert_eq!(reveal.total_chars(), 7);
        let first = reveal.step().unwrap();
        assert!(first.html().contains("日本"));
        assert_eq!(reveal.shown_chars(), 2);
    }

    #[test]
    fn test_zero_chunk_treated_as_one() {
        let reveal = Reveal::new("abc", 0);
        assert_eq!(reveal.frame_count(), 4);
    }
}
