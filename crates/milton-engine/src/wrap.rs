//! Multi-line layout transforms for long display text.
//!
//! Two mutually exclusive algorithms produce the stylized "generator" look:
//! character accumulation (center-then-right blocks with shrinking right
//! padding) and word accumulation (padded right-aligned lead-in words).
//! Break positions, alignments, and padding values are the visible behavior
//! and are fixed exactly.

use serde::{Deserialize, Serialize};

/// Character budget before the character-accumulation transform engages.
const CHAR_WRAP_THRESHOLD: usize = 20;
/// A space at or past this point in a line forces an early flush.
const CHAR_SOFT_BREAK: usize = 15;
/// Base right padding in px; shrinks by 10px per flushed line.
const CHAR_PAD_BASE: usize = 60;
const CHAR_PAD_STEP: usize = 10;

/// Character budget before the word-accumulation transform engages.
const WORD_WRAP_THRESHOLD: usize = 25;
/// Line length the word accumulator fills before breaking.
const WORD_LINE_LIMIT: usize = 20;
/// Left padding of a line-leading word, in px.
const WORD_LEAD_PAD: u16 = 20;

/// Horizontal placement of a wrapped fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapAlign {
    Center,
    Right,
    /// Flows with the surrounding text on the same line.
    Inline,
}

/// One styled piece of the wrapped layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapFragment {
    pub text: String,
    pub align: WrapAlign,
    /// Left padding in px (lead-in words of the word variant).
    pub left_pad_px: u16,
    /// Right padding in px (pushed lines of the character variant).
    pub right_pad_px: u16,
    /// Whether this fragment opens a new display line.
    pub starts_line: bool,
}

/// Result of the wrap transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapLayout {
    /// Text short enough to render as-is.
    Unwrapped(String),
    Fragments(Vec<WrapFragment>),
}

impl WrapLayout {
    /// The fragments of a wrapped layout; empty for unwrapped text.
    pub fn fragments(&self) -> &[WrapFragment] {
        match self {
            Self::Unwrapped(_) => &[],
            Self::Fragments(fragments) => fragments,
        }
    }

    /// Number of display lines this layout occupies.
    pub fn line_count(&self) -> usize {
        match self {
            Self::Unwrapped(_) => 1,
            Self::Fragments(fragments) => {
                fragments.iter().filter(|f| f.starts_line).count()
            }
        }
    }
}

/// Wrapping strategy, one per observed display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WrapPolicy {
    /// No wrapping; the display shows the raw string.
    #[default]
    Off,
    /// Character accumulation with center-then-right alignment.
    Chars,
    /// Word accumulation with padded lead-in words.
    Words,
}

impl WrapPolicy {
    /// Transform text into its display layout.
    pub fn wrap(self, text: &str) -> WrapLayout {
        match self {
            Self::Off => WrapLayout::Unwrapped(text.to_string()),
            Self::Chars => wrap_chars(text),
            Self::Words => wrap_words(text),
        }
    }
}

/// Right padding for the character variant: `max(0, 60 - index*10)`.
fn char_line_pad(index: usize) -> u16 {
    u16::try_from(CHAR_PAD_BASE.saturating_sub(index * CHAR_PAD_STEP)).unwrap_or(0)
}

fn push_char_line(fragments: &mut Vec<WrapFragment>, line: String, index: usize) {
    let (align, right_pad_px) = if index == 0 {
        (WrapAlign::Center, 0)
    } else {
        (WrapAlign::Right, char_line_pad(index))
    };
    fragments.push(WrapFragment {
        text: line,
        align,
        left_pad_px: 0,
        right_pad_px,
        starts_line: true,
    });
}

/// Character-accumulation wrap. Lines flush at 20 characters, at a space
/// once the line holds 15 or more, or at end of input. The triggering space
/// is consumed, not carried into either line.
fn wrap_chars(text: &str) -> WrapLayout {
    if text.chars().count() <= CHAR_WRAP_THRESHOLD {
        return WrapLayout::Unwrapped(text.to_string());
    }

    let mut fragments = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    let mut index = 0usize;

    for ch in text.chars() {
        if ch == ' ' && line_len >= CHAR_SOFT_BREAK {
            push_char_line(&mut fragments, std::mem::take(&mut line), index);
            index += 1;
            line_len = 0;
            continue;
        }

        line.push(ch);
        line_len += 1;

        if line_len >= CHAR_WRAP_THRESHOLD {
            push_char_line(&mut fragments, std::mem::take(&mut line), index);
            index += 1;
            line_len = 0;
        }
    }

    if !line.is_empty() {
        push_char_line(&mut fragments, line, index);
    }

    WrapLayout::Fragments(fragments)
}

/// Word-accumulation wrap. A word that would push the running line past 20
/// characters starts a new line and becomes a right-aligned lead-in with
/// 20px left padding; every other word flows inline with a trailing space.
fn wrap_words(text: &str) -> WrapLayout {
    if text.chars().count() <= WORD_WRAP_THRESHOLD {
        return WrapLayout::Unwrapped(text.to_string());
    }

    fn flush_run(fragments: &mut Vec<WrapFragment>, run: &mut String) {
        if !run.is_empty() {
            let starts_line = fragments.is_empty();
            fragments.push(WrapFragment {
                text: std::mem::take(run),
                align: WrapAlign::Inline,
                left_pad_px: 0,
                right_pad_px: 0,
                starts_line,
            });
        }
    }

    let mut fragments: Vec<WrapFragment> = Vec::new();
    let mut run = String::new();
    let mut line_len = 0usize;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        // The trailing separator counts toward the running line length.
        if line_len + word_len > WORD_LINE_LIMIT {
            flush_run(&mut fragments, &mut run);
            fragments.push(WrapFragment {
                text: word.to_string(),
                align: WrapAlign::Right,
                left_pad_px: WORD_LEAD_PAD,
                right_pad_px: 0,
                starts_line: true,
            });
            line_len = word_len + 1;
        } else {
            run.push_str(word);
            run.push(' ');
            line_len += word_len + 1;
        }
    }
    flush_run(&mut fragments, &mut run);

    WrapLayout::Fragments(fragments)
}
