//! Looping type/pause/delete text rotator.
//!
//! The visible text is a pure function of elapsed time, so callers can sample it from any frame
//! loop without keeping timers.

use crate::foundation::error::{ScrollreelError, ScrollreelResult};

/// Rotator settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TypewriterConfig {
    /// Strings shown in order. Inline markup such as `<span class="dim">..</span>` is allowed.
    pub strings: Vec<String>,
    /// Delay per typed character.
    pub type_delay_ms: u64,
    /// Delay per deleted character.
    pub delete_delay_ms: u64,
    /// Hold time once a string is fully typed.
    pub pause_ms: u64,
    /// Start over after the last string.
    pub looped: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            type_delay_ms: 50,
            delete_delay_ms: 30,
            pause_ms: 3000,
            looped: true,
        }
    }
}

impl TypewriterConfig {
    /// Delays must be non-zero so the script always advances.
    pub fn validate(&self) -> ScrollreelResult<()> {
        if self.type_delay_ms == 0 || self.delete_delay_ms == 0 {
            return Err(ScrollreelError::validation(
                "typewriter delays must be > 0 ms",
            ));
        }
        Ok(())
    }
}

/// Which part of the script is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Characters are being added.
    Typing,
    /// Fully typed, holding.
    Pausing,
    /// Characters are being removed.
    Deleting,
    /// A non-looping script has finished.
    Done,
}

/// Sampled state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    /// Index of the string being shown.
    pub string_index: usize,
    /// Current phase.
    pub phase: TypewriterPhase,
    /// Visible markup. Open tags are closed so the fragment is always well formed.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Char(char),
    Tag(String),
}

#[derive(Clone, Debug)]
struct Script {
    tokens: Vec<Token>,
    chars: u64,
}

impl Script {
    fn parse(s: &str) -> Self {
        let mut tokens = Vec::new();
        let mut rest = s;
        while let Some(c) = rest.chars().next() {
            if let Some(len) = tag_len(rest) {
                tokens.push(Token::Tag(rest[..len].to_string()));
                rest = &rest[len..];
                continue;
            }
            tokens.push(Token::Char(c));
            rest = &rest[c.len_utf8()..];
        }
        let chars = tokens
            .iter()
            .filter(|t| matches!(t, Token::Char(_)))
            .count() as u64;
        Self { tokens, chars }
    }

    /// Markup with the first `visible` characters, tags emitted atomically and left-open tags
    /// closed.
    fn prefix(&self, visible: u64) -> String {
        let mut out = String::new();
        let mut open: Vec<String> = Vec::new();
        let mut shown = 0u64;
        for token in &self.tokens {
            match token {
                Token::Char(c) => {
                    if shown == visible {
                        break;
                    }
                    out.push(*c);
                    shown += 1;
                }
                Token::Tag(tag) => {
                    // Tags before the next hidden character are emitted, never half of one.
                    if shown == visible && visible < self.chars {
                        break;
                    }
                    track_tag(tag, &mut open);
                    out.push_str(tag);
                }
            }
        }
        for name in open.iter().rev() {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        out
    }
}

/// Byte length of the markup tag at the start of `s`, if it opens with one.
///
/// A tag is `<name ...>` or `</name>` where the name starts with an ASCII letter and no other `<`
/// occurs before the closing `>`. Anything else is plain text.
fn tag_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('<')?;
    let name = body.strip_prefix('/').unwrap_or(body);
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = body.find(['<', '>'])?;
    (body.as_bytes()[end] == b'>').then_some(end + 2)
}

fn track_tag(tag: &str, open: &mut Vec<String>) {
    let inner = tag.trim_start_matches('<').trim_end_matches('>').trim();
    if let Some(name) = inner.strip_prefix('/') {
        let name = name.trim();
        if let Some(pos) = open.iter().rposition(|n| n == name) {
            open.truncate(pos);
        }
        return;
    }
    if inner.ends_with('/') {
        return;
    }
    let name = inner.split_whitespace().next().unwrap_or_default();
    if !name.is_empty() {
        open.push(name.to_string());
    }
}

/// Text rotator driven by elapsed time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    scripts: Vec<Script>,
}

impl Typewriter {
    /// Build a rotator. Fails on invalid delays.
    pub fn new(config: TypewriterConfig) -> ScrollreelResult<Self> {
        config.validate()?;
        let scripts = config.strings.iter().map(|s| Script::parse(s)).collect();
        Ok(Self { config, scripts })
    }

    fn typing_ms(&self, script: &Script) -> u64 {
        script.chars.saturating_mul(self.config.type_delay_ms)
    }

    // Saturates: absurd delays stretch the script instead of overflowing.
    fn segment_ms(&self, script: &Script) -> u64 {
        self.typing_ms(script)
            .saturating_add(self.config.pause_ms)
            .saturating_add(script.chars.saturating_mul(self.config.delete_delay_ms))
    }

    /// One pass over every string.
    pub fn cycle_ms(&self) -> u64 {
        self.scripts
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(self.segment_ms(s)))
    }

    /// State after `elapsed_ms` since start.
    pub fn frame_at(&self, elapsed_ms: u64) -> TypewriterFrame {
        let cycle = self.cycle_ms();
        if self.scripts.is_empty() || cycle == 0 {
            return TypewriterFrame {
                string_index: 0,
                phase: TypewriterPhase::Done,
                text: String::new(),
            };
        }
        if !self.config.looped && elapsed_ms >= cycle {
            return TypewriterFrame {
                string_index: self.scripts.len() - 1,
                phase: TypewriterPhase::Done,
                text: String::new(),
            };
        }

        let mut t = elapsed_ms % cycle;
        for (i, script) in self.scripts.iter().enumerate() {
            let seg = self.segment_ms(script);
            if t >= seg {
                t -= seg;
                continue;
            }
            let typing = self.typing_ms(script);
            let (phase, visible) = if t < typing {
                (TypewriterPhase::Typing, t / self.config.type_delay_ms)
            } else if t < typing.saturating_add(self.config.pause_ms) {
                (TypewriterPhase::Pausing, script.chars)
            } else {
                let deleted = (t - typing - self.config.pause_ms) / self.config.delete_delay_ms;
                (TypewriterPhase::Deleting, script.chars.saturating_sub(deleted))
            };
            return TypewriterFrame {
                string_index: i,
                phase,
                text: script.prefix(visible),
            };
        }
        unreachable!("elapsed time reduced modulo the cycle always lands in a segment")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glue/typewriter.rs"]
mod tests;
