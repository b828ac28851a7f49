/// Horizontal text measurement used by line wrapping.
pub trait TextMeasure {
    /// Advance width of `text` in pixels at `font_size` px.
    fn advance(&self, text: &str, font_size: f32) -> f32;
}

/// Font-independent advance model.
///
/// Each char gets a width in ems by coarse class, so wrapping decisions are identical on every
/// host regardless of which faces are installed. Widths are additive, which keeps the greedy wrap
/// monotone: appending words never reduces the line count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvanceTable {
    /// Multiplier applied on top of the per-char ems (bold faces run wider).
    pub weight_factor: f32,
}

impl AdvanceTable {
    pub const REGULAR: Self = Self { weight_factor: 1.0 };
    pub const BOLD: Self = Self {
        weight_factor: 1.05,
    };

    /// Width of a single char in ems before the weight factor.
    pub fn char_em(c: char) -> f32 {
        match c {
            ' ' | '\u{00A0}' => 0.28,
            'i' | 'j' | 'l' | 'I' | '!' | '\'' | '|' | '.' | ',' | ':' | ';' => 0.30,
            'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' | '"' => 0.38,
            'm' | 'w' | 'M' | 'W' | '@' => 0.86,
            'A'..='Z' => 0.68,
            '0'..='9' => 0.58,
            c if c.is_ascii() => 0.56,
            c if is_wide(c) => 1.0,
            _ => 0.62,
        }
    }
}

impl Default for AdvanceTable {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl TextMeasure for AdvanceTable {
    fn advance(&self, text: &str, font_size: f32) -> f32 {
        let ems: f32 = text.chars().filter(|c| !c.is_control()).map(Self::char_em).sum();
        ems * font_size * self.weight_factor
    }
}

/// CJK, Hangul, fullwidth forms, symbols, dingbats and emoji occupy a full em.
fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x2600..=0x27BF
            | 0x1F000..=0x1F2FF
            | 0x1F300..=0x1FAFF
            | 0x20000..=0x3FFFD
    )
}

/// Greedy word wrap against a pixel budget.
///
/// Words are split on whitespace and packed into lines while the measured line width stays within
/// `max_width`. A word that alone exceeds the budget is broken at char boundaries into the longest
/// chunks that fit (always at least one char), so the loop terminates for any input.
pub fn wrap_words(
    text: &str,
    measure: &dyn TextMeasure,
    font_size: f32,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = place_word(word, measure, font_size, max_width, &mut lines);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure.advance(&candidate, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = place_word(word, measure, font_size, max_width, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Start a fresh line with `word`, committing full-width chunks first if it overflows.
/// Returns the (possibly partial) tail that stays open for further words.
fn place_word(
    word: &str,
    measure: &dyn TextMeasure,
    font_size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) -> String {
    if measure.advance(word, font_size) <= max_width {
        return word.to_owned();
    }

    let mut chunk = String::new();
    for c in word.chars() {
        let mut candidate = chunk.clone();
        candidate.push(c);
        if !chunk.is_empty() && measure.advance(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut chunk, c.to_string()));
        } else {
            chunk = candidate;
        }
    }
    chunk
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
