//! Static font-metric tables for the two PDF base fonts the exporter uses.
//!
//! Widths come from the Adobe AFM files for Helvetica and Helvetica-Bold and
//! are stored in 1/1000 em. Tables cover ASCII 0x20..=0x7E (95 printable
//! characters); index = (char as usize) - 32. The handful of non-ASCII glyphs
//! the layouts emit (bullets) have explicit widths, everything else falls back
//! to the average.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    /// PostScript base font name written into the font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in content streams (`/F1 12 Tf`).
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

/// Character-width table for one face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    bullet_width: u16,
    middle_dot_width: u16,
    /// Fallback for any other non-ASCII character.
    average_char_width: u16,
}

impl FontMetricTable {
    fn char_units(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        match c {
            '\u{2022}' => self.bullet_width,
            '\u{00B7}' => self.middle_dot_width,
            _ => self.average_char_width,
        }
    }

    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_units(c) as f32).sum::<f32>() / 1000.0
    }

    /// Rendered width at a concrete font size, in the same unit as `size`.
    pub fn width_at(&self, s: &str, size: f32) -> f32 {
        self.measure_str(s) * size
    }

    /// Greedy word-wrap of `s` into lines no wider than `max_width`.
    ///
    /// `max_width` and `size` share a unit. A word wider than the line is
    /// broken between characters. Empty or whitespace-only input yields no
    /// lines.
    pub fn wrap_lines(&self, s: &str, size: f32, max_width: f32) -> Vec<String> {
        let space_w = self.width_at(" ", size);
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.width_at(word, size);
            if word_w > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current_width = 0.0;
                for c in word.chars() {
                    let char_w = self.char_units(c) as f32 / 1000.0 * size;
                    if !current.is_empty() && current_width + char_w > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += char_w;
                }
            } else if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    bullet_width: 350,
    middle_dot_width: 278,
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    bullet_width: 350,
    middle_dot_width: 278,
    average_char_width: 611,
};

pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFace::Helvetica).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Architected distributed caching layer";
        assert!(
            get_metrics(FontFace::HelveticaBold).measure_str(text)
                > get_metrics(FontFace::Helvetica).measure_str(text)
        );
    }

    #[test]
    fn test_non_ascii_widths() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert!((metrics.measure_str("\u{2022}") - 0.350).abs() < 1e-4);
        assert!((metrics.measure_str("é") - 0.556).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.wrap_lines("Rust", 10.0, 500.0), vec!["Rust".to_string()]);
        assert!(metrics.wrap_lines("   ", 10.0, 500.0).is_empty());
    }

    #[test]
    fn test_wrap_respects_width() {
        let metrics = get_metrics(FontFace::Helvetica);
        let text = "word ".repeat(40);
        let lines = metrics.wrap_lines(&text, 10.0, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.width_at(line, 10.0) <= 100.0, "{line}");
        }
        // No words lost or reordered.
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_overlong_word_is_broken_to_fit() {
        let metrics = get_metrics(FontFace::Helvetica);
        // 'x' is 500 units: ten fit in 50.0 at size 10.
        let long = "x".repeat(95);
        let lines = metrics.wrap_lines(&format!("a {long} b"), 10.0, 50.0);
        assert_eq!(lines[0], "a");
        assert_eq!(lines.len(), 11);
        for line in &lines {
            assert!(metrics.width_at(line, 10.0) <= 50.0, "{line}");
        }
        // Characters are kept in order; the trailing word shares the last chunk.
        assert_eq!(lines[1..].concat().replace(' ', ""), format!("{long}b"));
        assert!(lines.last().unwrap().ends_with(" b"));
        assert_eq!(metrics.wrap_lines("a b", 10.0, 50.0).len(), 1);
    }
}
