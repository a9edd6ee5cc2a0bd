//! Flattens a rendered resume into positioned text lines, filled boxes and rules.
//!
//! Columns are read in document order and stacked into a single column. Every
//! element that carries text becomes a wrapped paragraph; `li` rows get a
//! bullet, `flex-wrap` rows (contacts, skill chips) are joined onto one line.
//! Inline `color`, `background-color` and `border-bottom` styles carry over.
//!
//! All coordinates are layout units measured down from the top-left corner of
//! the page; the PDF writer flips them.

use serde::Serialize;

use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::layout::PageGeometry;
use crate::render::markup::{Element, Node};

const BASE_FONT_PT: f32 = 10.0;
const LINE_SPACING: f32 = 1.3;
/// Space above each paragraph, as a fraction of its font size.
const PARAGRAPH_LEAD: f32 = 0.3;
const BULLET: &str = "\u{2022}";
const BULLET_INDENT_PT: f32 = 12.0;
const INLINE_SEPARATOR: &str = "   ";
const BOX_PADDING_PT: f32 = 8.0;
const SECTION_GAP_PT: f32 = 6.0;
const RULE_GAP_PT: f32 = 2.0;
const CSS_PX_TO_PT: f32 = 0.75;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Device RGB, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    const MUTED: Rgb = Rgb { r: 0.42, g: 0.45, b: 0.5 };

    /// Parses `#RGB`, `#RRGGBB` and `#RRGGBBAA`; alpha is flattened onto white.
    /// Anything else (named colours, `rgba(...)`) yields `None`.
    pub fn parse_css(value: &str) -> Option<Rgb> {
        let hex = value.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
        let (r, g, b, a) = match hex.len() {
            3 => {
                let doubled = |i: usize| channel(&hex[i..i + 1].repeat(2));
                (doubled(0)?, doubled(1)?, doubled(2)?, 1.0)
            }
            6 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                1.0,
            ),
            8 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            ),
            _ => return None,
        };
        let blend = |c: f32| c * a + (1.0 - a);
        Some(Rgb {
            r: blend(r),
            g: blend(g),
            b: blend(b),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    /// `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        face: FontFace,
        size: f32,
        color: Rgb,
        text: String,
    },
    /// Filled box; `y` is the top edge.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    /// Horizontal stroke centred on `y`.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Rgb,
    },
}

/// Draw operations for one page, in painting order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Lays the tree out onto as many pages as it needs. Always returns at least one page.
pub fn layout_document(root: &Node, geometry: &PageGeometry) -> Vec<Page> {
    let mut flow = Flow::new(geometry);
    match root {
        Node::Element(element) => flow.walk(element, &TextStyle::root(), 0.0),
        Node::Text(text) => flow.paragraph(text, &TextStyle::root(), 0.0, false),
    }
    flow.pages
}

// ────────────────────────────────────────────────────────────────────────────
// Text style resolution
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    size_pt: f32,
    bold: bool,
    color: Rgb,
    centered: bool,
}

impl TextStyle {
    fn root() -> Self {
        TextStyle {
            size_pt: BASE_FONT_PT,
            bold: false,
            color: Rgb::BLACK,
            centered: false,
        }
    }

    /// Inherits from the parent and applies the element's own tag, classes and styles.
    fn for_element(&self, element: &Element) -> Self {
        let mut style = *self;
        if let Some(size) = tag_size(element.tag) {
            style.size_pt = size;
        }
        if let Some(size) = element.class.split_whitespace().find_map(class_size) {
            style.size_pt = size;
        }
        if matches!(element.tag, "h1" | "h2" | "h3")
            || element.has_class("font-bold")
            || element.has_class("font-semibold")
        {
            style.bold = true;
        }
        if element.has_class("text-white") {
            style.color = Rgb::WHITE;
        }
        if element.has_class("text-gray-500") {
            style.color = Rgb::MUTED;
        }
        if let Some(color) = element.style_value("color").and_then(Rgb::parse_css) {
            style.color = color;
        }
        if element.has_class("text-center") {
            style.centered = true;
        }
        style
    }

    fn face(&self) -> FontFace {
        if self.bold {
            FontFace::HelveticaBold
        } else {
            FontFace::Helvetica
        }
    }
}

fn tag_size(tag: &str) -> Option<f32> {
    match tag {
        "h1" => Some(22.0),
        "h2" => Some(13.0),
        "h3" => Some(11.0),
        "h4" => Some(10.5),
        _ => None,
    }
}

fn class_size(class: &str) -> Option<f32> {
    match class {
        "text-xs" => Some(9.0),
        "text-sm" => Some(10.0),
        "text-base" => Some(11.0),
        "text-lg" => Some(13.0),
        "text-xl" => Some(15.0),
        "text-2xl" => Some(18.0),
        "text-3xl" => Some(22.0),
        "text-4xl" => Some(26.0),
        _ => None,
    }
}

/// `"<n>px <style> <color>"` → (width in px, colour). Non-hex colours are skipped.
fn parse_border(value: &str) -> Option<(f32, Rgb)> {
    let mut tokens = value.split_whitespace();
    let width = tokens.next()?.strip_suffix("px")?.parse::<f32>().ok()?;
    let color = Rgb::parse_css(tokens.last()?)?;
    Some((width, color))
}

fn element_text(element: &Element) -> String {
    element.children.iter().map(Node::text_content).collect()
}

/// Row text without decorative marker glyphs; the flow draws its own bullet.
fn list_item_text(element: &Element) -> String {
    element
        .children
        .iter()
        .filter(|child| !matches!(child, Node::Element(e) if e.has_class("marker")))
        .map(Node::text_content)
        .collect()
}

fn inline_text(element: &Element) -> String {
    element
        .children
        .iter()
        .map(Node::text_content)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(INLINE_SEPARATOR)
}

// ────────────────────────────────────────────────────────────────────────────
// Flow state
// ────────────────────────────────────────────────────────────────────────────

/// Where a filled box started: page, paint position and top edge.
#[derive(Debug, Clone, Copy)]
struct Mark {
    page: usize,
    op: usize,
    y: f32,
}

struct Flow<'g> {
    geometry: &'g PageGeometry,
    pages: Vec<Page>,
    /// Top of the next line on the current page.
    y: f32,
}

impl<'g> Flow<'g> {
    fn new(geometry: &'g PageGeometry) -> Self {
        Flow {
            geometry,
            pages: vec![Page::default()],
            y: geometry.margin,
        }
    }

    fn pt(&self, value: f32) -> f32 {
        value * self.geometry.scale
    }

    fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    fn break_if_needed(&mut self, height: f32) {
        if self.y + height > self.geometry.bottom_limit() && self.y > self.geometry.margin {
            self.pages.push(Page::default());
            self.y = self.geometry.margin;
        }
    }

    fn mark(&self) -> Mark {
        let page = self.page_index();
        Mark {
            page,
            op: self.pages[page].ops.len(),
            y: self.y,
        }
    }

    fn walk(&mut self, element: &Element, inherited: &TextStyle, indent: f32) {
        if element_text(element).trim().is_empty() {
            return;
        }
        let style = inherited.for_element(element);
        let padding = self.pt(BOX_PADDING_PT);

        let fill = element
            .style_value("background-color")
            .and_then(Rgb::parse_css)
            .map(|color| {
                let mark = self.mark();
                self.y += padding;
                (color, mark)
            });

        if element.tag == "li" {
            self.paragraph(&list_item_text(element), &style, indent, true);
        } else if element.has_class("flex-wrap") {
            self.paragraph(&inline_text(element), &style, indent, false);
        } else {
            for child in &element.children {
                match child {
                    Node::Text(text) => self.paragraph(text, &style, indent, false),
                    Node::Element(child) => self.walk(child, &style, indent),
                }
            }
        }

        if let Some((color, mark)) = fill {
            self.y += padding;
            self.fill_since(mark, color);
        }
        if let Some((width_px, color)) = element.style_value("border-bottom").and_then(parse_border)
        {
            self.rule(width_px, color);
        }
        if matches!(element.tag, "section" | "header") {
            self.y += self.pt(SECTION_GAP_PT);
        }
    }

    fn paragraph(&mut self, text: &str, style: &TextStyle, indent: f32, bulleted: bool) {
        let size = self.pt(style.size_pt);
        let metrics = get_metrics(style.face());
        let bullet_x = self.geometry.margin + indent + self.pt(RULE_GAP_PT);
        let indent = if bulleted {
            indent + self.pt(BULLET_INDENT_PT)
        } else {
            indent
        };
        let left = self.geometry.margin + indent;
        let max_width = self.geometry.content_width() - indent;

        let lines = metrics.wrap_lines(text, size, max_width);
        if lines.is_empty() {
            return;
        }
        let line_height = size * LINE_SPACING;
        self.y += size * PARAGRAPH_LEAD;

        for (i, line) in lines.into_iter().enumerate() {
            self.break_if_needed(line_height);
            let baseline = self.y + size;
            if bulleted && i == 0 {
                self.push(DrawOp::Text {
                    x: bullet_x,
                    y: baseline,
                    face: FontFace::Helvetica,
                    size,
                    color: style.color,
                    text: BULLET.to_string(),
                });
            }
            let x = if style.centered {
                let slack = self.geometry.content_width() - metrics.width_at(&line, size);
                self.geometry.margin + (slack / 2.0).max(0.0)
            } else {
                left
            };
            self.push(DrawOp::Text {
                x,
                y: baseline,
                face: style.face(),
                size,
                color: style.color,
                text: line,
            });
            self.y += line_height;
        }
    }

    /// Paints a box from `mark` to the current position, split across pages,
    /// underneath everything drawn since the mark.
    fn fill_since(&mut self, mark: Mark, color: Rgb) {
        let x = self.geometry.margin;
        let width = self.geometry.content_width();
        let last = self.page_index();
        for page in mark.page..=last {
            let top = if page == mark.page {
                mark.y
            } else {
                self.geometry.margin
            };
            let bottom = if page == last {
                self.y
            } else {
                self.geometry.bottom_limit()
            };
            if bottom <= top {
                continue;
            }
            let at = if page == mark.page { mark.op } else { 0 };
            self.pages[page].ops.insert(
                at,
                DrawOp::Rect {
                    x,
                    y: top,
                    width,
                    height: bottom - top,
                    color,
                },
            );
        }
    }

    fn rule(&mut self, width_px: f32, color: Rgb) {
        let thickness = self.pt(width_px * CSS_PX_TO_PT);
        let gap = self.pt(RULE_GAP_PT);
        self.break_if_needed(gap + thickness);
        self.push(DrawOp::Rule {
            x1: self.geometry.margin,
            x2: self.geometry.width - self.geometry.margin,
            y: self.y + gap + thickness / 2.0,
            thickness,
            color,
        });
        self.y += 2.0 * gap + thickness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceDraft;
    use crate::models::template::TemplateKind;
    use crate::render::fixtures::full_resume;
    use crate::render::{render_with_mode, RenderMode};
    use crate::store::ResumeStore;

    fn letter() -> PageGeometry {
        PageGeometry::from_inches(8.5, 11.0, 0.5, 2.0)
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_parse_css_colours() {
        let grey = Rgb::parse_css("#333").unwrap();
        assert!(close(grey.r, 0.2) && close(grey.g, 0.2) && close(grey.b, 0.2));

        let blue = Rgb::parse_css("#3B82F6").unwrap();
        assert!(close(blue.b, 246.0 / 255.0));

        // 0x20 alpha over white is a pale tint.
        let tint = Rgb::parse_css("#3B82F620").unwrap();
        assert!(tint.r > 0.85 && tint.b > 0.95);

        assert_eq!(Rgb::parse_css("rgba(255, 255, 255, 0.2)"), None);
        assert_eq!(Rgb::parse_css("blue"), None);
        assert_eq!(Rgb::parse_css("#12345"), None);
    }

    #[test]
    fn test_parse_border() {
        let (width, color) = parse_border("4px solid #3B82F6").unwrap();
        assert_eq!(width, 4.0);
        assert_eq!(color, Rgb::parse_css("#3B82F6").unwrap());
        assert_eq!(parse_border("1px solid rgba(255, 255, 255, 0.2)"), None);
    }

    #[test]
    fn test_full_resume_fits_one_page() {
        let data = full_resume();
        for kind in TemplateKind::ALL {
            let mut d = data.clone();
            d.selected_template = kind;
            let pages = layout_document(&render_with_mode(&d, RenderMode::Print), &letter());
            assert_eq!(pages.len(), 1, "{kind}");
            let lines = texts(&pages[0]);
            assert!(lines.contains(&"Jane Q Doe"), "{kind}");
            assert!(lines.contains(&"Cut costs 20%"), "{kind}");
        }
    }

    #[test]
    fn test_achievements_get_bullets() {
        let pages = layout_document(
            &render_with_mode(&full_resume(), RenderMode::Print),
            &letter(),
        );
        assert_eq!(texts(&pages[0]).iter().filter(|t| **t == BULLET).count(), 2);
    }

    #[test]
    fn test_minimal_headings_get_accent_rules() {
        let pages = layout_document(
            &render_with_mode(&full_resume(), RenderMode::Print),
            &letter(),
        );
        let accent = Rgb::parse_css("#3B82F6").unwrap();
        let rules = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rule { color, .. } if *color == accent))
            .count();
        assert_eq!(rules, 4);
    }

    #[test]
    fn test_professional_header_box_painted_under_name() {
        let mut data = full_resume();
        data.selected_template = TemplateKind::Professional;
        let pages = layout_document(&render_with_mode(&data, RenderMode::Print), &letter());
        let ops = &pages[0].ops;

        let accent = Rgb::parse_css("#3B82F6").unwrap();
        let rect = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Rect { color, .. } if *color == accent))
            .expect("header box");
        let name = ops
            .iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == "Jane Q Doe"))
            .expect("name");
        assert!(rect < name);
        assert!(matches!(&ops[name], DrawOp::Text { color, face, .. }
            if *color == Rgb::WHITE && *face == FontFace::HelveticaBold));
    }

    #[test]
    fn test_long_resume_paginates_within_margins() {
        let mut store = ResumeStore::new();
        for i in 0..40 {
            store.add_experience(ExperienceDraft {
                company: format!("Company {i}"),
                position: "Engineer".into(),
                start_date: "2020".into(),
                end_date: "2021".into(),
                description: "Worked on many things across the stack. ".repeat(4),
                achievements: vec!["Did something measurable".into()],
                ..ExperienceDraft::default()
            });
        }
        let geometry = letter();
        let pages = layout_document(
            &render_with_mode(store.data(), RenderMode::Print),
            &geometry,
        );
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(!page.ops.is_empty());
            for op in &page.ops {
                if let DrawOp::Text { x, y, .. } = op {
                    assert!(*x >= geometry.margin);
                    assert!(*y >= geometry.margin && *y <= geometry.bottom_limit());
                }
            }
        }
        let all: Vec<&str> = pages.iter().flat_map(texts).collect();
        assert!(all.contains(&"Company 0"));
        assert!(all.contains(&"Company 39"));
    }

    #[test]
    fn test_long_unbroken_text_stays_inside_right_margin() {
        let mut data = full_resume();
        data.personal_info.website = Some(format!("https://example.com/{}", "a".repeat(150)));
        let geometry = letter();
        let right = geometry.width - geometry.margin;

        for kind in TemplateKind::ALL {
            data.selected_template = kind;
            let pages = layout_document(&render_with_mode(&data, RenderMode::Print), &geometry);
            for op in pages.iter().flat_map(|p| &p.ops) {
                if let DrawOp::Text { x, face, size, text, .. } = op {
                    let edge = x + get_metrics(*face).width_at(text, *size);
                    assert!(edge <= right + 1e-2, "{kind:?}: {text} ends at {edge} > {right}");
                }
            }
        }
    }

    #[test]
    fn test_minimal_header_is_centred() {
        let pages = layout_document(
            &render_with_mode(&full_resume(), RenderMode::Print),
            &letter(),
        );
        let name_x = pages[0].ops.iter().find_map(|op| match op {
            DrawOp::Text { x, text, .. } if text == "Jane Q Doe" => Some(*x),
            _ => None,
        });
        assert!(name_x.unwrap() > letter().margin + 100.0);
    }
}
