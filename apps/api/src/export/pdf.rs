//! Minimal PDF 1.4 writer for laid-out pages.
//!
//! Uses the standard Type1 Helvetica faces with WinAnsi encoding, so no fonts
//! are embedded. Object layout:
//! 1 catalog, 2 page tree, 3-4 fonts, 5 info, then a page object and its
//! content stream for each page.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::layout::{DrawOp, FontFace, Page, PageGeometry, Rgb};

const FIRST_PAGE_OBJECT: usize = 6;
const INFO_OBJECT: usize = 5;
const PRODUCER: &str = "resume-api";

pub struct DocumentInfo {
    pub title: String,
    pub created: DateTime<Utc>,
}

/// Serialises `pages` into a complete PDF file.
pub fn write_pdf(pages: &[Page], geometry: &PageGeometry, info: &DocumentInfo) -> Vec<u8> {
    let mut pdf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();
    let (media_w, media_h) = geometry.media_box();

    pdf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    offsets.push(pdf.len());
    pdf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", FIRST_PAGE_OBJECT + 2 * i))
        .collect::<Vec<_>>()
        .join(" ");
    offsets.push(pdf.len());
    pdf.extend_from_slice(
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids,
            pages.len()
        )
        .as_bytes(),
    );

    for (id, face) in [(3, FontFace::Helvetica), (4, FontFace::HelveticaBold)] {
        offsets.push(pdf.len());
        pdf.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj\n",
                id,
                face.base_font()
            )
            .as_bytes(),
        );
    }

    offsets.push(pdf.len());
    pdf.extend_from_slice(
        format!(
            "{} 0 obj\n<< /Title ({}) /Producer ({}) /CreationDate (D:{}Z) >>\nendobj\n",
            INFO_OBJECT,
            escape_pdf_text(&info.title),
            PRODUCER,
            info.created.format("%Y%m%d%H%M%S")
        )
        .as_bytes(),
    );

    for (i, page) in pages.iter().enumerate() {
        let page_id = FIRST_PAGE_OBJECT + 2 * i;
        let content_id = page_id + 1;

        offsets.push(pdf.len());
        pdf.extend_from_slice(
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> >>\nendobj\n",
                page_id,
                num(media_w),
                num(media_h),
                content_id
            )
            .as_bytes(),
        );

        let stream = content_stream(page, geometry);
        offsets.push(pdf.len());
        pdf.extend_from_slice(
            format!("{} 0 obj\n<< /Length {} >>\nstream\n", content_id, stream.len()).as_bytes(),
        );
        pdf.extend_from_slice(stream.as_bytes());
        pdf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    let xref_start = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", offsets.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            INFO_OBJECT,
            xref_start
        )
        .as_bytes(),
    );
    pdf
}

/// Content stream for one page. Layout units are mapped back to points with a
/// single `cm`, and y is flipped to PDF's bottom-up space.
fn content_stream(page: &Page, geometry: &PageGeometry) -> String {
    let mut out = String::new();
    let inverse = 1.0 / geometry.scale;
    let flip = |y: f32| geometry.height - y;

    let _ = writeln!(out, "q\n{} 0 0 {} 0 0 cm", num(inverse), num(inverse));
    for op in &page.ops {
        match op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "{} rg\n{} {} {} {} re f",
                    rgb(color),
                    num(*x),
                    num(flip(y + height)),
                    num(*width),
                    num(*height)
                );
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                thickness,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "{} RG\n{} w\n{} {} m {} {} l S",
                    rgb(color),
                    num(*thickness),
                    num(*x1),
                    num(flip(*y)),
                    num(*x2),
                    num(flip(*y))
                );
            }
            DrawOp::Text {
                x,
                y,
                face,
                size,
                color,
                text,
            } => {
                let _ = writeln!(
                    out,
                    "BT\n/{} {} Tf\n{} rg\n{} {} Td\n({}) Tj\nET",
                    face.resource_name(),
                    num(*size),
                    rgb(color),
                    num(*x),
                    num(flip(*y)),
                    escape_pdf_text(text)
                );
            }
        }
    }
    out.push('Q');
    out
}

fn rgb(color: &Rgb) -> String {
    format!("{} {} {}", num(color.r), num(color.g), num(color.b))
}

/// Two decimals, trailing zeros dropped.
fn num(value: f32) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Escapes a string for a PDF literal, encoding non-ASCII as WinAnsi octal.
///
/// Characters outside WinAnsi become `?`.
pub fn escape_pdf_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => match win_ansi_code(c) {
                Some(code) => {
                    let _ = write!(out, "\\{code:03o}");
                }
                None => out.push('?'),
            },
        }
    }
    out
}

fn win_ansi_code(c: char) -> Option<u8> {
    match c {
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2026}' => Some(0x85),
        '\u{20AC}' => Some(0x80),
        '\u{00A0}'..='\u{00FF}' => Some(c as u32 as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry::from_inches(8.5, 11.0, 0.5, 2.0)
    }

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Jane (Doe) Resume".to_string(),
            created: Utc::now(),
        }
    }

    fn text_page(text: &str) -> Page {
        Page {
            ops: vec![DrawOp::Text {
                x: 72.0,
                y: 100.0,
                face: FontFace::Helvetica,
                size: 20.0,
                color: Rgb::BLACK,
                text: text.to_string(),
            }],
        }
    }

    #[test]
    fn test_escape_pdf_text() {
        assert_eq!(escape_pdf_text(r"a(b)\c"), r"a\(b\)\\c");
        assert_eq!(escape_pdf_text("\u{2022} x"), r"\225 x");
        assert_eq!(escape_pdf_text("\u{00B7}"), r"\267");
        assert_eq!(escape_pdf_text("José"), r"Jos\351");
        assert_eq!(escape_pdf_text("中"), "?");
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(612.0), "612");
        assert_eq!(num(1.234), "1.23");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_document_structure() {
        let pdf = write_pdf(&[text_page("Hello"), text_page("World")], &geometry(), &info());
        let text = String::from_utf8_lossy(&pdf);
        assert!(pdf.starts_with(b"%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/Kids [6 0 R 8 0 R]"));
        assert!(text.contains("/MediaBox [0 0 612 792]"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("/Title (Jane \\(Doe\\) Resume)"));
        assert!(text.contains("0.5 0 0 0.5 0 0 cm"));
        assert!(text.contains("(Hello) Tj"));
        // y is flipped: 1584 - 100
        assert!(text.contains("72 1484 Td"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = write_pdf(&[text_page("Hello")], &geometry(), &info());
        let text = String::from_utf8_lossy(&pdf).into_owned();
        let xref_at: usize = text
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!(pdf[xref_at..].starts_with(b"xref"));

        // Everything from the xref table on is ASCII.
        let tail = std::str::from_utf8(&pdf[xref_at..]).unwrap();
        let entries: Vec<usize> = tail
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with(" n "))
            .map(|l| l[..10].parse().unwrap())
            .collect();
        assert_eq!(entries.len(), 7);
        for (i, offset) in entries.iter().enumerate() {
            let header = format!("{} 0 obj", i + 1);
            assert!(pdf[*offset..].starts_with(header.as_bytes()), "object {}", i + 1);
        }
    }

    #[test]
    fn test_stream_length_matches() {
        let pdf = write_pdf(&[text_page("Length check")], &geometry(), &info());
        let text = String::from_utf8_lossy(&pdf).into_owned();
        let length: usize = text
            .split("/Length ")
            .nth(1)
            .and_then(|s| s.split(' ').next())
            .and_then(|n| n.parse().ok())
            .unwrap();
        let start = text.find("stream\n").unwrap() + "stream\n".len();
        let end = text.find("\nendstream").unwrap();
        assert_eq!(end - start, length);
    }
}
