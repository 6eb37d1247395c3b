use crate::error::RenderError;
use itertools::Itertools;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object};

struct Fragment {
    x: f32,
    y: f32,
    text: String,
}

/// Extracts the text of every page, one entry per visual line.
///
/// Fragments sharing a baseline are joined left to right with a single
/// space; lines are ordered from the top of the page down, pages in order.
pub fn extract_text_lines(pdf: &[u8]) -> Result<Vec<String>, RenderError> {
    let doc = Document::load_mem(pdf)?;
    let mut lines = Vec::new();
    for (_, page_id) in doc.get_pages() {
        let content = Content::decode(&doc.get_page_content(page_id)?)?;
        lines.extend(page_lines(&content.operations));
    }
    Ok(lines)
}

fn page_lines(operations: &[Operation]) -> Vec<String> {
    let mut fragments = Vec::new();
    let (mut line_x, mut line_y) = (0.0_f32, 0.0_f32);

    for op in operations {
        match (op.operator.as_str(), op.operands.as_slice()) {
            ("BT", _) => {
                line_x = 0.0;
                line_y = 0.0;
            }
            ("Td" | "TD", [tx, ty]) => {
                line_x += tx.as_float().unwrap_or(0.0);
                line_y += ty.as_float().unwrap_or(0.0);
            }
            ("Tm", [.., e, f]) => {
                line_x = e.as_float().unwrap_or(0.0);
                line_y = f.as_float().unwrap_or(0.0);
            }
            ("Tj" | "'" | "\"", [.., Object::String(bytes, _)]) => {
                push_fragment(&mut fragments, line_x, line_y, decode(bytes));
            }
            ("TJ", [Object::Array(items)]) => {
                let text: String = items
                    .iter()
                    .filter_map(|item| match item {
                        Object::String(bytes, _) => Some(decode(bytes)),
                        _ => None,
                    })
                    .collect();
                push_fragment(&mut fragments, line_x, line_y, text);
            }
            _ => {}
        }
    }

    fragments.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));
    let chunks = fragments.into_iter().chunk_by(|f| (f.y * 10.0).round() as i64);
    let lines: Vec<String> = (&chunks)
        .into_iter()
        .map(|(_, group)| group.map(|f| f.text).join(" "))
        .collect();
    lines
}

fn push_fragment(fragments: &mut Vec<Fragment>, x: f32, y: f32, text: String) {
    if !text.trim().is_empty() {
        fragments.push(Fragment { x, y, text });
    }
}

/// WinAnsi bytes are read as Latin-1.
fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Block, PageSpec};
    use crate::renderer::{DocumentRenderer, LopdfRenderer};
    use boardpass_types::Size;

    #[test]
    fn lines_are_ordered_top_down_and_joined_per_baseline() {
        let page = PageSpec::new("t", Size::new(595.0, 220.0)).with_blocks(vec![
            Block::text(14.0, 160.0, 12.0, "NAME: First Last"),
            Block::text(420.0, 190.0, 24.0, "Kiosk Check-In"),
            Block::text(60.0, 190.0, 24.0, "DD Airways Kiosk Check-In"),
            Block::text(212.0, 160.0, 12.0, "CLASS: Economy"),
        ]);
        let bytes = LopdfRenderer.render(&page).unwrap();
        let lines = extract_text_lines(&bytes).unwrap();
        assert_eq!(
            lines,
            vec![
                "DD Airways Kiosk Check-In Kiosk Check-In".to_string(),
                "NAME: First Last CLASS: Economy".to_string(),
            ]
        );
    }

    #[test]
    fn garbage_is_a_pdf_error() {
        assert!(matches!(extract_text_lines(b"not a pdf"), Err(RenderError::Pdf(_))));
    }
}
