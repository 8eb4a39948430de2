//! HTML serialization of rich-text documents.

use super::document::{Block, BlockKind, Document, Span};

/// Serialize a document. An empty document yields an empty string.
pub fn to_html(doc: &Document) -> String {
    if doc.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let mut open_list: Option<BlockKind> = None;

    for block in doc.blocks() {
        let list = match block.kind {
            BlockKind::Paragraph => None,
            kind => Some(kind),
        };
        if open_list != list {
            if let Some(kind) = open_list {
                out.push_str(list_close(kind));
            }
            if let Some(kind) = list {
                out.push_str(list_open(kind));
            }
            open_list = list;
        }
        match block.kind {
            BlockKind::Paragraph => {
                out.push_str("<p>");
                write_inline(&mut out, block);
                out.push_str("</p>");
            }
            BlockKind::BulletItem | BlockKind::NumberedItem => {
                out.push_str("<li>");
                write_inline(&mut out, block);
                out.push_str("</li>");
            }
        }
    }
    if let Some(kind) = open_list {
        out.push_str(list_close(kind));
    }
    out
}

fn list_open(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::NumberedItem => "<ol>",
        _ => "<ul>",
    }
}

fn list_close(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::NumberedItem => "</ol>",
        _ => "</ul>",
    }
}

fn write_inline(out: &mut String, block: &Block) {
    if block.is_empty() {
        out.push_str("<br>");
        return;
    }
    for span in &block.spans {
        write_span(out, span);
    }
}

fn write_span(out: &mut String, span: &Span) {
    if let Some(ref href) = span.link {
        out.push_str("<a href=\"");
        out.push_str(&escape(href));
        out.push_str("\">");
    }
    if span.marks.bold {
        out.push_str("<b>");
    }
    if span.marks.italic {
        out.push_str("<i>");
    }
    if span.marks.underline {
        out.push_str("<u>");
    }
    out.push_str(&escape(&span.text));
    if span.marks.underline {
        out.push_str("</u>");
    }
    if span.marks.italic {
        out.push_str("</i>");
    }
    if span.marks.bold {
        out.push_str("</b>");
    }
    if span.link.is_some() {
        out.push_str("</a>");
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::document::{Position, Selection};

    fn whole_block(doc: &Document, b: usize) -> Selection {
        Selection::new(
            Position::new(b, 0),
            Position::new(b, doc.blocks()[b].len()),
        )
    }

    #[test]
    fn empty_document_is_empty_string() {
        assert_eq!(to_html(&Document::default()), "");
        assert_eq!(to_html(&Document::from_plain_text("\n\n")), "");
    }

    #[test]
    fn paragraphs_and_escaping() {
        let doc = Document::from_plain_text("a < b & \"c\"\n\nend");
        assert_eq!(
            to_html(&doc),
            "<p>a &lt; b &amp; &quot;c&quot;</p><p><br></p><p>end</p>"
        );
    }

    #[test]
    fn marks_nest_inside_links() {
        let mut doc = Document::from_plain_text("go here");
        let sel = Selection::new(Position::new(0, 3), Position::new(0, 7));
        doc.map_range(&sel, |s| {
            s.marks.bold = true;
            s.marks.underline = true;
            s.link = Some("https://acme.com/?a=1&b=2".to_string());
        });
        assert_eq!(
            to_html(&doc),
            "<p>go <a href=\"https://acme.com/?a=1&amp;b=2\"><b><u>here</u></b></a></p>"
        );
    }

    #[test]
    fn consecutive_items_share_one_list() {
        let mut doc = Document::from_plain_text("intro\none\ntwo\nfirst\nsecond");
        let bullets = Selection::new(Position::new(1, 0), Position::new(2, 0));
        doc.set_block_kind(&bullets, BlockKind::BulletItem);
        let numbered = Selection::new(Position::new(3, 0), Position::new(4, 0));
        doc.set_block_kind(&numbered, BlockKind::NumberedItem);

        assert_eq!(
            to_html(&doc),
            "<p>intro</p><ul><li>one</li><li>two</li></ul><ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn italic_only() {
        let mut doc = Document::from_plain_text("soft");
        let sel = whole_block(&doc, 0);
        doc.map_range(&sel, |s| s.marks.italic = true);
        assert_eq!(to_html(&doc), "<p><i>soft</i></p>");
    }
}
