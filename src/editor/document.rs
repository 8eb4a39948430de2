//! Structured rich-text document: blocks of formatted spans.
//!
//! Positions are character offsets within a block. Every mutating helper
//! leaves blocks normalized (no empty spans, no two adjacent spans with the
//! same formatting), and the document always holds at least one block.

use serde::Serialize;

/// An inline formatting mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
}

/// The set of marks carried by a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Marks {
    pub fn has(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
        }
    }

    pub fn set(&mut self, mark: Mark, on: bool) {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Underline => self.underline = on,
        }
    }

    pub fn toggled(mut self, mark: Mark) -> Self {
        let on = self.has(mark);
        self.set(mark, !on);
        self
    }

    fn intersect(self, other: Marks) -> Marks {
        Marks {
            bold: self.bold && other.bold,
            italic: self.italic && other.italic,
            underline: self.underline && other.underline,
        }
    }

    fn all() -> Marks {
        Marks {
            bold: true,
            italic: true,
            underline: true,
        }
    }
}

/// A run of text with uniform formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub marks: Marks,
    pub link: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Marks::default(),
            link: None,
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn same_format(&self, other: &Span) -> bool {
        self.marks == other.marks && self.link == other.link
    }
}

/// Block-level structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockKind {
    #[default]
    Paragraph,
    BulletItem,
    NumberedItem,
}

/// A paragraph or list item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        let mut block = Self {
            kind: BlockKind::Paragraph,
            spans: vec![Span::plain(text)],
        };
        block.normalize();
        block
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Make sure a span boundary falls at `offset` and return the index of
    /// the first span starting there (`spans.len()` at the end).
    fn boundary_at(&mut self, offset: usize) -> usize {
        let mut pos = 0;
        for i in 0..self.spans.len() {
            let len = self.spans[i].len();
            if offset == pos {
                return i;
            }
            if offset < pos + len {
                let (head, tail) = split_chars(&self.spans[i].text, offset - pos);
                let mut second = self.spans[i].clone();
                second.text = tail;
                self.spans[i].text = head;
                self.spans.insert(i + 1, second);
                return i + 1;
            }
            pos += len;
        }
        self.spans.len()
    }

    /// Split the block at `offset`, returning the tail as a block of the same kind.
    fn split_off(&mut self, offset: usize) -> Block {
        let idx = self.boundary_at(offset);
        let tail = self.spans.split_off(idx);
        let mut tail = Block {
            kind: self.kind,
            spans: tail,
        };
        self.normalize();
        tail.normalize();
        tail
    }

    /// Spans that overlap `[start, end)`, as indices after splitting at both ends.
    fn isolate(&mut self, start: usize, end: usize) -> std::ops::Range<usize> {
        // Split at `start` first: the later split at `end` only inserts after it.
        let start_idx = self.boundary_at(start);
        let end_idx = self.boundary_at(end);
        start_idx..end_idx
    }

    fn normalize(&mut self) {
        self.spans.retain(|s| !s.text.is_empty());
        let mut merged: Vec<Span> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            match merged.last_mut() {
                Some(last) if last.same_format(&span) => last.text.push_str(&span.text),
                _ => merged.push(span),
            }
        }
        self.spans = merged;
    }

    /// Spans with at least one character inside `[start, end)`.
    fn overlapping(&self, start: usize, end: usize) -> impl Iterator<Item = &Span> {
        let mut pos = 0;
        self.spans.iter().filter(move |span| {
            let span_start = pos;
            let span_end = pos + span.len();
            pos = span_end;
            span_start < end && span_end > start
        })
    }

    /// The span holding the character at `index`.
    fn span_at_char(&self, index: usize) -> Option<&Span> {
        let mut pos = 0;
        for span in &self.spans {
            let len = span.len();
            if index < pos + len {
                return Some(span);
            }
            pos += len;
        }
        None
    }
}

fn split_chars(s: &str, n: usize) -> (String, String) {
    match s.char_indices().nth(n) {
        Some((byte, _)) => (s[..byte].to_string(), s[byte..].to_string()),
        None => (s.to_string(), String::new()),
    }
}

/// A caret position: block index and character offset within that block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// An ordered selection. `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Build a selection from two positions in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn caret(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// A rich-text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            blocks: vec![Block::default()],
        }
    }
}

impl Document {
    /// A document of plain paragraphs, one per line.
    pub fn from_plain_text(text: &str) -> Self {
        let mut doc = Self::default();
        doc.insert_text(Position::default(), text, Marks::default(), None);
        doc
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_empty)
    }

    /// Plain text, blocks joined by newlines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Position just past the last character.
    pub fn end(&self) -> Position {
        let last = self.blocks.len() - 1;
        Position::new(last, self.blocks[last].len())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.blocks
            .get(pos.block)
            .is_some_and(|b| pos.offset <= b.len())
    }

    /// Local `[start, end)` range of block `b` covered by the selection.
    fn local_range(&self, b: usize, sel: &Selection) -> (usize, usize) {
        let start = if b == sel.start.block { sel.start.offset } else { 0 };
        let end = if b == sel.end.block {
            sel.end.offset
        } else {
            self.blocks[b].len()
        };
        (start, end)
    }

    /// Apply `f` to every span inside the selection.
    pub fn map_range(&mut self, sel: &Selection, mut f: impl FnMut(&mut Span)) {
        for b in sel.start.block..=sel.end.block {
            let (start, end) = self.local_range(b, sel);
            if start >= end {
                continue;
            }
            let block = &mut self.blocks[b];
            let range = block.isolate(start, end);
            for span in &mut block.spans[range] {
                f(span);
            }
            block.normalize();
        }
    }

    /// Whether every character in the selection satisfies `pred`.
    /// An empty selection satisfies nothing.
    pub fn all_in_range(&self, sel: &Selection, pred: impl Fn(&Span) -> bool) -> bool {
        let mut seen = false;
        for b in sel.start.block..=sel.end.block {
            let (start, end) = self.local_range(b, sel);
            for span in self.blocks[b].overlapping(start, end) {
                seen = true;
                if !pred(span) {
                    return false;
                }
            }
        }
        seen
    }

    /// Marks shared by every character in the selection. For a caret, the
    /// marks of the character before it (or after it at a block start).
    pub fn marks_at(&self, sel: &Selection) -> Marks {
        if sel.is_collapsed() {
            let block = &self.blocks[sel.start.block];
            let probe = if sel.start.offset > 0 {
                block.span_at_char(sel.start.offset - 1)
            } else {
                block.span_at_char(0)
            };
            return probe.map(|s| s.marks).unwrap_or_default();
        }

        let mut acc = Marks::all();
        let mut seen = false;
        for b in sel.start.block..=sel.end.block {
            let (start, end) = self.local_range(b, sel);
            for span in self.blocks[b].overlapping(start, end) {
                seen = true;
                acc = acc.intersect(span.marks);
            }
        }
        if seen { acc } else { Marks::default() }
    }

    /// Set the kind of every block the selection touches.
    pub fn set_block_kind(&mut self, sel: &Selection, kind: BlockKind) {
        for block in &mut self.blocks[sel.start.block..=sel.end.block] {
            block.kind = kind;
        }
    }

    /// Whether every block the selection touches has `kind`.
    pub fn all_blocks_are(&self, sel: &Selection, kind: BlockKind) -> bool {
        self.blocks[sel.start.block..=sel.end.block]
            .iter()
            .all(|b| b.kind == kind)
    }

    /// Remove the selected text, joining the end block onto the start block.
    pub fn delete_range(&mut self, sel: &Selection) {
        if sel.is_collapsed() {
            return;
        }
        let (start, end) = (sel.start, sel.end);
        if start.block == end.block {
            let block = &mut self.blocks[start.block];
            let range = block.isolate(start.offset, end.offset);
            block.spans.drain(range);
            block.normalize();
            return;
        }

        let tail = self.blocks[end.block].split_off(end.offset);
        self.blocks[start.block].split_off(start.offset);
        self.blocks.drain(start.block + 1..=end.block);
        let head = &mut self.blocks[start.block];
        head.spans.extend(tail.spans);
        head.normalize();
    }

    /// Insert text at `pos`. Newlines start a new block of the same kind.
    /// Returns the caret position after the inserted text.
    pub fn insert_text(
        &mut self,
        pos: Position,
        text: &str,
        marks: Marks,
        link: Option<&str>,
    ) -> Position {
        let text = text.replace("\r\n", "\n");
        let mut block = pos.block;
        let mut offset = pos.offset;

        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                let tail = self.blocks[block].split_off(offset);
                self.blocks.insert(block + 1, tail);
                block += 1;
                offset = 0;
            }
            if line.is_empty() {
                continue;
            }
            let target = &mut self.blocks[block];
            let idx = target.boundary_at(offset);
            target.spans.insert(
                idx,
                Span {
                    text: line.to_string(),
                    marks,
                    link: link.map(str::to_string),
                },
            );
            target.normalize();
            offset += line.chars().count();
        }

        Position::new(block, offset)
    }
}
