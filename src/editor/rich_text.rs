//! Rich-text editor: a document, a selection, and an undo history.

use tracing::debug;

use super::document::{BlockKind, Document, Mark, Marks, Position, Selection};
use super::html::to_html;
use crate::error::EditorError;

/// List flavour for [`EditorCommand::WrapInList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

impl ListKind {
    fn block_kind(self) -> BlockKind {
        match self {
            Self::Bullet => BlockKind::BulletItem,
            Self::Numbered => BlockKind::NumberedItem,
        }
    }
}

/// Toolbar and keyboard commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    ToggleMark(Mark),
    WrapInList(ListKind),
    InsertLink(String),
    /// Typed or pasted plain text; replaces the selection.
    InsertText(String),
    Select(Selection),
    SelectAll,
    Undo,
    Redo,
}

#[derive(Debug, Clone)]
struct Snapshot {
    doc: Document,
    selection: Selection,
}

/// Editing session over one rich-text field.
#[derive(Debug, Clone)]
pub struct RichTextEditor {
    doc: Document,
    selection: Selection,
    /// Marks toggled at a caret, applied to the next insertion.
    pending: Option<Marks>,
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    history_limit: usize,
}

impl Default for RichTextEditor {
    fn default() -> Self {
        Self::new(100)
    }
}

impl RichTextEditor {
    pub fn new(history_limit: usize) -> Self {
        Self {
            doc: Document::default(),
            selection: Selection::default(),
            pending: None,
            undo: Vec::new(),
            redo: Vec::new(),
            history_limit,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn html(&self) -> String {
        to_html(&self.doc)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Marks that the toolbar should show as active.
    pub fn active_marks(&self) -> Marks {
        self.pending
            .unwrap_or_else(|| self.doc.marks_at(&self.selection))
    }

    /// Replace the whole content with plain text, as one undoable edit.
    pub fn replace_text(&mut self, text: &str) {
        self.checkpoint();
        self.doc = Document::from_plain_text(text);
        self.selection = Selection::caret(self.doc.end());
        self.pending = None;
    }

    /// Run a command and return the serialized document.
    pub fn apply(&mut self, command: EditorCommand) -> Result<String, EditorError> {
        debug!(?command, "Editor command");
        match command {
            EditorCommand::ToggleMark(mark) => self.toggle_mark(mark),
            EditorCommand::WrapInList(kind) => self.wrap_in_list(kind),
            EditorCommand::InsertLink(url) => self.insert_link(&url)?,
            EditorCommand::InsertText(text) => self.insert_text(&text),
            EditorCommand::Select(selection) => self.select(selection)?,
            EditorCommand::SelectAll => {
                self.selection = Selection::new(Position::default(), self.doc.end());
                self.pending = None;
            }
            EditorCommand::Undo => self.step_history(true),
            EditorCommand::Redo => self.step_history(false),
        }
        Ok(self.html())
    }

    fn select(&mut self, selection: Selection) -> Result<(), EditorError> {
        for pos in [selection.start, selection.end] {
            if !self.doc.contains(pos) {
                return Err(EditorError::InvalidPosition {
                    block: pos.block,
                    offset: pos.offset,
                });
            }
        }
        self.selection = Selection::new(selection.start, selection.end);
        self.pending = None;
        Ok(())
    }

    fn toggle_mark(&mut self, mark: Mark) {
        if self.selection.is_collapsed() {
            self.pending = Some(self.active_marks().toggled(mark));
            return;
        }
        self.checkpoint();
        let all = self.doc.all_in_range(&self.selection, |s| s.marks.has(mark));
        self.doc
            .map_range(&self.selection, |s| s.marks.set(mark, !all));
    }

    fn wrap_in_list(&mut self, kind: ListKind) {
        self.checkpoint();
        let target = kind.block_kind();
        let kind = if self.doc.all_blocks_are(&self.selection, target) {
            BlockKind::Paragraph
        } else {
            target
        };
        self.doc.set_block_kind(&self.selection, kind);
    }

    fn insert_link(&mut self, url: &str) -> Result<(), EditorError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(EditorError::EmptyLink);
        }
        self.checkpoint();
        if self.selection.is_collapsed() {
            let marks = self.active_marks();
            let caret = self
                .doc
                .insert_text(self.selection.start, url, marks, Some(url));
            self.selection = Selection::caret(caret);
            self.pending = None;
        } else {
            let href = url.to_string();
            self.doc
                .map_range(&self.selection, |s| s.link = Some(href.clone()));
        }
        Ok(())
    }

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() && self.selection.is_collapsed() {
            return;
        }
        self.checkpoint();
        let marks = self.active_marks();
        self.doc.delete_range(&self.selection);
        let caret = self.doc.insert_text(self.selection.start, text, marks, None);
        self.selection = Selection::caret(caret);
        self.pending = None;
    }

    fn checkpoint(&mut self) {
        self.undo.push(Snapshot {
            doc: self.doc.clone(),
            selection: self.selection,
        });
        if self.undo.len() > self.history_limit {
            self.undo.remove(0);
        }
        self.redo.clear();
    }

    fn step_history(&mut self, backwards: bool) {
        let (from, to) = if backwards {
            (&mut self.undo, &mut self.redo)
        } else {
            (&mut self.redo, &mut self.undo)
        };
        let Some(snapshot) = from.pop() else {
            return;
        };
        to.push(Snapshot {
            doc: std::mem::replace(&mut self.doc, snapshot.doc),
            selection: self.selection,
        });
        self.selection = snapshot.selection;
        self.pending = None;
    }
}
