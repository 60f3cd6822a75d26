//! Local UI chrome state (theme, sidebar drafts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the editor document so the
//! sidebar inputs can hold half-typed values without touching the layout.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the pages through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Text in the workspace "Columns" input.
    pub cols_draft: String,
    /// Text in the workspace "Rows" input.
    pub rows_draft: String,
    /// Label being edited in the properties panel, if the editor is open.
    pub label_draft: Option<String>,
}

impl UiState {
    /// Reset the workspace inputs to the applied grid size.
    pub fn sync_grid_drafts(&mut self, cols: u32, rows: u32) {
        self.cols_draft = cols.to_string();
        self.rows_draft = rows.to_string();
    }

    /// Open the label editor seeded with the current label.
    pub fn begin_label_edit(&mut self, current: Option<&str>) {
        self.label_draft = Some(current.unwrap_or_default().to_owned());
    }

    /// Close the label editor, returning the edited text.
    pub fn finish_label_edit(&mut self) -> Option<String> {
        self.label_draft.take()
    }
}
