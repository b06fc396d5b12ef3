//! Controllers that carry cell custom metadata through autofill and paste.

mod auto_fill;
mod clipboard;

pub use auto_fill::{AUTO_FILL_HOOK_ID, CellCustomAutoFillController, collect_fill_custom_values};
pub use clipboard::{CellCustomCopyPasteController, PASTE_HOOK_ID, get_set_cell_custom_mutations};

/// Knobs shared by both controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellCustomOptions {
    /// Priority of the autofill hook.
    pub auto_fill_priority: i32,
    /// Priority of the paste hook.
    pub clipboard_priority: i32,
    /// Return no mutations for a paste that carries no custom metadata,
    /// matching what autofill does. Off by default: paste always emits a
    /// redo/undo pair, even an empty one.
    pub skip_empty_paste: bool,
}
