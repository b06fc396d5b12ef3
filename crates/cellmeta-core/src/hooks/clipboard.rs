use cellmeta_engine::engine::{ObjectMatrix, PastedCell, SheetDiscreteRangeLocation};
use std::sync::Arc;

use super::disposable::Disposable;
use super::registry::HookRegistry;
use crate::document::MutationPair;
use crate::error::Result;

/// Extension point invoked when cells are pasted.
pub trait ClipboardHook: Send + Sync {
    fn id(&self) -> &str;

    /// Higher runs first.
    fn priority(&self) -> i32 {
        0
    }

    /// `data` is keyed by paste-local coordinates; `paste_from` is `None` when
    /// the clipboard content came from outside the workbook.
    fn on_paste_cells(
        &self,
        paste_from: Option<&SheetDiscreteRangeLocation>,
        paste_to: &SheetDiscreteRangeLocation,
        data: &ObjectMatrix<PastedCell>,
    ) -> Result<MutationPair>;
}

/// Host-side clipboard service. Clones share hook registrations.
#[derive(Clone)]
pub struct ClipboardService {
    hooks: HookRegistry<dyn ClipboardHook>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self {
            hooks: HookRegistry::new(),
        }
    }

    pub fn add_clipboard_hook(&self, hook: Arc<dyn ClipboardHook>) -> Disposable {
        let id = hook.id().to_string();
        let priority = hook.priority();
        self.hooks.add(&id, priority, hook)
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run every hook and merge what they return into one pair.
    pub fn paste_cells(
        &self,
        paste_from: Option<&SheetDiscreteRangeLocation>,
        paste_to: &SheetDiscreteRangeLocation,
        data: &ObjectMatrix<PastedCell>,
    ) -> Result<MutationPair> {
        let mut merged = MutationPair::noop();
        for hook in self.hooks.ordered() {
            merged.extend(hook.on_paste_cells(paste_from, paste_to, data)?);
        }
        Ok(merged)
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}
