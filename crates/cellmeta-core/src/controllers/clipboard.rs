use cellmeta_engine::engine::{
    CellData, ObjectMatrix, PastedCell, SheetDiscreteRangeLocation, virtualize_discrete_ranges,
};
use std::sync::Arc;

use super::CellCustomOptions;
use crate::document::{
    InstanceService, MutationPair, SetRangeValuesMutationParams, set_range_values_mutation_pair,
};
use crate::error::Result;
use crate::hooks::{ClipboardHook, ClipboardService, DisposableCollection};

pub const PASTE_HOOK_ID: &str = "special-paste-cell-custom";

/// Registers the custom-metadata paste hook for as long as it lives.
#[derive(Debug)]
pub struct CellCustomCopyPasteController {
    disposables: DisposableCollection,
}

impl CellCustomCopyPasteController {
    pub fn new(
        clipboard_service: &ClipboardService,
        instances: InstanceService,
        options: &CellCustomOptions,
    ) -> Self {
        let hook = CellCustomPasteHook {
            instances,
            priority: options.clipboard_priority,
            skip_empty: options.skip_empty_paste,
        };
        let mut disposables = DisposableCollection::new();
        disposables.add(clipboard_service.add_clipboard_hook(Arc::new(hook)));
        Self { disposables }
    }

    pub fn dispose(&mut self) {
        self.disposables.dispose();
    }
}

struct CellCustomPasteHook {
    instances: InstanceService,
    priority: i32,
    skip_empty: bool,
}

impl ClipboardHook for CellCustomPasteHook {
    fn id(&self) -> &str {
        PASTE_HOOK_ID
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn on_paste_cells(
        &self,
        paste_from: Option<&SheetDiscreteRangeLocation>,
        paste_to: &SheetDiscreteRangeLocation,
        data: &ObjectMatrix<PastedCell>,
    ) -> Result<MutationPair> {
        get_set_cell_custom_mutations(&self.instances, paste_to, paste_from, data, self.skip_empty)
    }
}

/// Copy each pasted cell's custom metadata onto its real destination cell.
///
/// The pasted matrix is read as-is; `_paste_from` is accepted for symmetry
/// with the hook signature. Unlike autofill, an empty result still yields a
/// redo/undo pair unless `skip_empty` is set.
pub fn get_set_cell_custom_mutations(
    instances: &InstanceService,
    paste_to: &SheetDiscreteRangeLocation,
    _paste_from: Option<&SheetDiscreteRangeLocation>,
    matrix: &ObjectMatrix<PastedCell>,
    skip_empty: bool,
) -> Result<MutationPair> {
    let virtualized = virtualize_discrete_ranges(std::slice::from_ref(&paste_to.range));
    let mut value_matrix = ObjectMatrix::new();

    for (row, col, pasted) in matrix.iter() {
        let Some(custom) = pasted.cell.custom() else {
            continue;
        };
        let Some(real) = virtualized.map(row, col) else {
            tracing::warn!(
                row,
                col,
                "pasted cell lies outside the paste destination, dropping its custom metadata"
            );
            continue;
        };
        value_matrix.set_value(real.row, real.col, CellData::with_custom(custom.clone()));
    }

    if skip_empty && value_matrix.is_empty() {
        return Ok(MutationPair::noop());
    }

    set_range_values_mutation_pair(
        instances,
        SetRangeValuesMutationParams {
            unit_id: paste_to.unit_id.clone(),
            sub_unit_id: paste_to.sub_unit_id.clone(),
            cell_value: value_matrix,
        },
    )
}
