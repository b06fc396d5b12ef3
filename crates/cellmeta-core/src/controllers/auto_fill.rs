use cellmeta_engine::engine::{
    ApplyType, AutoFillLocation, CellData, Direction, ObjectMatrix, Range,
    get_auto_fill_repeat_range, virtualize_discrete_ranges,
};
use std::sync::Arc;

use super::CellCustomOptions;
use crate::document::{
    InstanceService, MutationPair, SetRangeValuesMutationParams, set_range_values_mutation_pair,
};
use crate::error::Result;
use crate::hooks::{AutoFillHook, AutoFillService, DisposableCollection};

pub const AUTO_FILL_HOOK_ID: &str = "CELL_CUSTOM_AUTO_FILL";

/// Registers the custom-metadata autofill hook for as long as it lives.
#[derive(Debug)]
pub struct CellCustomAutoFillController {
    disposables: DisposableCollection,
}

impl CellCustomAutoFillController {
    pub fn new(
        auto_fill_service: &AutoFillService,
        instances: InstanceService,
        options: &CellCustomOptions,
    ) -> Self {
        let hook = CellCustomAutoFillHook {
            instances,
            priority: options.auto_fill_priority,
        };
        let mut disposables = DisposableCollection::new();
        disposables.add(auto_fill_service.add_hook(Arc::new(hook)));
        Self { disposables }
    }

    pub fn dispose(&mut self) {
        self.disposables.dispose();
    }
}

struct CellCustomAutoFillHook {
    instances: InstanceService,
    priority: i32,
}

impl AutoFillHook for CellCustomAutoFillHook {
    fn id(&self) -> &str {
        AUTO_FILL_HOOK_ID
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn on_fill_data(
        &self,
        location: &AutoFillLocation,
        _direction: Direction,
        apply_type: ApplyType,
    ) -> Result<MutationPair> {
        if !apply_type.copies_custom() {
            return Ok(MutationPair::noop());
        }

        // Scoped so the unit guard is released before the undo factory reads it again.
        let value_matrix = {
            let Some(unit) = self.instances.get_unit(&location.unit_id) else {
                tracing::debug!(unit_id = %location.unit_id, "autofill target unit not found");
                return Ok(MutationPair::noop());
            };
            let Some(sheet) = unit.get_sheet_by_sheet_id(&location.sub_unit_id) else {
                tracing::debug!(
                    unit_id = %location.unit_id,
                    sub_unit_id = %location.sub_unit_id,
                    "autofill target sheet not found"
                );
                return Ok(MutationPair::noop());
            };
            collect_fill_custom_values(location, sheet.get_cell_matrix())
        };

        if value_matrix.is_empty() {
            return Ok(MutationPair::noop());
        }

        tracing::debug!(cells = value_matrix.len(), %apply_type, "filling cell custom metadata");
        set_range_values_mutation_pair(
            &self.instances,
            SetRangeValuesMutationParams {
                unit_id: location.unit_id.clone(),
                sub_unit_id: location.sub_unit_id.clone(),
                cell_value: value_matrix,
            },
        )
    }
}

/// Compute the custom-only cell records a fill writes into its target.
///
/// Each tile of the source shape across the target reads from the source's
/// top-left anchor shifted by the same offset, so a cell without custom
/// metadata leaves its tiled positions untouched.
pub fn collect_fill_custom_values(
    location: &AutoFillLocation,
    cell_matrix: &ObjectMatrix<CellData>,
) -> ObjectMatrix<CellData> {
    let mut value_matrix = ObjectMatrix::new();

    let virtualized =
        virtualize_discrete_ranges(&[location.source.clone(), location.target.clone()]);
    let (v_source, v_target) = match virtualized.ranges.as_slice() {
        [Some(source), Some(target)] => (*source, *target),
        _ => return value_matrix,
    };
    let source_anchor = Range::single(v_source.start_row, v_source.start_column);

    for repeat in get_auto_fill_repeat_range(&v_source, &v_target) {
        let start = repeat.repeat_start_cell;
        let target_anchor = Range::single(start.row, start.col);

        for (row, col) in repeat.relative_range.cells() {
            let offset = Range::single(row, col);
            let source_position = Range::get_position_range(&offset, &source_anchor);
            let target_position = Range::get_position_range(&offset, &target_anchor);

            let (Some(source), Some(target)) = (
                virtualized.map(source_position.start_row, source_position.start_column),
                virtualized.map(target_position.start_row, target_position.start_column),
            ) else {
                continue;
            };

            let custom = cell_matrix
                .get_value(source.row, source.col)
                .and_then(CellData::custom);
            if let Some(custom) = custom {
                let record = CellData::with_custom(custom.clone());
                value_matrix.set_value(target.row, target.col, record);
            }
        }
    }

    value_matrix
}
