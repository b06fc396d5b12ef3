//! The set-range-values mutation and its undo snapshot.
//!
//! A `cellValue` entry is a patch: a missing field leaves the live cell's
//! field alone, an explicit JSON `null` clears it, anything else replaces it.
//! A cell left without any field is removed from the sheet.

use cellmeta_engine::engine::{CellData, ObjectMatrix, Value};
use serde::{Deserialize, Serialize};

use super::instance::InstanceService;
use crate::error::{CoreError, Result};

pub const SET_RANGE_VALUES_MUTATION_ID: &str = "sheet.mutation.set-range-values";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRangeValuesMutationParams {
    pub unit_id: String,
    pub sub_unit_id: String,
    pub cell_value: ObjectMatrix<CellData>,
}

/// A declarative change for the host to apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationInfo {
    pub mutation_id: String,
    pub params: SetRangeValuesMutationParams,
}

impl MutationInfo {
    pub fn set_range_values(params: SetRangeValuesMutationParams) -> Self {
        Self {
            mutation_id: SET_RANGE_VALUES_MUTATION_ID.to_string(),
            params,
        }
    }
}

/// Redo/undo lists returned from a hook. The host applies `redos` in order
/// and `undos` to revert them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationPair {
    pub undos: Vec<MutationInfo>,
    pub redos: Vec<MutationInfo>,
}

impl MutationPair {
    /// Nothing to do.
    pub fn noop() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.undos.is_empty() && self.redos.is_empty()
    }

    pub fn extend(&mut self, other: MutationPair) {
        self.undos.extend(other.undos);
        self.redos.extend(other.redos);
    }
}

/// Snapshot the live values that `params` is about to overwrite.
///
/// Applying the returned params after `params` restores every addressed cell
/// exactly, including removing cells that didn't exist before.
pub fn set_range_values_undo_factory(
    instances: &InstanceService,
    params: &SetRangeValuesMutationParams,
) -> Result<SetRangeValuesMutationParams> {
    let unit = instances
        .get_unit(&params.unit_id)
        .ok_or_else(|| CoreError::UnitNotFound(params.unit_id.clone()))?;
    let sheet = unit
        .get_sheet_by_sheet_id(&params.sub_unit_id)
        .ok_or_else(|| CoreError::SheetNotFound {
            unit_id: params.unit_id.clone(),
            sub_unit_id: params.sub_unit_id.clone(),
        })?;
    let cell_matrix = sheet.get_cell_matrix();

    let cell_value = params
        .cell_value
        .iter()
        .map(|(row, col, patch)| {
            let mut snapshot = cell_matrix.get_value(row, col).cloned().unwrap_or_default();
            clear_if_absent(&mut snapshot.v, &patch.v);
            clear_if_absent(&mut snapshot.s, &patch.s);
            clear_if_absent(&mut snapshot.custom, &patch.custom);
            (row, col, snapshot)
        })
        .collect();

    Ok(SetRangeValuesMutationParams {
        unit_id: params.unit_id.clone(),
        sub_unit_id: params.sub_unit_id.clone(),
        cell_value,
    })
}

/// A field the redo writes but the live cell lacks must be cleared on undo.
fn clear_if_absent(snapshot: &mut Option<Value>, patch: &Option<Value>) {
    if patch.is_some() && snapshot.is_none() {
        *snapshot = Some(Value::Null);
    }
}

/// Build the redo entry for `params` plus its undo snapshot.
pub fn set_range_values_mutation_pair(
    instances: &InstanceService,
    params: SetRangeValuesMutationParams,
) -> Result<MutationPair> {
    let undo = set_range_values_undo_factory(instances, &params)?;
    Ok(MutationPair {
        undos: vec![MutationInfo::set_range_values(undo)],
        redos: vec![MutationInfo::set_range_values(params)],
    })
}

/// Apply a set-range-values patch to the live sheet.
pub fn apply_set_range_values(
    instances: &InstanceService,
    params: &SetRangeValuesMutationParams,
) -> Result<()> {
    let mut unit = instances
        .get_unit_mut(&params.unit_id)
        .ok_or_else(|| CoreError::UnitNotFound(params.unit_id.clone()))?;
    let sheet = unit
        .get_sheet_by_sheet_id_mut(&params.sub_unit_id)
        .ok_or_else(|| CoreError::SheetNotFound {
            unit_id: params.unit_id.clone(),
            sub_unit_id: params.sub_unit_id.clone(),
        })?;
    let cell_matrix = sheet.get_cell_matrix_mut();

    for (row, col, patch) in params.cell_value.iter() {
        let mut cell = cell_matrix.get_value(row, col).cloned().unwrap_or_default();
        patch_field(&mut cell.v, &patch.v);
        patch_field(&mut cell.s, &patch.s);
        patch_field(&mut cell.custom, &patch.custom);

        if cell.is_empty() {
            cell_matrix.real_delete_value(row, col);
        } else {
            cell_matrix.set_value(row, col, cell);
        }
    }
    Ok(())
}

fn patch_field(field: &mut Option<Value>, patch: &Option<Value>) {
    match patch {
        None => {}
        Some(Value::Null) => *field = None,
        Some(value) => *field = Some(value.clone()),
    }
}

/// Dispatch a mutation by id.
pub fn apply_mutation(instances: &InstanceService, mutation: &MutationInfo) -> Result<()> {
    match mutation.mutation_id.as_str() {
        SET_RANGE_VALUES_MUTATION_ID => apply_set_range_values(instances, &mutation.params),
        other => Err(CoreError::UnknownMutation(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Workbook, Worksheet};
    use serde_json::json;

    fn instances_with(sheet: Worksheet) -> InstanceService {
        let instances = InstanceService::new();
        instances.create_unit(Workbook::new("wb").with_sheet(sheet));
        instances
    }

    fn custom_patch(row: usize, col: usize, custom: Value) -> SetRangeValuesMutationParams {
        let mut cell_value = ObjectMatrix::new();
        cell_value.set_value(row, col, CellData::with_custom(custom));
        SetRangeValuesMutationParams {
            unit_id: "wb".to_string(),
            sub_unit_id: "s1".to_string(),
            cell_value,
        }
    }

    #[test]
    fn test_undo_of_absent_cell_clears_and_removes_it() {
        let instances = instances_with(Worksheet::new("s1", "Sheet1"));
        let redo = custom_patch(0, 1, json!({"key": "v1"}));
        let undo = set_range_values_undo_factory(&instances, &redo).unwrap();

        assert_eq!(
            undo.cell_value.get_value(0, 1),
            Some(&CellData {
                custom: Some(Value::Null),
                ..CellData::default()
            })
        );

        apply_set_range_values(&instances, &redo).unwrap();
        assert_eq!(
            instances.get_cell("wb", "s1", 0, 1).unwrap().custom(),
            Some(&json!({"key": "v1"}))
        );

        apply_set_range_values(&instances, &undo).unwrap();
        assert!(instances.get_cell("wb", "s1", 0, 1).is_none());
    }

    #[test]
    fn test_redo_keeps_untouched_fields_and_undo_restores_old_custom() {
        let existing = CellData {
            v: Some(json!(42)),
            custom: Some(json!({"key": "old"})),
            ..CellData::default()
        };
        let sheet = Worksheet::new("s1", "Sheet1").with_cell(3, 3, existing.clone());
        let instances = instances_with(sheet);
        let redo = custom_patch(3, 3, json!({"key": "new"}));
        let undo = set_range_values_undo_factory(&instances, &redo).unwrap();

        apply_set_range_values(&instances, &redo).unwrap();
        let patched = instances.get_cell("wb", "s1", 3, 3).unwrap();
        assert_eq!(patched.v, Some(json!(42)));
        assert_eq!(patched.custom(), Some(&json!({"key": "new"})));

        apply_set_range_values(&instances, &undo).unwrap();
        assert_eq!(instances.get_cell("wb", "s1", 3, 3), Some(existing));
    }

    #[test]
    fn test_undo_factory_reports_missing_unit_and_sheet() {
        let instances = instances_with(Worksheet::new("s1", "Sheet1"));
        let mut params = custom_patch(0, 0, json!(1));

        params.sub_unit_id = "nope".to_string();
        assert!(matches!(
            set_range_values_undo_factory(&instances, &params),
            Err(CoreError::SheetNotFound { .. })
        ));

        params.unit_id = "gone".to_string();
        assert_eq!(
            set_range_values_undo_factory(&instances, &params),
            Err(CoreError::UnitNotFound("gone".to_string()))
        );
    }

    #[test]
    fn test_apply_mutation_rejects_unknown_ids() {
        let instances = instances_with(Worksheet::new("s1", "Sheet1"));
        let mut mutation = MutationInfo::set_range_values(custom_patch(0, 0, json!(1)));
        mutation.mutation_id = "sheet.mutation.move-range".to_string();
        assert_eq!(
            apply_mutation(&instances, &mutation),
            Err(CoreError::UnknownMutation("sheet.mutation.move-range".to_string()))
        );
    }

    #[test]
    fn test_mutation_wire_shape() {
        let mutation = MutationInfo::set_range_values(custom_patch(0, 1, json!({"key": "v1"})));
        assert_eq!(
            serde_json::to_value(&mutation).unwrap(),
            json!({
                "mutationId": SET_RANGE_VALUES_MUTATION_ID,
                "params": {
                    "unitId": "wb",
                    "subUnitId": "s1",
                    "cellValue": {"0": {"1": {"custom": {"key": "v1"}}}}
                }
            })
        );
    }
}
