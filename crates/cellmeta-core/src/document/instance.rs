use cellmeta_engine::engine::{CellData, ObjectMatrix, Value};
use dashmap::DashMap;
use dashmap::mapref::one::{Ref, RefMut};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One sheet and its sparse cell storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "cellData")]
    pub cell_matrix: ObjectMatrix<CellData>,
}

impl Worksheet {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            cell_matrix: ObjectMatrix::new(),
        }
    }

    pub fn get_cell_matrix(&self) -> &ObjectMatrix<CellData> {
        &self.cell_matrix
    }

    pub fn get_cell_matrix_mut(&mut self) -> &mut ObjectMatrix<CellData> {
        &mut self.cell_matrix
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&CellData> {
        self.cell_matrix.get_value(row, col)
    }

    /// Builder-style cell insert, handy for fixtures.
    pub fn with_cell(mut self, row: usize, col: usize, cell: CellData) -> Self {
        self.cell_matrix.set_value(row, col, cell);
        self
    }
}

/// A workbook unit: sheets keyed by sheet id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub id: String,
    #[serde(default)]
    pub sheets: BTreeMap<String, Worksheet>,
}

impl Workbook {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            sheets: BTreeMap::new(),
        }
    }

    pub fn with_sheet(mut self, sheet: Worksheet) -> Self {
        self.sheets.insert(sheet.id.clone(), sheet);
        self
    }

    pub fn get_sheet_by_sheet_id(&self, sub_unit_id: &str) -> Option<&Worksheet> {
        self.sheets.get(sub_unit_id)
    }

    pub fn get_sheet_by_sheet_id_mut(&mut self, sub_unit_id: &str) -> Option<&mut Worksheet> {
        self.sheets.get_mut(sub_unit_id)
    }
}

/// Registry of live workbook units.
///
/// Clones share the same units (DashMap behind an Arc), so the host, the
/// controllers and the undo factory all see one state.
#[derive(Clone, Default)]
pub struct InstanceService {
    units: Arc<DashMap<String, Workbook>>,
}

impl InstanceService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a workbook, replacing any unit with the same id.
    pub fn create_unit(&self, workbook: Workbook) -> Option<Workbook> {
        self.units.insert(workbook.id.clone(), workbook)
    }

    pub fn get_unit(&self, unit_id: &str) -> Option<Ref<'_, String, Workbook>> {
        self.units.get(unit_id)
    }

    pub fn get_unit_mut(&self, unit_id: &str) -> Option<RefMut<'_, String, Workbook>> {
        self.units.get_mut(unit_id)
    }

    /// Clone out a single cell, mostly for inspection.
    pub fn get_cell(
        &self,
        unit_id: &str,
        sub_unit_id: &str,
        row: usize,
        col: usize,
    ) -> Option<CellData> {
        self.get_unit(unit_id)?
            .get_sheet_by_sheet_id(sub_unit_id)?
            .get_cell(row, col)
            .cloned()
    }
}

/// The 2x2 sample workbook the demo host boots with: every cell carries a
/// value and a `custom.key` of v1..v4.
pub fn demo_workbook() -> Workbook {
    let mut sheet = Worksheet::new("sheet1", "Sheet1");
    for (index, (row, col)) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
        let cell = CellData {
            v: Some(Value::String(format!("Hello {}", index + 1))),
            custom: Some(json!({ "key": format!("v{}", index + 1) })),
            ..CellData::default()
        };
        sheet = sheet.with_cell(row, col, cell);
    }
    Workbook::new("workbook").with_sheet(sheet)
}
