//! cellmeta_engine - Ranges, sparse cell matrices and the fill/paste coordinate math.

pub mod engine;

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_fill_pipeline_building_blocks_compose() {
        // Source A1:B1, hidden column C, target D1:G1.
        let source = DiscreteRange::new(vec![0], vec![0, 1]);
        let target = DiscreteRange::new(vec![0], vec![3, 4, 5, 6]);
        let virtualized = virtualize_discrete_ranges(&[source, target]);
        let v_source = virtualized.ranges[0].unwrap();
        let v_target = virtualized.ranges[1].unwrap();

        let repeats = get_auto_fill_repeat_range(&v_source, &v_target);
        let starts: Vec<CellRef> = repeats
            .iter()
            .map(|r| virtualized.map(r.repeat_start_cell.row, r.repeat_start_cell.col).unwrap())
            .collect();
        assert_eq!(starts, vec![CellRef::new(0, 3), CellRef::new(0, 5)]);
    }
}
