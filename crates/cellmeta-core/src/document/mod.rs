//! Live workbook state and the mutations that change it.

mod instance;
mod mutation;

pub use instance::{InstanceService, Workbook, Worksheet, demo_workbook};
pub use mutation::{
    MutationInfo, MutationPair, SET_RANGE_VALUES_MUTATION_ID, SetRangeValuesMutationParams,
    apply_mutation, apply_set_range_values, set_range_values_mutation_pair,
    set_range_values_undo_factory,
};
