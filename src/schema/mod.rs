pub mod catalog;
pub mod contract;

pub use catalog::{resolve, RecordKind, PRIORITY_TYPES, SERVICE_TYPES, STATUS_TYPES};
pub use contract::{
    validate, Contract, ElemKind, FieldError, FieldKind, FieldSpec, ValidationFailure,
};
