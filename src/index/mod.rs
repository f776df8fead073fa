pub mod field_index;
pub mod posting;
pub mod indexed;

pub use field_index::{build_index, FieldIndex};
pub use indexed::IndexedCollection;
