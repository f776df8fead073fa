pub mod layout;
pub mod loader;

pub use layout::DataLayout;
pub use loader::{load_all, load_collection, Collections};
