pub mod filter;
pub mod sorter;

pub use filter::{is_production_package, production_names};
pub use sorter::{natural_cmp, priority_order};
