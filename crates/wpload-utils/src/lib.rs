pub mod path_resolver;
pub mod path_utils;
pub mod php;

pub use path_resolver::PathResolver;
pub use path_utils::*;
pub use php::export_string;
