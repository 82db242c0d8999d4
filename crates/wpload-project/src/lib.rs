pub mod installed;
pub mod io;
pub mod package;
pub mod rules;

pub use installed::InstalledRepository;
pub use io::{read_root_package, vendor_dir_setting};
pub use package::{DeclaredRules, Package};
pub use rules::{RuleChannel, RuleDeclaration, RuleShapeError};
