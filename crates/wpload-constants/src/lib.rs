pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Generates the WordPress class autoload map for installed packages";
pub const REPOSITORY_URL: &str = "https://github.com/alleyinteractive/composer-wordpress-autoloader";
pub const BIN_NAME: &str = "wpload";
pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "dump",
        "Generates vendor/wordpress-autoload.php from installed packages",
        &["dump-autoload", "d"],
    ),
    (
        "list",
        "Lists the namespace rules that would be registered",
        &["ls"],
    ),
    (
        "help",
        "Shows help information for wpload or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("wpload dump", "Generate the autoloader with dev rules"),
    ("wpload dump --no-dev", "Generate a production autoloader"),
    ("wpload dump --injected", "Generate without chaining vendor/autoload.php"),
    ("wpload dump --stdout", "Print the autoloader instead of writing it"),
    ("wpload list --no-dev", "Show production namespace rules"),
];

pub const ROOT_MANIFEST: &str = "composer.json";
pub const INSTALLED_REPOSITORY: &str = "composer/installed.json";
pub const DEFAULT_VENDOR_DIR: &str = "vendor";
pub const VENDOR_DIR_ENV: &str = "COMPOSER_VENDOR_DIR";
pub const ROOT_PACKAGE_NAME: &str = "__root__";

pub const ARTIFACT_FILE_NAME: &str = "wordpress-autoload.php";
pub const ARTIFACT_HEADER: &str = "/* Composer WordPress Autoloader @generated by alleyinteractive/composer-wordpress-autoloader */";
pub const BOOTSTRAP_REQUIRE: &str = "$autoload = require_once __DIR__ . '/autoload.php';";
pub const REGISTER_CALL: &str = r"\ComposerWordPressAutoloader\AutoloadFactory::registerFromRules";

/// Autoload type key read from `autoload` / `autoload-dev`.
pub const AUTOLOAD_TYPE: &str = "wordpress";
/// Key under `extra` holding the extra declaration channel.
pub const EXTRA_KEY: &str = "wordpress-autoloader";
pub const EXTRA_AUTOLOAD: &str = "autoload";
pub const EXTRA_AUTOLOAD_DEV: &str = "autoload-dev";

/// Package type Composer installs without an install path.
pub const METAPACKAGE_TYPE: &str = "metapackage";
