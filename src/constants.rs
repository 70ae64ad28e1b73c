//! Constants used throughout configure-skeleton

/// Case-insensitive pattern a file must match to be rewritten.
pub const PLACEHOLDER_PATTERN: &str =
    ":author|:vendor|:package|VendorName|skeleton|vendor_name|vendor_slug";

/// Directory holding Composer dependencies, never scanned.
pub const VENDOR_DIR: &str = "vendor";

/// Hidden top-level directory that is still scanned (CI workflows).
pub const CI_CONFIG_DIR: &str = ".github";

/// Placeholder tokens found in the skeleton files.
pub mod tokens {
    pub const AUTHOR_NAME: &str = ":author_name";
    pub const AUTHOR_USERNAME: &str = ":author_username";
    pub const VENDOR_NAME: &str = ":vendor_name";
    pub const VENDOR_SLUG: &str = ":vendor_slug";
    pub const VENDOR_NAMESPACE: &str = "VendorName";
    pub const PACKAGE_NAME: &str = ":package_name";
    pub const PACKAGE_SLUG: &str = ":package_slug";
    pub const CLASS_NAME: &str = "Skeleton";
    pub const LOWERCASE_NAME: &str = "skeleton";
    pub const VARIABLE_NAME: &str = "variable";
    pub const PACKAGE_DESCRIPTION: &str = ":package_description";
}

/// Relative paths of the stub files that get renamed.
pub mod stubs {
    pub const CLASS_FILE: &str = "src/Skeleton.php";
    pub const PROVIDER_FILE: &str = "src/SkeletonServiceProvider.php";
    pub const FACADE_FILE: &str = "src/Facades/Skeleton.php";
    pub const CONFIG_FILE: &str = "config/skeleton.php";
    pub const README_FILE: &str = "README.md";

    pub const PROVIDER_SUFFIX: &str = "ServiceProvider";
}

/// README section markers.
pub mod readme {
    pub const DELETE_START: &str = "<!--delete-->";
    pub const DELETE_END: &str = "<!--/delete-->";
}

/// GitHub lookups used to guess the identity defaults.
pub mod github {
    pub const API_BASE: &str = "https://api.github.com";
    pub const HOST: &str = "github.com";
    pub const NOREPLY_DOMAIN: &str = "@users.noreply.github.com";
    pub const BOT_MARKER: &str = "[bot]";
    pub const USER_AGENT: &str = concat!("configure-skeleton/", env!("CARGO_PKG_VERSION"));
    pub const TIMEOUT_SECS: u64 = 10;
    pub const CLI_PROGRAM: &str = "gh";
}

/// Composer invocation.
pub mod composer {
    pub const PROGRAM: &str = "composer";
    pub const INSTALL_ARGS: &[&str] = &["install"];
}

/// Question keys, as used in predefined answers.
pub mod questions {
    pub const AUTHOR_NAME: &str = "author_name";
    pub const AUTHOR_USERNAME: &str = "author_username";
    pub const VENDOR_NAME: &str = "vendor_name";
    pub const VENDOR_USERNAME: &str = "vendor_username";
    pub const VENDOR_NAMESPACE: &str = "vendor_namespace";
    pub const PACKAGE_NAME: &str = "package_name";
    pub const CLASS_NAME: &str = "class_name";
    pub const PACKAGE_DESCRIPTION: &str = "package_description";
    pub const MODIFY_FILES: &str = "modify_files";
    pub const COMPOSER_INSTALL: &str = "composer_install";
    pub const DELETE_SCRIPT: &str = "delete_script";
}

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
