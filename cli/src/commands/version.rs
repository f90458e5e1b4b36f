//! Command: print version information.

/// Version string stamped at build time, or the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("ACLFW_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the aclfw version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("aclfw {}", version());
}
