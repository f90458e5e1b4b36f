//! Stamps `ACLFW_VERSION` into the build.
#![allow(clippy::print_stdout)]

use std::process::Command;

fn main() {
    // ACLFW_VERSION wins (set by release builds); otherwise describe the
    // working tree so local builds carry a commit id.
    if let Ok(version) = std::env::var("ACLFW_VERSION") {
        println!("cargo:rustc-env=ACLFW_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=ACLFW_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/");
    println!("cargo:rerun-if-env-changed=ACLFW_VERSION");
}
