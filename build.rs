//! Build script: embeds version information at compile time.

use std::process::Command;

// Stamps `LIMPID_VERSION` for `--version` and the verbose banner. Packaged
// builds pass it in; source checkouts get `git describe`. Without either the
// binary reports `CARGO_PKG_VERSION`.
fn main() {
    let version = std::env::var("LIMPID_VERSION").ok().or_else(|| {
        Command::new("git")
            .args(["describe", "--tags", "--always", "--dirty"])
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
    });
    if let Some(version) = version.filter(|v| !v.is_empty()) {
        println!("cargo:rustc-env=LIMPID_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=LIMPID_VERSION");
}
