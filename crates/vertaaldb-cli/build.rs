use std::process::Command;

fn main() {
    // Short git hash for the version string; "unknown" outside a checkout.
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_HASH={hash}");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}
