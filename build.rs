use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=SSHLAUNCH_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = env::var("SSHLAUNCH_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_default();
    let commit = git_describe().unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=SSHLAUNCH_VERSION={version}");
    println!("cargo:rustc-env=SSHLAUNCH_BUILD_HASH={commit}");
}

/// Short commit id, suffixed with `-dirty` when the tree has local changes.
fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_owned())
}
