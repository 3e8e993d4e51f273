use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=Cargo.toml");
    include_git_commit_hash();
}

/// Sets the `GIT_HASH` environment variable for the compilation of the crate.
///
/// If the hash cannot be determined, this prints a warning and the variable
/// stays unset.
fn include_git_commit_hash() {
    let output = match Command::new("git").args(["rev-parse", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        Ok(_) => return println!("cargo::warning=`git rev-parse` exited with non-success error code"),
        Err(why) => return println!("cargo::warning=cannot find git commit hash: {why}"),
    };

    let Ok(output) = String::from_utf8(output.stdout) else {
        return println!("cargo::warning=`git rev-parse` output is invalid utf-8");
    };

    match output.lines().next() {
        Some(git_hash) => println!("cargo::rustc-env=GIT_HASH={git_hash}"),
        None => println!("cargo::warning=could not find git commit hash"),
    }
}
