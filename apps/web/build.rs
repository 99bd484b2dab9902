use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    println!("cargo:rustc-env=TIDEPOOL_WEB_GIT_SHA={}", git_sha());
}

fn git_sha() -> String {
    let output = match Command::new("git").args(["rev-parse", "--short", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        _ => return "unknown".to_string(),
    };

    match String::from_utf8(output.stdout) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => "unknown".to_string(),
    }
}
