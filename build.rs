//! Build script for folio.
//!
//! Stamps the version string shown by `folio --version` as
//! MAJOR.MINOR.PATCH+YYYYMMDDHHmmss, so every rebuild of the portfolio is
//! distinguishable. The constant is written to OUT_DIR and included by
//! lib.rs.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn build_timestamp() -> String {
    Command::new("date")
        .arg("+%Y%m%d%H%M%S")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|_| "00000000000000".to_string())
}

fn main() {
    let base = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let full_version = format!("{base}+{}", build_timestamp());

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(
        Path::new(&out_dir).join("version.rs"),
        format!(
            r#"/// Full version string with build timestamp.
pub const VERSION: &str = "{full_version}";
"#
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
