// File: crates/plotter-render-skia/build.rs
// Summary: Build script linking the Windows system libraries Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // The target, not the host running this script, decides the link line.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
