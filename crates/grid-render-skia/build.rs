// File: crates/grid-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used for system font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
