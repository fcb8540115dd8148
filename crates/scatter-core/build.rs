// File: crates/scatter-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs for the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font manager reads the registry (RegOpenKeyExW et al).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
