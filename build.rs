use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, read with env!
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs or the site content changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
