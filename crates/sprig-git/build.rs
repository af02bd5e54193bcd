fn main() {
    // libgit2 pulls in Windows system libraries that aren't linked by default
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
