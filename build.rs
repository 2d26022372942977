use std::path::PathBuf;

fn main() {
    // Tell Cargo to re-run this build script if registry/ changes
    println!("cargo:rerun-if-changed=registry/");

    // The registry is embedded with include_dir! in src/config/registry.rs,
    // which refuses to compile without it
    let registry_path = PathBuf::from("registry");
    if !registry_path.is_dir() {
        println!(
            "cargo:warning=checker registry directory {} is missing",
            registry_path.display()
        );
    }
}
