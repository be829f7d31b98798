// Build provenance for `objcheck version --extended`.
fn main() {
    for (var, key) in [
        ("TARGET", "OBJCHECK_BUILD_TARGET"),
        ("PROFILE", "OBJCHECK_BUILD_PROFILE"),
    ] {
        let value = std::env::var(var).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env={key}={value}");
        println!("cargo:rerun-if-env-changed={var}");
    }
}
