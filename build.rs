use std::env;

// Exposes the target triple to `log4lib-probe --version`
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let target_triple = env::var("TARGET").unwrap();
    println!("cargo:rustc-env=LOG4LIB_BUILD_TARGET_TRIPLE={}", target_triple);
}
