#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Ramani UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    ramani_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    let mut stderr = std::io::stderr().lock();
    writeln!(
        stderr,
        "ramani-ui only runs in a browser. Serve it with `trunk serve` from \
         crates/ramani-ui, or compile with `--target wasm32-unknown-unknown`."
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn native_stub_exits_cleanly() -> std::io::Result<()> {
        super::main()
    }
}
