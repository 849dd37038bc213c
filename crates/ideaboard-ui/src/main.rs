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
//! IdeaBoard UI wasm entry point and native headless fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    ideaboard_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::{self, Write};

    use ideaboard_telemetry::{LoggingConfig, init_logging};
    use ideaboard_ui::{BootstrapConfig, BootstrapFlags, HeadlessDocument, bootstrap};

    init_logging(&LoggingConfig::default())?;

    let config = BootstrapConfig {
        flags: BootstrapFlags::from_env()?,
        ..BootstrapConfig::default()
    };
    let mut document = HeadlessDocument::new().with_element(config.target.selector());
    let app = bootstrap(config, &mut document)?;

    let icons = app
        .vocabulary()
        .icon_renderer()
        .map_or(0, |renderer| renderer.registry().len());
    let aliases = app.vocabulary().aliases().collect::<Vec<_>>().join(", ");

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "mounted into {} with {icons} icons ({aliases}); build with `trunk build` for the browser",
        app.target()
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_bootstraps_headless() -> anyhow::Result<()> {
        main()
    }
}
