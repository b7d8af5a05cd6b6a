//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    use polydraw_app::{App, AppConfig, ShortcutRegistry, console};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting PolyDraw");

    let config = AppConfig::from_env();
    ShortcutRegistry::print_all();

    let (commands, _console) = console::spawn().expect("Failed to start console thread");
    if let Err(e) = pollster::block_on(App::run(config, commands)) {
        log::error!("Event loop error: {e}");
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
