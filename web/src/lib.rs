use wasm_bindgen::prelude::*;

pub use session::GameHandle;

mod session;
mod settings;

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let (args, parse_error) = match settings::Args::from_location() {
        Ok(args) => (args, None),
        Err(err) => (settings::Args::default(), Some(err)),
    };
    let log_level = match parse_error {
        None => args.verbose.log_level(),
        Some(_) => Some(log::Level::Warn),
    };
    if let Some(log_level) = log_level {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("{:#}, using defaults", err);
    }
    args.store_startup();

    log::debug!("App started");
}
