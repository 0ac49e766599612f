//! Process-wide logging: `env_logger` behind the `log` facade, plus a panic hook.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the logger (default filter `info`, overridable via `RUST_LOG`).
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        if let Err(err) = env_logger::Builder::from_env(env)
            .format_timestamp_millis()
            .try_init()
        {
            eprintln!("log init failed: {err}");
            return;
        }

        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            log::error!("caught panic: {info}");
            previous(info);
        }));
    });
}
