use spa_server::config::{AppState, Config};
use spa_server::settings::Settings;
use spa_server::{logger, server};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    // A missing or unreadable asset root is fatal: there is nothing to serve.
    let state = match AppState::new(&cfg) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            logger::log_error(&format!(
                "Static asset root '{}' is missing or unreadable: {e}",
                cfg.assets.root
            ));
            return Err(e.into());
        }
    };

    if !state.fallback.is_file() {
        logger::log_warning(&format!(
            "Fallback document '{}' not found; non-asset routes will fail until it exists",
            state.fallback.display()
        ));
    }

    // Resolved once per process; consumed by the browser bundle, logged here
    // so deployments can confirm what the frontend will resolve.
    let settings = Settings::from_env();

    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &cfg, &settings);

    server::run(listener, state).await
}
