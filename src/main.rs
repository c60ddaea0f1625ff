use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod collector;
mod config;
mod handler;
mod http;
mod logger;
mod observer;
mod render;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Build the Tokio runtime, sizing the thread pool from the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    // The console observer is the default logging sink; the dispatcher only
    // ever sees it as a trait object
    let observer = Arc::new(observer::ConsoleObserver);
    let state = Arc::new(config::AppState::new(&cfg, observer));
    let active_connections = Arc::new(AtomicUsize::new(0));

    logger::log_server_start(&addr, &cfg);

    server::run_accept_loop(listener, state, active_connections).await
}
