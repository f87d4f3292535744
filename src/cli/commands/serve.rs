use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::server;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.server.host = h.clone();
        }
        if let Some(p) = port {
            cfg.server.port = *p;
        }
        cfg.validate()?;

        // schema up to date before the first request
        open_pool(&cfg)?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Server(format!("failed to start runtime: {e}")))?;
        runtime.block_on(server::start_server(cfg))?;
    }

    Ok(())
}
