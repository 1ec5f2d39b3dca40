//! Server lifecycle: bind, run, stop.

use std::net::TcpListener;

use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// A bound, not-yet-running HTTP server.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build state from configuration and bind the listener.
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        let state = AppState::new(config.database.as_ref()).await?;
        Ok(Self::with_state(config, state)?)
    }

    /// Bind the listener over existing state. Port `0` picks a free port.
    pub fn with_state(config: &AppConfig, state: AppState) -> std::io::Result<Self> {
        let listener = TcpListener::bind((config.host.as_str(), config.port))?;
        let port = listener.local_addr()?.port();
        let state = web::Data::new(state);

        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(state.clone())
                .configure(handlers::configure_routes)
                .default_service(web::to(handlers::not_found))
        });
        if let Some(workers) = config.workers {
            server = server.workers(workers);
        }
        let server = server.listen(listener)?.run();

        tracing::info!("Listening on {}:{}", config.host, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle used to stop the server from outside.
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
