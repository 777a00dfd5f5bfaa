//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{confirm_interest, decline_interest, health_check, home, interest_form};
use crate::routes::PromptTarget;
use crate::store::RestEmailStore;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let tcp_listener = TcpListener::bind(address)?;
        let port = tcp_listener.local_addr()?.port();

        let store = RestEmailStore::from(&config.store);
        let target = PromptTarget {
            table: config.store.table.clone(),
            home_path: config.prompt.home_path.clone(),
        };

        let server = run(tcp_listener, store, target)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: RestEmailStore,
    target: PromptTarget,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let target = web::Data::new(target);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))

            // serving HTML files
            .route("/", web::get().to(home))
            .route("/interest", web::get().to(interest_form))
            .route("/interest", web::post().to(confirm_interest))
            .route("/interest/decline", web::post().to(decline_interest))

            .app_data(store.clone())
            .app_data(target.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
