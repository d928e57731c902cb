mod extract;
mod handlers;
mod openapi;

use std::{net::SocketAddr, sync::Arc};

use abi::Config;
use axum::{
    routing::{get, post},
    Router,
};
use hms::HmsManager;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::handlers::{booking, chain, employee, health, hotel, not_implemented, rental, room};

pub use extract::{Form, Path, Query};
pub use openapi::ApiDoc;

/// Shared state of every handler.
#[derive(Debug, Clone)]
pub struct HmsService {
    manager: HmsManager,
}

pub type AppState = Arc<HmsService>;

impl HmsService {
    pub fn new(manager: HmsManager) -> Self {
        Self { manager }
    }

    pub async fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let manager = HmsManager::from_config(&config.db, config.policy.on_delete).await?;
        Ok(Self::new(manager))
    }

    pub fn manager(&self) -> &HmsManager {
        &self.manager
    }
}

/// All routes of the API mounted under `/hms/api`.
pub fn app(svc: HmsService) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi))
        // chains
        .route("/chain", get(chain::list).post(chain::create))
        .route(
            "/chain/:chain_id",
            get(chain::detail).put(chain::update).delete(chain::delete),
        )
        // hotels
        .route("/chain/:chain_id/hotel", get(hotel::list).post(hotel::create))
        .route("/chain/:chain_id/hotel/", get(hotel::list))
        .route(
            "/chain/hotel/:hotel_id",
            get(hotel::detail).put(hotel::update).delete(hotel::delete),
        )
        // rooms
        .route("/chain/hotel/:hotel_id/room", get(room::list).post(room::create))
        .route("/chain/hotel/:hotel_id/room/", get(room::list))
        .route("/chain/hotel/:hotel_id/room-search", get(room::search))
        .route(
            "/chain/hotel/room/:room_id",
            get(room::detail).put(room::update).delete(room::delete),
        )
        // bookings
        .route("/bookings", post(booking::create))
        .route("/bookings/", post(booking::create))
        .route("/bookings/:id", get(booking::detail).put(not_implemented))
        .route("/bookings/customer/:customer_id", get(booking::list_of_customer))
        // rentals
        .route("/rentals/:id", get(rental::detail).put(not_implemented))
        .route("/rentals/:id/customer/:customer_id", post(rental::create))
        .route("/rentals/customer/:customer_id", get(rental::list_of_customer))
        // employees
        .route("/employee", get(employee::list).post(not_implemented))
        .route(
            "/employee/:id",
            get(employee::detail)
                .put(not_implemented)
                .delete(not_implemented),
        );

    Router::new()
        .nest("/hms/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(svc))
}

pub async fn start_server(config: &Config) -> Result<(), anyhow::Error> {
    let addr: SocketAddr = config.server.addr().parse()?;
    let svc = HmsService::from_config(config).await?;
    svc.manager.migrate().await?;
    let manager = svc.manager.clone();

    info!("starting server at {}", config.server.url());
    axum::Server::bind(&addr)
        .serve(app(svc).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    manager.close().await;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("ctrl-c received, shutting down"),
        Err(e) => {
            error!("failed to listen for ctrl-c, running until killed: {}", e);
            std::future::pending::<()>().await
        }
    }
}
