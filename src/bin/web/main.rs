use std::{net::SocketAddr, str::FromStr};

use axum::http::{HeaderValue, Method};
use blog::{
	config::StorageKind,
	database,
	dependencies::{config, connection_pool},
	routes::{create_routes, AppState},
	services::response::ServiceError,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	println!("Environment Variable Is Being Set...");
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("{},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Connection
	let state = match config.storage {
		StorageKind::Postgres => {
			tracing::info!("Connections Are Being Pooled...");
			let pool = connection_pool().await?;
			database::migrate(pool).await?;
			AppState::postgres(pool.clone())
		}
		StorageKind::Memory => {
			tracing::warn!("Using in-memory storage, data will not survive a restart");
			AppState::in_memory()
		}
	};

	let origins = config
		.origins()
		.map(|origin| {
			origin
				.parse::<HeaderValue>()
				.map_err(|_| ServiceError::ConfigError(format!("invalid origin `{origin}`")))
		})
		.collect::<Result<Vec<_>, _>>()?;

	let app = create_routes(state)
		.layer(
			CorsLayer::new()
				.allow_origin(origins)
				.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]),
		)
		.layer(TraceLayer::new_for_http());

	let addr = SocketAddr::from_str(&config.server_ip_port)
		.map_err(|_| ServiceError::ConfigError(format!("invalid SERVER_IP_PORT `{}`", config.server_ip_port)))?;
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Start Web Server on {}", addr);
	axum::serve(listener, app).await?;
	Ok(())
}
