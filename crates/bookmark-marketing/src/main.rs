//! Bookmark Landing Page
//!
//! A Leptos SSR marketing website.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{routing::get, Router};
    use bookmark_marketing::app::App;
    use bookmark_marketing::config::SiteConfig;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let site = SiteConfig::default();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&site.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    bookmark_core::catalog::validate_all()?;

    let conf = leptos::get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/images", ServeDir::new(&site.image_dir))
        .fallback(leptos_axum::file_and_error_handler(App))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(image_dir = %site.image_dir, "Landing page listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client entry point is `hydrate` in lib.rs.
}
