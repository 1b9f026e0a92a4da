use actix_files::Files;
use actix_web::{web, App, HttpServer};
use backend::config::Config;
use backend::state::AppState;
use backend::{db, services};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load();
    std::fs::create_dir_all(&config.uploads_dir)?;
    // Fail fast when the database cannot be created.
    db::open_db(&config.db_path).map_err(|e| std::io::Error::other(e.to_string()))?;

    let state = AppState::new(config);
    let bind = (state.config.host.clone(), state.config.port);
    let uploads_dir = state.config.uploads_dir.clone();

    info!("Server running at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(state.clone()))
            .route("/api/health", web::get().to(services::health))
            .service(services::auth::configure_routes())
            .service(services::schools::configure_routes())
            .service(services::verification::configure_routes())
            .service(services::uploads::configure_routes())
            .service(Files::new("/uploads", uploads_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
