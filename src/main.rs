mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    infrastructure::{
        mysql_event_repository::MysqlEventRepository, mysql_user_repository::MysqlUserRepository,
        sha256_password_digester::Sha256PasswordDigester,
    },
    presentation::handlers::{auth_handler::create_auth_router, event_handler::create_event_router},
    usecase::{
        event_enrollment_usecase::EventEnrollmentUsecase, login_usecase::LoginUsecase,
        register_user_usecase::RegisterUserUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;

    let user_repository = MysqlUserRepository::new(db.clone());
    let event_repository = MysqlEventRepository::new(db.clone());
    let digester = Sha256PasswordDigester::new();

    let register_service = RegisterUserUsecase::new(user_repository.clone(), digester.clone());
    let login_service = LoginUsecase::new(user_repository, digester);
    let enrollment_service = EventEnrollmentUsecase::new(event_repository);

    let app = Router::new()
        .merge(create_auth_router(register_service, login_service))
        .nest("/api", create_event_router(enrollment_service));

    tracing::info!(addr = %config.bind_addr, "listening");
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
