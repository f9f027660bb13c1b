/// Roster Server - user records over HTTP
use clap::{Parser, Subcommand};
use roster_core::{NewUser, UserId};
use roster_server::{config::ServerConfig, create_router, services::UserService, state::AppState};
use roster_storage::LocalStorageContext;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user records server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all users
    ListUsers,
    /// Delete a user by id
    DeleteUser {
        /// User id (UUID)
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser { name, email } => {
            add_user(&config, name, email).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
        Commands::DeleteUser { id } => {
            delete_user(&config, &id).await?;
        }
    }

    Ok(())
}

/// Open the database, apply migrations and wrap it in the user service
async fn open_user_service(config: &ServerConfig) -> anyhow::Result<UserService> {
    let pool = roster_storage::create_pool(&config.storage.database_url).await?;
    roster_storage::run_migrations(&pool).await?;

    Ok(UserService::new(Arc::new(LocalStorageContext::new(pool))))
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let users = open_user_service(config).await?;
    tracing::info!("Database connected");

    let app = create_router(AppState::new(Arc::new(users)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn add_user(
    config: &ServerConfig,
    name: Option<String>,
    email: Option<String>,
) -> anyhow::Result<()> {
    let users = open_user_service(config).await?;
    let user = users.create_user(NewUser::new(name, email)).await?;

    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let users = open_user_service(config).await?;

    println!("Users:");
    for user in users.find_all().await? {
        println!(
            "  {} - {} <{}> (created {})",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.email.as_deref().unwrap_or("-"),
            user.created_at.to_rfc3339(),
        );
    }

    Ok(())
}

async fn delete_user(config: &ServerConfig, id: &str) -> anyhow::Result<()> {
    let id = UserId::parse(id)?;
    let users = open_user_service(config).await?;
    users.delete(&id).await?;

    println!("Deleted {}", id);
    Ok(())
}
