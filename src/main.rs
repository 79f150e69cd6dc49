mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod notification;
mod option_actor;
mod order_actor;
mod product_actor;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use std::path::PathBuf;
use clap::Parser;
use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, AppConfig, OrderSystem};
use crate::clients::ActorClient;
use crate::domain::{OptionCreate, OrderRequest, ProductCreate, UserCreate};

#[derive(Debug, Parser)]
#[command(name = "gift_order")]
#[command(about = "Places and lists gift orders against an in-memory actor system")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override kakao.login_enabled from the config
    #[arg(long)]
    kakao_login: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            AppConfig::from_file(path)?
        }
        None => AppConfig::default(),
    };
    if let Some(enabled) = args.kakao_login {
        config.kakao.login_enabled = enabled;
    }

    info!("Starting gift order system");
    let system = OrderSystem::new(&config);

    // Seed a user, a product and one of its options
    let span = tracing::info_span!("seeding");
    let (user_id, option_id) = async {
        let user_id = system.user_client
            .create_user(UserCreate::new("Alice", "alice@example.com", 10)).await?;
        let product_id = system.product_client
            .create_product(ProductCreate::new("Americano", 4500, "https://gift.example/americano.png")).await?;
        let option_id = system.option_client
            .create_option(OptionCreate::new(product_id, "Iced / Tall", 20)).await?;
        Ok::<_, Box<dyn std::error::Error>>((user_id, option_id))
    }
    .instrument(span)
    .await?;

    info!(user_id = %user_id, option_id = %option_id, "Seed data created");

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let request = OrderRequest::new(option_id.clone(), 3, "Happy birthday!");
        system.order_client.create_order(user_id.clone(), request).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(response) => info!(order_id = %response.id, created_at = %response.created_at, "Order processed successfully"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    for detail in system.order_client.list_orders(user_id).await? {
        info!(
            order_id = %detail.id,
            option = %detail.option.name,
            wish_quota = detail.user.wish_quota,
            wished = detail.user.wished_for(&detail.option.product_id),
            quantity = detail.quantity,
            message = %detail.message,
            "Order on record"
        );
    }

    for option in system.option_client.list().await? {
        let remaining = system.option_client.check_quantity(option.id.clone()).await?;
        info!(option_id = %option.id, remaining, "Stock after ordering");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
