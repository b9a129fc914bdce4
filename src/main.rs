use carta::utils::{logger, validation::Validate};
use carta::{
    AppContext, CartaError, CatalogService, CliConfig, ErrorKind, InMemoryCatalog, Product,
    Settings, UnwiredRecommendations, UnwiredReservations,
};
use clap::Parser;
use std::sync::Arc;

fn exit_code(e: &CartaError) -> i32 {
    match e.kind() {
        ErrorKind::Infrastructure => 1,
        ErrorKind::InvalidArgument | ErrorKind::NotFound => 2,
        ErrorKind::Config | ErrorKind::NotConnected | ErrorKind::NotImplemented => 3,
    }
}

fn fail(e: CartaError) -> ! {
    tracing::error!("❌ {} (kind: {:?})", e, e.kind());
    eprintln!("❌ {}", e);
    std::process::exit(exit_code(&e));
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("(no products)");
        return;
    }
    for p in products {
        match &p.description {
            Some(d) => println!("{}  [{}] {} - {}", p.id, p.category, p.name, d),
            None => println!("{}  [{}] {}", p.id, p.category, p.name),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting carta CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    // Settings file wins over the bare --catalog-path when both are given.
    let settings = match &config.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => {
                s.log_summary();
                Some(s)
            }
            Err(e) => fail(e),
        },
        None => None,
    };

    let catalog_path = settings
        .as_ref()
        .map(|s| s.catalog.source.clone())
        .unwrap_or_else(|| config.catalog_path.clone());

    let catalog = match InMemoryCatalog::from_json_file(&catalog_path) {
        Ok(c) => c,
        Err(e) => fail(e),
    };
    tracing::info!("📖 Catalog loaded: {} products", catalog.len());

    let context = AppContext::new(
        Arc::new(catalog),
        Arc::new(UnwiredRecommendations),
        Arc::new(UnwiredReservations),
    );

    let recommendation = settings.as_ref().and_then(|s| s.recommendation_config());
    let reservation = settings.as_ref().and_then(|s| s.reservation_config());
    if let Err(e) = context
        .verify_wiring(recommendation.as_ref(), reservation.as_ref())
        .await
    {
        fail(e);
    }
    tracing::info!("✅ Wiring verified");

    let service = CatalogService::new(Arc::clone(&context.catalog));

    if let Some(id) = &config.id {
        match service.lookup(id).await {
            Ok(Some(product)) => print_products(&[product]),
            Ok(None) => println!("Product not found: {}", id),
            Err(e) => fail(e),
        }
    } else if let Some(category) = &config.category {
        match service.browse(category).await {
            Ok(products) => print_products(&products),
            Err(e) => fail(e),
        }
    } else if let Some(query) = &config.search {
        match service.search(query).await {
            Ok(products) => print_products(&products),
            Err(e) => fail(e),
        }
    } else {
        // No query: show a per-category summary of the catalog.
        for category in carta::Category::ALL {
            match service.browse_category(category).await {
                Ok(products) => println!("{:<10} {}", category.to_string(), products.len()),
                Err(e) => fail(e),
            }
        }
    }

    Ok(())
}
