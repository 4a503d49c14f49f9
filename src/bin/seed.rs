use std::sync::Arc;

use chrono::{Duration, Utc};
use clap::Parser;
use fake::{faker::name::en::Name, Fake};
use sqlx::sqlite::SqlitePoolOptions;

use lacquer::{
    domain::{CreateServiceRequest, CreateServicesPackRequest, CreateServiceTypeRequest, ServiceCountEntry},
    repository::{
        SqliteServiceRepository, SqliteServiceTypeRepository, SqliteServicesPackRepository,
    },
    usecase::UseCaseContext,
};

#[derive(Parser)]
#[command(about = "Seed the database with sample salon data")]
struct Args {
    /// Database URL (falls back to DATABASE_URL, then a local file)
    #[arg(long)]
    database_url: Option<String>,

    /// Number of sample services to create
    #[arg(long, default_value_t = 12)]
    services: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://lacquer.db".to_string());

    println!("🌱 Starting database seeding...");

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let service_type_repo = Arc::new(SqliteServiceTypeRepository::new(db_pool.clone()));
    let service_repo = Arc::new(SqliteServiceRepository::new(
        db_pool.clone(),
        service_type_repo.clone(),
    ));
    let services_pack_repo = Arc::new(SqliteServicesPackRepository::new(db_pool.clone()));

    let context = UseCaseContext::new(service_type_repo, service_repo, services_pack_repo);

    println!("💅 Creating service types...");
    let mut type_ids = Vec::new();
    for name in ["Manicure", "Pedicure", "Gel Polish", "Nail Art"] {
        let created = context
            .create_service_type
            .execute(CreateServiceTypeRequest {
                name: name.to_string(),
            })
            .await?;
        println!("  ✅ {} ({})", created.name, created.id);
        type_ids.push(created.id);
    }

    println!("🗓  Creating {} services...", args.services);
    for i in 0..args.services {
        let customer: String = Name().fake();
        let service_type = type_ids[i % type_ids.len()];

        context
            .create_service
            .execute(CreateServiceRequest {
                customer,
                date: Utc::now() - Duration::days(i as i64 * 3),
                services_done_ids: vec![service_type],
                price_cents: 2500 + (i as i64 % 4) * 1000,
            })
            .await?;
    }

    println!("📦 Creating a sample pack...");
    let customer: String = Name().fake();
    let pack = context
        .create_services_pack
        .execute(CreateServicesPackRequest {
            customer,
            price_cents: 12000,
            start_date: Utc::now(),
            services_count: vec![
                ServiceCountEntry {
                    service_type_id: type_ids[0],
                    quantity: 4,
                },
                ServiceCountEntry {
                    service_type_id: type_ids[1],
                    quantity: 2,
                },
            ],
        })
        .await?;
    println!("  ✅ Pack {} for {}", pack.id, pack.customer);

    println!("🎉 Seeding complete!");
    Ok(())
}
