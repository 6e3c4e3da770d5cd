//! FoodApp CLI
//!
//! Command-line access to the configured product store:
//! - List, add, update and delete menu products
//! - Upload images
//! - Save the restaurant profile
//! - Generate a config file
//!
//! Works against the product API when `[api] base_url` (or `FOODAPP_API_URL`)
//! is set, and against the file-backed mock store otherwise.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use foodapp::catalog::{
    open_store, CatalogError, Category, ImageUpload, Product, ProductDraft, ProductForm,
    ProductId, ProductStore, RestaurantProfile,
};
use foodapp::config::{generate_default_config, Config, ConfigOrigin};
use foodapp::logging::init_tracing;

#[derive(Parser)]
#[command(name = "foodapp-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage a FoodApp restaurant menu from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Print store logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage menu products
    Products {
        #[command(subcommand)]
        action: ProductCommand,
    },

    /// Upload an image and print its reference
    Upload {
        /// Image file
        path: PathBuf,
    },

    /// Manage the restaurant profile
    Restaurant {
        #[command(subcommand)]
        action: RestaurantCommand,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// List all products
    List,

    /// Add a product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Update a product; omitted fields keep their current value
    Update {
        /// Product id
        id: ProductId,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: ProductId,
    },
}

#[derive(Args)]
pub struct ProductFields {
    /// Price, e.g. 45.90 (invalid input counts as 0)
    #[arg(short, long)]
    price: Option<String>,
    /// Description
    #[arg(short, long)]
    description: Option<String>,
    /// Preparation time label, e.g. "30 min"
    #[arg(long)]
    prep_time: Option<String>,
    /// Servings label, e.g. "Serve 2"
    #[arg(long)]
    servings: Option<String>,
    /// Category (main, drinks, desserts or the full label)
    #[arg(long)]
    category: Option<String>,
    /// Image URL, or a local file to upload first
    #[arg(long)]
    image: Option<String>,
}

#[derive(Subcommand)]
pub enum RestaurantCommand {
    /// Save the restaurant profile; omitted fields use the defaults
    Save {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        opening_hours: Option<String>,
        #[arg(long)]
        delivery_time: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (config, origin) = match &cli.config {
        Some(path) => (
            Config::load_with_env(path)?,
            ConfigOrigin {
                path: Some(path.clone()),
                ..ConfigOrigin::default()
            },
        ),
        None => Config::load_default(),
    };

    if cli.verbose {
        init_tracing(&config.logging);
        origin.log();
    }

    let store = open_store(&config.backend())?;
    let json = cli.format == "json";

    let result = match cli.command {
        Commands::Products { action } => run_products(&store, action, json).await,
        Commands::Upload { path } => upload(&store, &path).await.map(|url| println!("{}", url)),
        Commands::Restaurant {
            action:
                RestaurantCommand::Save {
                    name,
                    category,
                    opening_hours,
                    delivery_time,
                    description,
                },
        } => {
            let mut profile = RestaurantProfile::default();
            if let Some(v) = name {
                profile.restaurant_name = v;
            }
            if let Some(v) = category {
                profile.category = v;
            }
            if let Some(v) = opening_hours {
                profile.opening_hours = v;
            }
            if let Some(v) = delivery_time {
                profile.delivery_time = v;
            }
            if let Some(v) = description {
                profile.description = v;
            }

            store.save_restaurant(&profile).await.map(|reply| {
                if json {
                    println!("{}", reply);
                } else {
                    println!("Saved restaurant profile for {}", profile.restaurant_name);
                }
            })
        }
        Commands::Config { .. } => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_products(
    store: &Arc<dyn ProductStore>,
    action: ProductCommand,
    json: bool,
) -> Result<(), CatalogError> {
    match action {
        ProductCommand::List => {
            let products = store.list().await?;
            if json {
                print_json(&products);
            } else {
                print_table(&products);
            }
        }

        ProductCommand::Add { name, fields } => {
            let form = apply_fields(store, ProductForm::new(name, ""), fields).await?;
            let saved = store.save(ProductDraft::New(form)).await?;
            print_saved("Added", &saved, json);
        }

        ProductCommand::Update { id, name, fields } => {
            let current = store
                .list()
                .await?
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| CatalogError::Save(format!("product {} not found", id)))?;

            let mut form = ProductForm::from_product(&current);
            if let Some(name) = name {
                form.name = name;
            }
            let form = apply_fields(store, form, fields).await?;
            let saved = store.save(ProductDraft::Existing { id, form }).await?;
            print_saved("Updated", &saved, json);
        }

        ProductCommand::Delete { id } => {
            store.delete(id).await?;
            println!("Deleted product {}", id);
        }
    }
    Ok(())
}

/// Overlay the given flags on a form, uploading a local image file first
async fn apply_fields(
    store: &Arc<dyn ProductStore>,
    mut form: ProductForm,
    fields: ProductFields,
) -> Result<ProductForm, CatalogError> {
    if let Some(price) = fields.price {
        form.price = price.into();
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(prep_time) = fields.prep_time {
        form.prep_time = prep_time;
    }
    if let Some(servings) = fields.servings {
        form.servings = servings;
    }
    if let Some(category) = fields.category {
        form.category = Category::parse(&category).ok_or_else(|| {
            CatalogError::Save(format!(
                "unknown category '{}' (use main, drinks or desserts)",
                category
            ))
        })?;
    }
    if let Some(image) = fields.image {
        let path = PathBuf::from(&image);
        form.image = Some(if path.is_file() {
            upload(store, &path).await?
        } else {
            image
        });
    }
    Ok(form)
}

async fn upload(store: &Arc<dyn ProductStore>, path: &Path) -> Result<String, CatalogError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CatalogError::Upload(format!("cannot read {:?}: {}", path, e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());

    store.upload_image(ImageUpload::new(file_name, bytes)).await
}

fn print_saved(verb: &str, product: &Product, json: bool) {
    if json {
        print_json(product);
    } else {
        println!(
            "{} #{}: {} ({})",
            verb,
            product.id,
            product.name,
            product.display_price()
        );
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Cannot encode output: {}", e),
    }
}

fn print_table(products: &[Product]) {
    if products.is_empty() {
        println!("No products yet.");
        println!();
        println!("Add your first product with:");
        println!("  foodapp-cli products add --name \"Prato do Dia\" --price 32.90");
        return;
    }

    println!(
        "{:<5} {:<28} {:<12} {:<18} {:<10} {}",
        "ID", "Name", "Price", "Category", "Prep", "Servings"
    );
    println!("{}", "-".repeat(86));

    for product in products {
        println!(
            "{:<5} {:<28} {:<12} {:<18} {:<10} {}",
            product.id,
            truncate(&product.name, 28),
            product.display_price(),
            product.category.label(),
            product.prep_time,
            product.servings
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
