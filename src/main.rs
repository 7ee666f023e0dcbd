use atlaspin::{CityCatalog, MapRenderer, Store, UserCityRegistry};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Atlaspin — saved cities, great-circle distances, rendered world maps.
///
/// Examples:
///   atlaspin resolve London
///   atlaspin save 42 London
///   atlaspin list 42
///   atlaspin map London Paris Tokyo --out cities.png
///   atlaspin map --user 42 --out saved.png
///   atlaspin dist London Paris --out route.png
#[derive(Parser)]
#[command(name = "atlaspin", version, about, long_about = None)]
struct Cli {
    /// SQLite database path. Defaults to ~/.atlaspin/atlas.db.
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a city name to its coordinates (exact match).
    Resolve { city: String },

    /// Save a city to a user's list.
    Save { user: i64, city: String },

    /// List a user's saved cities, in insertion order.
    List { user: i64 },

    /// Render a world map marking the given cities, or a user's saved list.
    Map {
        /// City names to mark. Unresolvable names are skipped.
        cities: Vec<String>,

        /// Render this user's saved cities instead of the positional names.
        #[arg(long, conflicts_with = "cities")]
        user: Option<i64>,

        /// Output PNG path.
        #[arg(long, default_value = "map.png")]
        out: PathBuf,
    },

    /// Render a two-city map with the great-circle distance.
    Dist {
        city_a: String,
        city_b: String,

        /// Output PNG path.
        #[arg(long, default_value = "distance.png")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // ── Open the database ───────────────────────────────────────

    let db_path = match cli.db {
        Some(p) => p,
        None => default_db_path(),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = Store::open(&db_path).await?;
    let catalog = CityCatalog::new(store.clone());

    // ── Dispatch ────────────────────────────────────────────────

    match cli.command {
        Command::Resolve { city } => {
            match catalog.find(&city).await? {
                Some(found) => println!("{}", serde_json::to_string_pretty(&found)?),
                None => {
                    eprintln!("City '{}' is not in the catalog.", city);
                    std::process::exit(1);
                }
            }
        }

        Command::Save { user, city } => {
            let registry = UserCityRegistry::new(store, catalog);
            if registry.save(user, &city).await? {
                eprintln!("Saved '{}' for user {}.", city, user);
            } else {
                eprintln!("City '{}' is not in the catalog; nothing saved.", city);
                std::process::exit(1);
            }
        }

        Command::List { user } => {
            let registry = UserCityRegistry::new(store, catalog);
            let cities = registry.list_saved(user).await?;
            println!("{}", serde_json::to_string_pretty(&cities)?);
        }

        Command::Map { cities, user, out } => {
            let names = match user {
                Some(id) => {
                    let registry = UserCityRegistry::new(store.clone(), catalog.clone());
                    registry.list_saved(id).await?
                }
                None => cities,
            };
            let renderer = MapRenderer::new(catalog)?;
            let png = renderer.render_cities(&names).await?;
            std::fs::write(&out, png)?;
            eprintln!("Wrote {} ({} cities requested).", out.display(), names.len());
        }

        Command::Dist { city_a, city_b, out } => {
            let renderer = MapRenderer::new(catalog)?;
            match renderer.render_distance(&city_a, &city_b).await? {
                Some(map) => {
                    std::fs::write(&out, &map.png)?;
                    eprintln!("Wrote {}.", out.display());
                    println!(
                        "{}",
                        serde_json::json!({
                            "from": city_a,
                            "to": city_b,
                            "distance_km": map.distance_km,
                        })
                    );
                }
                None => {
                    eprintln!("One of '{}', '{}' is not in the catalog.", city_a, city_b);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".atlaspin")
        .join("atlas.db")
}
