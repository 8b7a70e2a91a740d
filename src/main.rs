use recipp::{ClientConfig, RecippClient, SortKey, SortOrder};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: recipp [sortKey] [asc|desc]\n       recipp star <id>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using Recipp API at {}", config.base_url);
    let client = RecippClient::with_config(&config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("star") => {
            let id = match args.get(1).map(|raw| raw.parse::<i64>()) {
                Some(Ok(id)) => id,
                _ => anyhow::bail!("{}", USAGE),
            };
            let response = client.star_recipe(id).await?;
            println!("{}", response.message);
            println!("Recipe {} now has {} stars.", id, response.star_count);
        }
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            println!(
                "sort keys: {}",
                SortKey::ALL.map(|key| key.as_str()).join(", ")
            );
        }
        sort_key => {
            let key: Option<SortKey> = sort_key.map(|name| name.parse::<SortKey>()).transpose()?;
            let order = args.get(1).map(|o| SortOrder::from(o.as_str())).unwrap_or_default();

            let mut recipes = client.get_all_recipes().await?;
            if let Some(key) = key {
                recipes.sort_by(key, order);
            }

            for recipe in &recipes {
                let title = recipe.title().unwrap_or("(untitled)");
                match key {
                    Some(key) => match key.extract(recipe) {
                        Some(value) => println!("{} - {}: {}", title, key, value),
                        None => println!("{} - {}: n/a", title, key),
                    },
                    None => println!("{}", title),
                }
            }
        }
    }

    Ok(())
}
