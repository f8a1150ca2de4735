use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command-line client for the catalog service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Manage products
    #[command(subcommand)]
    Products(ProductCommands),
    /// Manage orders
    #[command(subcommand)]
    Orders(OrderCommands),
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List all products ordered by id
    List,
    /// Show one product
    Get { id: i64 },
    /// Create a product
    Create {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        valor: Option<f64>,
        #[arg(long)]
        peso: Option<f64>,
        #[arg(long)]
        descripcion: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrderCommands {
    /// List all orders
    List,
    /// Show one order
    Get { id: i64 },
    /// Create an order from product ids
    Create { productos: Vec<i64> },
    /// Replace the products of an order
    Update { id: i64, productos: Vec<i64> },
    /// Delete an order
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{base}/health")),
        Commands::Products(ProductCommands::List) => client.get(format!("{base}/productos")),
        Commands::Products(ProductCommands::Get { id }) => client.get(format!("{base}/productos/{id}")),
        Commands::Products(ProductCommands::Create {
            id,
            nombre,
            valor,
            peso,
            descripcion,
        }) => {
            let mut body = Map::new();
            body.insert("id".into(), json!(id));
            let optional = [
                ("nombre", nombre.map(Value::from)),
                ("valor", valor.map(Value::from)),
                ("peso", peso.map(Value::from)),
                ("descripcion", descripcion.map(Value::from)),
            ];
            for (key, value) in optional {
                if let Some(value) = value {
                    body.insert(key.into(), value);
                }
            }
            client.post(format!("{base}/productos")).json(&body)
        }
        Commands::Orders(OrderCommands::List) => client.get(format!("{base}/pedidos")),
        Commands::Orders(OrderCommands::Get { id }) => client.get(format!("{base}/pedidos/{id}")),
        Commands::Orders(OrderCommands::Create { productos }) => client
            .post(format!("{base}/pedidos"))
            .json(&json!({ "productos": productos })),
        Commands::Orders(OrderCommands::Update { id, productos }) => client
            .put(format!("{base}/pedidos/{id}"))
            .json(&json!({ "productos": productos })),
        Commands::Orders(OrderCommands::Delete { id }) => client.delete(format!("{base}/pedidos/{id}")),
    };

    let res = request.send().await?;
    if !print_response(res).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// Print the body; returns whether the status was a success.
async fn print_response(res: reqwest::Response) -> Result<bool, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(false);
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(true)
}
