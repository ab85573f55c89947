//! Inventory console client
//!
//! Talks to the inventory API with a bearer token persisted in
//! `~/.dynasty/session.json`. A rejected credential clears the session
//! and asks the user to log in again.

mod api;
mod session;
mod view;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use api::{ApiClient, ClientError, ProductFields};
use view::{CategoryFilter, ListScreen, SortColumn, SortDirection, SortState};

#[derive(Parser)]
#[command(name = "dynasty", about = "Inventory management console client")]
struct Cli {
    /// API base URL
    #[arg(long, default_value = "http://localhost:5000", env = "DYNASTY_API_URL")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register { username: String, password: String },
    /// Log in and save the session
    Login { username: String, password: String },
    /// Forget the saved session
    Logout,
    /// Show the logged-in identity
    Profile,
    /// List products
    List {
        /// Case-insensitive substring match over name and category
        #[arg(long, default_value = "")]
        search: String,
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
        /// Sort column
        #[arg(long, value_enum)]
        sort: Option<SortBy>,
        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,
    },
    /// Add a product
    Add {
        name: String,
        category: String,
        quantity: i64,
        price: Decimal,
    },
    /// Overwrite a product's fields
    Update {
        id: i64,
        name: String,
        category: String,
        quantity: i64,
        price: Decimal,
    },
    /// Delete a product
    Delete { id: i64 },
    /// Delete every product
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
    /// List registered categories
    Categories,
    /// Register a new category
    AddCategory { name: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortBy {
    Name,
    Category,
    Quantity,
    Price,
}

impl From<SortBy> for SortColumn {
    fn from(sort: SortBy) -> Self {
        match sort {
            SortBy::Name => SortColumn::Name,
            SortBy::Category => SortColumn::Category,
            SortBy::Quantity => SortColumn::Quantity,
            SortBy::Price => SortColumn::Price,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let saved = session::load();
    let client = ApiClient::new(&cli.api_url, saved.as_ref().map(|s| s.token.clone()));

    let result = run(&cli.command, &client).await;

    match result {
        Ok(()) => Ok(()),
        Err(ClientError::AuthRequired(message)) => {
            // The token was missing, invalid, or expired. Drop the session
            // so the next startup is cleanly unauthenticated.
            session::clear().context("failed to clear session")?;
            eprintln!("{message}");
            eprintln!("Session cleared. Please log in again with `dynasty login`.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

async fn run(command: &Command, client: &ApiClient) -> Result<(), ClientError> {
    match command {
        Command::Register { username, password } => {
            client.register(username, password).await?;
            println!("User registered. Log in with `dynasty login {username} <password>`.");
        }

        Command::Login { username, password } => {
            let login = client.login(username, password).await?;
            session::save(&session::Session {
                token: login.token,
                username: login.username.clone(),
            })
            .map_err(|e| ClientError::Api {
                status: 0,
                message: format!("failed to save session: {e}"),
            })?;
            println!("Logged in as {}.", login.username);
        }

        Command::Logout => {
            session::clear().map_err(|e| ClientError::Api {
                status: 0,
                message: format!("failed to clear session: {e}"),
            })?;
            println!("Logged out.");
        }

        Command::Profile => {
            let user = client.profile().await?;
            println!("{} (id {})", user.username, user.user_id);
        }

        Command::List {
            search,
            category,
            sort,
            desc,
        } => {
            let mut screen = ListScreen::authenticated();
            screen.loaded(client.list_products().await?);
            screen.search = search.clone();
            screen.filter = match category {
                Some(name) => CategoryFilter::Named(name.clone()),
                None => CategoryFilter::All,
            };
            if let Some(sort) = sort {
                let direction = if *desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                screen.sort = SortState {
                    active: Some(((*sort).into(), direction)),
                };
            }

            let rows = screen.visible();
            if rows.is_empty() {
                println!("No products.");
            } else {
                println!("{:>5}  {:<30} {:<20} {:>8} {:>10}", "ID", "NAME", "CATEGORY", "QTY", "PRICE");
                for p in rows {
                    println!(
                        "{:>5}  {:<30} {:<20} {:>8} {:>10}",
                        p.id, p.name, p.category, p.quantity, p.price
                    );
                }
            }
        }

        Command::Add {
            name,
            category,
            quantity,
            price,
        } => {
            let created = client
                .create_product(&ProductFields {
                    name: name.clone(),
                    category: category.clone(),
                    quantity: *quantity,
                    price: *price,
                })
                .await?;
            println!("Product added with id {}.", created.product_id);
        }

        Command::Update {
            id,
            name,
            category,
            quantity,
            price,
        } => {
            client
                .update_product(
                    *id,
                    &ProductFields {
                        name: name.clone(),
                        category: category.clone(),
                        quantity: *quantity,
                        price: *price,
                    },
                )
                .await?;
            println!("Product {id} updated.");
        }

        Command::Delete { id } => {
            let mut screen = ListScreen::authenticated();
            screen.loaded(client.list_products().await?);

            // Remove the row locally first, then reconcile with a refetch
            screen.remove_locally(*id);
            client.delete_product(*id).await?;
            screen.loaded(client.list_products().await?);

            println!("Product {id} deleted. {} remaining.", screen.products.len());
        }

        Command::Reset { yes } => {
            if !*yes {
                return Err(ClientError::Api {
                    status: 0,
                    message: "This deletes every product. Re-run with --yes to confirm.".into(),
                });
            }
            client.reset_inventory().await?;
            println!("All products deleted.");
        }

        Command::Categories => {
            let names = client.list_categories().await?;
            if names.is_empty() {
                println!("No categories.");
            } else {
                for option in view::category_options(&names).into_iter().skip(1) {
                    println!("{}", option.label);
                }
            }
        }

        Command::AddCategory { name } => {
            let created = client.add_category(name).await?;
            println!(
                "Category \"{}\" added with id {}.",
                created.category_name, created.category_id
            );
        }
    }

    Ok(())
}
