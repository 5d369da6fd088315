//! CLI front end.
//!
//! Thin adapter: builds the HTTP clients from resolved config, drives the
//! screen state holders, and prints whatever `Resource` they end up holding.
//! No business logic lives here.

use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::error;

use crate::catalog::{Catalog, HttpCatalog, Volume};
use crate::core::config;
use crate::core::filters::{is_finished, is_in_progress, owned};
use crate::core::resource::Resource;
use crate::screens::{DetailScreen, LibraryScreen, LoginScreen, SearchScreen, StatsScreen};
use crate::store::{
    AuthSession, BookPatch, DocumentStore, HttpIdentity, HttpStore, Identity, LibraryBook, session,
};

#[derive(Parser)]
#[command(name = "shelf", about = "Reading tracker over a books catalog and a cloud library")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the books catalog by keyword
    Search { query: String },
    /// Show one catalog volume
    Show { volume_id: String },
    /// Create an account
    SignUp { email: String, password: String },
    /// Sign in with email and password
    SignIn { email: String, password: String },
    /// Forget the saved session
    SignOut,
    /// Add a catalog volume to your library
    Add { volume_id: String },
    /// List your library records
    List {
        /// Only records started but not finished
        #[arg(long)]
        reading: bool,
        /// Only finished records
        #[arg(long)]
        finished: bool,
    },
    /// Update notes, rating, or reading timestamps on a record
    Update {
        record_id: String,
        #[arg(long)]
        notes: Option<String>,
        /// 0..=5
        #[arg(long)]
        rating: Option<u8>,
        /// Mark as started reading now
        #[arg(long)]
        started: bool,
        /// Mark as finished reading now
        #[arg(long)]
        finished: bool,
    },
    /// Delete a library record
    Delete { record_id: String },
    /// Aggregate reading stats
    Stats,
}

struct Clients {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn Identity>,
}

fn build_clients() -> std::io::Result<Clients> {
    let config = config::load_config().map_err(|e| {
        error!("Config error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    let resolved = config::resolve(&config);
    Ok(Clients {
        catalog: Arc::new(HttpCatalog::new(
            Some(resolved.catalog_base_url.clone()),
            resolved.catalog_api_key.clone(),
        )),
        store: Arc::new(HttpStore::new(
            Some(resolved.store_base_url.clone()),
            resolved.store_api_key.clone(),
        )),
        identity: Arc::new(HttpIdentity::new(Some(resolved.store_base_url))),
    })
}

fn current_session() -> std::io::Result<Option<AuthSession>> {
    let loaded = session::load_session()?;
    if loaded.is_none() {
        println!("Not signed in. Run `shelf sign-in <email> <password>` first.");
    }
    Ok(loaded)
}

fn status_line(book: &LibraryBook) -> &'static str {
    if is_finished(book) {
        "finished"
    } else if is_in_progress(book) {
        "reading"
    } else {
        "to read"
    }
}

fn print_volume_row(volume: &Volume) {
    println!("{:<14} {}", volume.id, volume.volume_info.title);
}

fn print_record_row(book: &LibraryBook) {
    println!(
        "{:<38} {:<10} {}",
        book.id.as_deref().unwrap_or("-"),
        status_line(book),
        book.title
    );
}

fn report_mutation(mutation: &Resource<()>, verb: &str) {
    match mutation {
        Resource::Success(()) => println!("{} OK", verb),
        Resource::Error(message) => eprintln!("{} failed: {}", verb, message),
        Resource::Loading(_) => {}
    }
}

pub async fn run(cli: Cli) -> std::io::Result<()> {
    let clients = build_clients()?;

    match cli.command {
        Command::Search { query } => {
            let mut screen = SearchScreen::new(clients.catalog);
            screen.search(&query).await;
            match &screen.results {
                Resource::Success(volumes) if volumes.is_empty() => println!("No matches."),
                Resource::Success(volumes) => volumes.iter().for_each(print_volume_row),
                Resource::Error(message) => eprintln!("Search failed: {}", message),
                Resource::Loading(_) => println!("Nothing searched yet."),
            }
        }

        Command::Show { volume_id } => {
            let mut screen = DetailScreen::new(clients.catalog);
            screen.fetch(&volume_id).await;
            match &screen.book {
                Resource::Success(volume) => {
                    let info = &volume.volume_info;
                    println!("{}", info.title);
                    if let Some(ref subtitle) = info.subtitle {
                        println!("{}", subtitle);
                    }
                    if !info.authors.is_empty() {
                        println!("by {}", info.author_line());
                    }
                    if let Some(ref date) = info.published_date {
                        println!("Published: {}", date);
                    }
                    if !info.categories.is_empty() {
                        println!("Categories: {}", info.categories.join(", "));
                    }
                    if let Some(pages) = info.page_count {
                        println!("Pages: {}", pages);
                    }
                    if let Some(ref description) = info.description {
                        println!("\n{}", description);
                    }
                }
                Resource::Error(message) => eprintln!("Lookup failed: {}", message),
                Resource::Loading(_) => {}
            }
        }

        Command::SignUp { email, password } => {
            let mut screen = LoginScreen::new(clients.identity, clients.store);
            let mut signed_in = None;
            screen
                .sign_up(&email, &password, |s| signed_in = Some(s.clone()))
                .await;
            match signed_in {
                Some(s) => {
                    session::save_session(&s)?;
                    println!("Welcome, {}!", s.display_name());
                }
                None => {
                    if let Some(message) = screen.session.error() {
                        eprintln!("Sign-up failed: {}", message);
                    }
                }
            }
        }

        Command::SignIn { email, password } => {
            let mut screen = LoginScreen::new(clients.identity, clients.store);
            let mut signed_in = None;
            screen
                .sign_in(&email, &password, |s| signed_in = Some(s.clone()))
                .await;
            match signed_in {
                Some(s) => {
                    session::save_session(&s)?;
                    println!("Signed in as {}.", s.display_name());
                }
                None => {
                    if let Some(message) = screen.session.error() {
                        eprintln!("Sign-in failed: {}", message);
                    }
                }
            }
        }

        Command::SignOut => {
            session::clear_session()?;
            println!("Signed out.");
        }

        Command::Add { volume_id } => {
            let Some(user) = current_session()? else {
                return Ok(());
            };
            let mut detail = DetailScreen::new(clients.catalog);
            detail.fetch(&volume_id).await;
            match &detail.book {
                Resource::Success(volume) => {
                    let mut library = LibraryScreen::new(clients.store);
                    library.add(volume, &user.user_id).await;
                    report_mutation(&library.mutation, "Add");
                }
                Resource::Error(message) => eprintln!("Lookup failed: {}", message),
                Resource::Loading(_) => {}
            }
        }

        Command::List { reading, finished } => {
            let Some(user) = current_session()? else {
                return Ok(());
            };
            let mut library = LibraryScreen::new(clients.store);
            library.refresh().await;
            match &library.records {
                Resource::Success(records) => {
                    let mine = owned(records, &user.user_id);
                    let rows: Vec<_> = mine
                        .into_iter()
                        .filter(|b| !reading || is_in_progress(b))
                        .filter(|b| !finished || is_finished(b))
                        .collect();
                    if rows.is_empty() {
                        println!("No records.");
                    } else {
                        rows.into_iter().for_each(print_record_row);
                    }
                }
                Resource::Error(message) => eprintln!("Listing failed: {}", message),
                Resource::Loading(_) => {}
            }
        }

        Command::Update {
            record_id,
            notes,
            rating,
            started,
            finished,
        } => {
            if current_session()?.is_none() {
                return Ok(());
            }
            let mut patch = BookPatch::new();
            if let Some(notes) = notes {
                patch = patch.notes(notes);
            }
            if let Some(rating) = rating {
                patch = patch.rating(rating);
            }
            if started {
                patch = patch.started_at(Utc::now());
            }
            if finished {
                patch = patch.finished_at(Utc::now());
            }
            if patch.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let mut library = LibraryScreen::new(clients.store);
            library.refresh().await;
            library.update_record(&record_id, &patch).await;
            report_mutation(&library.mutation, "Update");
        }

        Command::Delete { record_id } => {
            if current_session()?.is_none() {
                return Ok(());
            }
            let mut library = LibraryScreen::new(clients.store);
            library.delete_record(&record_id).await;
            report_mutation(&library.mutation, "Delete");
        }

        Command::Stats => {
            let Some(user) = current_session()? else {
                return Ok(());
            };
            let mut stats = StatsScreen::new(clients.store);
            stats.refresh(&user.user_id).await;
            match &stats.records {
                Resource::Error(message) => eprintln!("Stats failed: {}", message),
                _ => {
                    let summary = stats.summary(&user);
                    println!("Hi, {}", summary.greeting);
                    println!("You are reading: {} books", summary.reading);
                    println!("You have read: {} books", summary.finished);
                }
            }
        }
    }

    Ok(())
}
