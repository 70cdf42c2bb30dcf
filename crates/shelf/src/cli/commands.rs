//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize `AppContext` with the API and output format
//! 3. **API Dispatch**: Call the appropriate `ShelfApi` method
//! 4. **Output Formatting**: Render `CmdResult` as styled text or JSON
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and
//!    exits with status 1
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` and sets up logging
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_messages, render_book_info, render_book_list, render_config, render_traits,
    render_values,
};
use super::setup::{
    BookCommands, BookUpdateArgs, Cli, Commands, OutputFormat, SearchArgs, TraitCommands,
    ValueCommands,
};
use anyhow::{Context, Result};
use clap::Parser;
use shelfapp::api::ShelfApi;
use shelfapp::commands::config::ConfigAction;
use shelfapp::commands::{BookInfo, CmdResult};
use shelfapp::filter::FilterSpec;
use shelfapp::init::initialize;
use shelfapp::model::{BookEdit, BookId, CategoricalValue, Category, TraitId, ValueId};
use shelfapp::store::fs_backend::FsBackend;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, checked before `RUST_LOG`.
const LOG_ENV: &str = "SHELF_LOG";

struct AppContext {
    api: ShelfApi<FsBackend>,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search(args)) => handle_search(&ctx, &args),
        Some(Commands::Info { id }) => handle_info(&ctx, id),
        Some(Commands::Series { id }) => handle_series(&ctx, id),
        Some(Commands::Book(cmd)) => match cmd {
            BookCommands::Add {
                title,
                directory,
                pages,
            } => handle_book_add(&mut ctx, &title, directory.as_deref(), pages),
            BookCommands::Update(args) => handle_book_update(&mut ctx, args),
            BookCommands::Delete { id } => {
                let result = ctx.api.delete_book(BookId(id))?;
                emit(&ctx, &result, String::new())
            }
        },
        Some(Commands::Value(cmd)) => handle_value(&mut ctx, cmd),
        Some(Commands::Trait(cmd)) => handle_trait(&mut ctx, cmd),
        Some(Commands::Config { key }) => handle_config(&ctx, key),
        None => handle_search(&ctx, &SearchArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data.clone())?;
    init_tracing(cli.verbose, &ctx.config.log_level);
    debug!(data_dir = %ctx.data_dir.display(), library = %ctx.api.location().display(), "context ready");

    Ok(AppContext {
        api: ctx.api,
        output: cli.output,
    })
}

/// `-v` forces debug; otherwise `SHELF_LOG`, then `RUST_LOG`, then the
/// configured level. Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool, configured: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(configured))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Prints `body` and the result's messages, or the whole result as JSON.
fn emit(ctx: &AppContext, result: &CmdResult, body: String) -> Result<()> {
    match ctx.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            print!("{}", body);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn read_spec(path: &Path) -> Result<FilterSpec> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read filter spec {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid filter spec {}", path.display()))
}

fn handle_search(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let base = match &args.spec {
        Some(path) => read_spec(path)?,
        None => FilterSpec::new(),
    };
    let spec = args.apply_to(base);
    debug!(?spec, "search");

    let result = ctx.api.search(Some(&spec), args.sort)?;
    emit(ctx, &result, render_book_list(&result.listed_books))
}

fn handle_info(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.book_info(BookId(id))?;
    let body = result.info.as_ref().map(render_book_info).unwrap_or_default();
    emit(ctx, &result, body)
}

fn handle_series(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.series_of(BookId(id))?;
    emit(ctx, &result, render_book_list(&result.listed_books))
}

fn handle_book_add(
    ctx: &mut AppContext,
    title: &str,
    directory: Option<&str>,
    pages: u32,
) -> Result<()> {
    let result = ctx
        .api
        .add_book(title, directory.unwrap_or(title), pages)?;
    emit(ctx, &result, String::new())
}

fn handle_book_update(ctx: &mut AppContext, args: BookUpdateArgs) -> Result<()> {
    let id = BookId(args.id);
    let current = ctx
        .api
        .book_info(id)?
        .info
        .with_context(|| format!("book {} not found", id))?;

    let edit = apply_update(edit_from_info(&current), args);
    let result = ctx.api.update_book(id, edit)?;
    emit(ctx, &result, String::new())
}

/// The edit that would leave the book exactly as it is.
fn edit_from_info(info: &BookInfo) -> BookEdit {
    BookEdit {
        title: info.book.title.clone(),
        alt_title: info.book.alt_title.clone(),
        series: info.book.series,
        series_order: info.book.series_order,
        rating: info.book.rating,
        notes: info.book.notes.clone(),
        artists: value_ids(&info.artists),
        genres: value_ids(&info.genres),
        tags: value_ids(&info.tags),
        characters: info
            .characters
            .iter()
            .map(|c| c.traits.iter().map(|t| t.id).collect())
            .collect(),
    }
}

fn value_ids(values: &[CategoricalValue]) -> Vec<ValueId> {
    values.iter().map(|v| v.id).collect()
}

fn apply_update(mut edit: BookEdit, args: BookUpdateArgs) -> BookEdit {
    if let Some(title) = args.title {
        edit.title = title;
    }
    if let Some(alt) = args.alt_title {
        edit.alt_title = Some(alt).filter(|a| !a.trim().is_empty());
    }
    if args.no_series {
        edit.series = None;
        edit.series_order = None;
    } else if let Some(series) = args.series {
        edit.series = Some(ValueId(series));
    }
    if args.series_order.is_some() {
        edit.series_order = args.series_order;
    }
    if args.unrated {
        edit.rating = None;
    } else if args.rating.is_some() {
        edit.rating = args.rating;
    }
    if let Some(notes) = args.notes {
        edit.notes = Some(notes).filter(|n| !n.trim().is_empty());
    }

    let to_values = |ids: Vec<u64>| -> Vec<ValueId> { ids.into_iter().map(ValueId).collect() };
    if let Some(ids) = args.artists {
        edit.artists = to_values(ids);
    }
    if let Some(ids) = args.genres {
        edit.genres = to_values(ids);
    }
    if let Some(ids) = args.tags {
        edit.tags = to_values(ids);
    }
    for category in args.clear {
        match category {
            Category::Artists => edit.artists.clear(),
            Category::Genres => edit.genres.clear(),
            Category::Tags => edit.tags.clear(),
            Category::Series => {
                edit.series = None;
                edit.series_order = None;
            }
        }
    }

    if args.no_characters {
        edit.characters.clear();
    } else if !args.characters.is_empty() {
        edit.characters = args.characters.into_iter().map(|list| list.0).collect();
    }
    edit
}

fn handle_value(ctx: &mut AppContext, cmd: ValueCommands) -> Result<()> {
    let result = match cmd {
        ValueCommands::List { category } => {
            let result = ctx.api.list_values(category)?;
            let body = render_values(&result.values);
            return emit(ctx, &result, body);
        }
        ValueCommands::Add { category, name } => ctx.api.create_value(category, &name)?,
        ValueCommands::Rename { category, id, name } => {
            ctx.api.rename_value(category, ValueId(id), &name)?
        }
        ValueCommands::Delete { category, id } => ctx.api.delete_value(category, ValueId(id))?,
    };
    emit(ctx, &result, String::new())
}

fn handle_trait(ctx: &mut AppContext, cmd: TraitCommands) -> Result<()> {
    let result = match cmd {
        TraitCommands::List => {
            let result = ctx.api.list_traits()?;
            let body = render_traits(&result.traits);
            return emit(ctx, &result, body);
        }
        TraitCommands::Add { name, description } => ctx.api.create_trait(&name, description)?,
        TraitCommands::Rename { id, name } => ctx.api.rename_trait(TraitId(id), &name)?,
        TraitCommands::Delete { id } => ctx.api.delete_trait(TraitId(id))?,
    };
    emit(ctx, &result, String::new())
}

fn handle_config(ctx: &AppContext, key: Option<String>) -> Result<()> {
    let action = match key {
        Some(k) => ConfigAction::ShowKey(k),
        None => ConfigAction::ShowAll,
    };
    let result = ctx.api.show_config(action)?;
    let body = result.config.as_ref().map(render_config).unwrap_or_default();
    emit(ctx, &result, body)
}
