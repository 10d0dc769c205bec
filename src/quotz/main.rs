use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use quotz::api::{CmdMessage, ConfigAction, MessageLevel, QuotzApi, StatusSnapshot};
use quotz::config::QuotzConfig;
use quotz::error::Result;
use quotz::model::Quote;
use quotz::paths;
use quotz::store::fs::FileStore;
use quotz::sync::SyncSchedule;
use std::path::PathBuf;
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only). Stdout
/// stays reserved for command output.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    api: QuotzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text, category }) => handle_add(&mut ctx, text, category),
        Some(Commands::Show { category }) => handle_show(&mut ctx, category),
        Some(Commands::List { category }) => handle_list(&ctx, category),
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Filter { category }) => handle_filter(&mut ctx, category),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { file }) => handle_export(&ctx, file),
        Some(Commands::Sync { watch }) => handle_sync(&mut ctx, watch),
        Some(Commands::Status) => handle_status(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_show(&mut ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = paths::data_dir()?;
    let config = QuotzConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = QuotzApi::open(store, config, data_dir)?;

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, text: String, category: String) -> Result<()> {
    let result = ctx.api.add_quote(&text, &category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.show_quote(category.as_deref())?;
    if let Some(quote) = result.affected_quotes.first() {
        print_quote(quote);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.list_quotes(category.as_deref())?;
    print_quotes(&result.listed_quotes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    if result.categories.is_empty() {
        println!("No categories yet.");
    }
    for category in &result.categories {
        println!("    {}", category);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let result = ctx.api.filter(category.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.import_quotes(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_quotes(file.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sync(ctx: &mut AppContext, watch: bool) -> Result<()> {
    if !watch {
        let result = ctx.api.sync()?;
        print_messages(&result.messages);
        return Ok(());
    }

    let interval = ctx.api.config_snapshot().sync_interval();
    println!(
        "{}",
        format!(
            "Syncing every {}s against {} (Ctrl-C to stop).",
            interval.as_secs(),
            ctx.api.config_snapshot().feed_url
        )
        .dimmed()
    );

    // First tick fires immediately; a failed cycle logs and waits for the
    // next one instead of aborting the watch.
    let mut schedule = SyncSchedule::new(interval);
    loop {
        let now = Instant::now();
        if schedule.is_due(now) {
            schedule.begin(now);
            match ctx.api.sync() {
                Ok(result) => print_messages(&result.messages),
                Err(e) => eprintln!("{} {}", "Sync failed:".red(), e),
            }
            schedule.complete(Instant::now());
        } else if let Some(deadline) = schedule.next_deadline() {
            std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(status) = &result.status {
        print_status(status);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("feed-url      = {}", config.feed_url);
        println!("sync-interval = {}", config.sync_interval_secs);
        println!("fetch-timeout = {}", config.fetch_timeout_secs);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_quote(quote: &Quote) {
    println!("{}", format!("\u{201c}{}\u{201d}", quote.text).bold());
    println!("    {}", format!("\u{2014} {}", quote.category).yellow());
}

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 16;

fn print_quotes(quotes: &[Quote]) {
    if quotes.is_empty() {
        println!("No quotes found.");
        return;
    }

    for (i, quote) in quotes.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let fixed_width = 4 + idx_str.width() + 2 + CATEGORY_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let text_display = truncate_to_width(&quote.text, available);
        let padding = available.saturating_sub(text_display.width());

        println!(
            "    {}{}{}  {}",
            idx_str,
            text_display,
            " ".repeat(padding),
            format!("{:>width$}", quote.category, width = CATEGORY_WIDTH).dimmed()
        );
    }
}

fn print_status(status: &StatusSnapshot) {
    println!("{} {}", "quotz".bold(), version_string());
    println!("  Store:      {}", status.data_dir.display());
    println!("  Quotes:     {}", status.quote_count);
    println!("  Categories: {}", status.category_count);
    println!("  Filter:     {}", status.filter);
    println!("  Feed:       {}", status.feed_url);
    println!("  Last sync:  {}", format_last_sync(status.last_synced_at));
}

fn version_string() -> String {
    let hash = env!("GIT_HASH");
    let date = env!("GIT_COMMIT_DATE");
    if hash.is_empty() {
        format!("v{}", env!("CARGO_PKG_VERSION"))
    } else if date.is_empty() {
        format!("v{} ({})", env!("CARGO_PKG_VERSION"), hash)
    } else {
        format!("v{} ({} {})", env!("CARGO_PKG_VERSION"), hash, date)
    }
}

fn format_last_sync(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(t) => format_time_ago(t),
        None => "never".to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
