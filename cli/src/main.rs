//! figextract CLI - Figma design data extraction tool

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use figextract::extract::{outline, DEFAULT_OUTLINE_DEPTH};
use figextract::{
    extract_page, fetch_design_summary, fetch_file_info, write_json, ClientOptions,
    DesignSummary, FigmaClient, FileInfo, JsonFormat, PageExtraction, DEFAULT_BASE_URL,
};

type CliResult<T = ()> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "figextract")]
#[command(version)]
#[command(about = "Dump Figma colors, typography, components and page structure to JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ApiArgs {
    /// Figma personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Key of the Figma file (from its URL)
    #[arg(long, env = "FIGMA_FILE_KEY", global = true)]
    file_key: Option<String>,

    /// API base URL
    #[arg(long, env = "FIGMA_API_BASE", default_value = DEFAULT_BASE_URL, global = true)]
    api_base: String,

    /// Request timeout in seconds (waits indefinitely if not set)
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,
}

impl ApiArgs {
    fn client(&self) -> CliResult<FigmaClient> {
        let token = self
            .token
            .as_deref()
            .ok_or("missing Figma token (pass --token or set FIGMA_TOKEN)")?;

        log::debug!("API base: {}, timeout: {:?}s", self.api_base, self.timeout);
        let mut options = ClientOptions::new().with_base_url(&self.api_base);
        if let Some(secs) = self.timeout {
            options = options.with_timeout(Duration::from_secs(secs));
        }

        Ok(FigmaClient::with_options(token, options)?)
    }

    fn file_key(&self) -> CliResult<&str> {
        Ok(self
            .file_key
            .as_deref()
            .ok_or("missing file key (pass --file-key or set FIGMA_FILE_KEY)")?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch pages, published styles and components
    Summary {
        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "figma-design.json")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract colors, typography, frames and structure of one page
    Page {
        /// Page (or node) id, e.g. "18862:42390"
        #[arg(value_name = "PAGE_ID")]
        page_id: String,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "page-design.json")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Structure outline depth
        #[arg(long, default_value_t = DEFAULT_OUTLINE_DEPTH)]
        depth: usize,
    },

    /// Show file information
    Info,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Summary { output, compact }) => cmd_summary(&cli.api, &output, compact),
        Some(Commands::Page {
            page_id,
            output,
            compact,
            depth,
        }) => cmd_page(&cli.api, &page_id, &output, compact, depth),
        Some(Commands::Info) => cmd_info(&cli.api),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: figextract <COMMAND>".yellow());
            println!("       figextract --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        if let Some(hint) = e.downcast_ref::<figextract::Error>().and_then(|e| e.hint()) {
            eprintln!();
            for line in hint {
                eprintln!("{}", line.yellow());
            }
        }
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}

/// At most `limit` items, plus an "... and N more" line when truncated.
fn truncated_list<'a>(items: impl IntoIterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let items: Vec<&str> = items.into_iter().collect();
    let mut lines: Vec<String> = items
        .iter()
        .take(limit)
        .map(|item| format!("  - {}", item))
        .collect();
    if items.len() > limit {
        lines.push(format!("  ... and {} more", items.len() - limit));
    }
    lines
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("{}", title.cyan().bold());
    for line in lines {
        println!("{}", line);
    }
    println!();
}

fn print_file_info(info: &FileInfo) {
    println!("{}", "File Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Name".bold(), info.name);
    if let Some(modified) = info.last_modified_at() {
        println!(
            "{}: {}",
            "Last Modified".bold(),
            modified
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
    } else if let Some(ref raw) = info.last_modified {
        println!("{}: {}", "Last Modified".bold(), raw);
    }
    if let Some(ref version) = info.version {
        println!("{}: {}", "Version".bold(), version);
    }
    println!();

    let pages = info.pages();
    println!("{} {}", "Pages:".cyan().bold(), pages.len());
    for (i, page) in pages.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            page.name,
            format!("(ID: {})", page.id.as_deref().unwrap_or("?")).dimmed()
        );
    }
    println!();
}

fn cmd_info(api: &ApiArgs) -> CliResult {
    let client = api.client()?;
    let file_key = api.file_key()?;

    let rt = tokio::runtime::Runtime::new()?;
    let pb = spinner("Fetching file information...");
    let info = rt.block_on(fetch_file_info(&client, file_key));
    pb.finish_and_clear();

    print_file_info(&info?);
    Ok(())
}

fn cmd_summary(api: &ApiArgs, output: &Path, compact: bool) -> CliResult {
    let client = api.client()?;
    let file_key = api.file_key()?;

    let rt = tokio::runtime::Runtime::new()?;
    let pb = spinner("Fetching file, styles and components...");
    let summary = rt.block_on(fetch_design_summary(&client, file_key));
    pb.finish_and_clear();
    let summary = summary?;

    print_design_summary(&summary);

    write_json(output, &summary, json_format(compact))?;
    println!("{} {}", "Saved to".green(), output.display());

    println!();
    println!("{}", "Summary".green().bold());
    println!("  {} {} pages", "•".dimmed(), summary.pages.len());
    println!("  {} {} color styles", "•".dimmed(), summary.counts.fill);
    println!("  {} {} typography styles", "•".dimmed(), summary.counts.text);
    println!("  {} {} components", "•".dimmed(), summary.components.len());

    Ok(())
}

fn print_design_summary(summary: &DesignSummary) {
    println!("{}", "File Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Name".bold(), summary.file.name);
    if let Some(ref version) = summary.file.version {
        println!("{}: {}", "Version".bold(), version);
    }
    println!();

    println!("{}", "Design Styles".cyan().bold());
    println!("  {}: {}", "Colors (FILL)".bold(), summary.counts.fill);
    println!("  {}: {}", "Typography (TEXT)".bold(), summary.counts.text);
    println!("  {}: {}", "Effects".bold(), summary.counts.effect);
    println!("  {}: {}", "Grids".bold(), summary.counts.grid);
    println!();

    print_section(
        "Color Styles",
        &truncated_list(summary.styles.colors.iter().map(|s| s.name.as_str()), 10),
    );
    print_section(
        "Typography Styles",
        &truncated_list(
            summary.styles.typography.iter().map(|s| s.name.as_str()),
            10,
        ),
    );
    print_section(
        "Components",
        &truncated_list(summary.components.iter().map(|c| c.name.as_str()), 15),
    );
}

fn cmd_page(
    api: &ApiArgs,
    page_id: &str,
    output: &Path,
    compact: bool,
    depth: usize,
) -> CliResult {
    let client = api.client()?;
    let file_key = api.file_key()?;

    let rt = tokio::runtime::Runtime::new()?;
    let pb = spinner("Fetching page data...");
    let page = rt.block_on(extract_page(&client, file_key, page_id));
    pb.finish_and_clear();
    let page = page?;

    print_page(&page, depth);

    write_json(output, &page, json_format(compact))?;
    println!("{} {}", "Saved to".green(), output.display());

    println!();
    println!("{}", "Summary".green().bold());
    println!("  {} {} frames/sections", "•".dimmed(), page.frames.len());
    println!("  {} {} colors", "•".dimmed(), page.colors.len());
    println!("  {} {} typography styles", "•".dimmed(), page.typography.len());

    Ok(())
}

fn print_page(page: &PageExtraction, depth: usize) {
    println!("{}", "Page".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Name".bold(), page.page.name);
    println!("{}: {}", "Type".bold(), page.page.node_type);
    println!("{}: {}", "Children".bold(), page.tree.children().len());
    println!();

    println!("{}", "Page Structure".cyan().bold());
    for line in outline(&page.tree, depth) {
        println!("{}", line);
    }
    println!();

    println!("{}: {}", "Unique colors".bold(), page.colors.len());
    println!("{}: {}", "Unique text styles".bold(), page.typography.len());
    println!();

    let labels: Vec<String> = page.typography.iter().map(|t| t.label()).collect();
    print_section(
        "Typography Styles",
        &truncated_list(labels.iter().map(String::as_str), 10),
    );
}

fn cmd_version() {
    println!("{} {}", "figextract".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Figma design data extraction tool");
    println!();
    println!("API: {}", DEFAULT_BASE_URL.dimmed());
    println!("License: MIT");
}
