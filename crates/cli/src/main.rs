mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nmk", version, about = "Tagged markdown notes: index, search, save")]
struct Cli {
    /// Config file path (defaults to ~/.config/notemark/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Note root to crawl, overriding the config file (repeatable)
    #[arg(long, global = true)]
    root: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Create a new note seeded with default frontmatter
    New(NewArgs),

    /// List every tag found under the note roots
    Tags(OutputArgs),

    /// Search notes by #tag tokens and content substring
    Search(SearchArgs),

    /// Replace the tags of a note
    Tag(TagArgs),

    /// Toggle the soft-delete marker of a note
    Delete(FileArgs),

    /// Populate frontmatter for a note that has none
    Init(FileArgs),

    /// Run save-time processing (title/modified refresh, optional rename)
    Save(FileArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Path of the note to create
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Emit JSON instead of plain lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query, e.g. "#tag1 #tag2 free text"
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Emit JSON instead of a listing
    #[arg(long)]
    pub json: bool,

    /// Print matching paths only
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct TagArgs {
    /// The note to edit
    pub file: PathBuf,

    /// Comma-separated tags, e.g. "rust,cli"
    pub tags: String,
}

#[derive(Debug, Args)]
pub struct FileArgs {
    /// The note to process
    pub file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref()),
        Commands::New(args) => cmd::new::run(&args.output),
        Commands::Tags(args) => {
            let rc = cmd::resolve_config(cli.config.as_deref(), &cli.root);
            logging::init(&rc);
            cmd::tags::run(&rc, &args);
        }
        Commands::Search(args) => {
            let rc = cmd::resolve_config(cli.config.as_deref(), &cli.root);
            logging::init(&rc);
            cmd::search::run(&rc, &args);
        }
        Commands::Tag(args) => {
            let rc = cmd::resolve_save_config(cli.config.as_deref());
            logging::init(&rc);
            cmd::tag::run(&rc, &args);
        }
        Commands::Delete(args) => {
            let rc = cmd::resolve_save_config(cli.config.as_deref());
            logging::init(&rc);
            cmd::delete::run(&rc, &args.file);
        }
        Commands::Init(args) => {
            let rc = cmd::resolve_save_config(cli.config.as_deref());
            logging::init(&rc);
            cmd::init::run(&rc, &args.file);
        }
        Commands::Save(args) => {
            let rc = cmd::resolve_save_config(cli.config.as_deref());
            logging::init(&rc);
            cmd::save::run(&rc, &args.file);
        }
    }
}
