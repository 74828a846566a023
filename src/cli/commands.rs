use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jot", about = concat!("[~] jot v", env!("CARGO_PKG_VERSION"), " - notes that stay on your machine"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: $JOT_DIR or ~/.jot)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes (pinned first, then most recently updated)
    List,
    /// Add a note
    Add(AddArgs),
    /// Show a note's full content
    Show(ShowArgs),
    /// Search notes by title or content
    Search(SearchArgs),
    /// Toggle a note's pinned flag
    Pin(PinArgs),
    /// Change a note's title
    Title(TitleArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Export a note to PDF
    Export(ExportArgs),
}

// ---------------------------------------------------------------------------
// Per-command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Note title (default: "Untitled Note")
    pub title: Option<String>,
    /// Initial content
    #[arg(long)]
    pub content: Option<String>,
    /// Pin the new note
    #[arg(long)]
    pub pin: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,
    /// Print raw content including markup tags
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search term (case-insensitive substring)
    pub query: String,
}

#[derive(Args)]
pub struct PinArgs {
    /// Note ID
    pub id: String,
}

#[derive(Args)]
pub struct TitleArgs {
    /// Note ID
    pub id: String,
    /// New title
    pub title: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID
    pub id: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Note ID
    pub id: String,
    /// Output path (default: ./<title>.pdf)
    #[arg(short, long)]
    pub out: Option<String>,
}
