use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vault-card", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a playlist share card as a PNG.
    Card(CardArgs),
    /// Identify the platform and ids of a playlist link.
    Link(LinkArgs),
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Playlist record JSON.
    #[arg(long)]
    record: PathBuf,

    /// Thumbnail image file. Overrides the record's own thumbnail reference.
    #[arg(long)]
    thumbnail: Option<PathBuf>,

    /// Root that `/uploads/...` thumbnail references resolve against.
    /// Defaults to the record file's directory.
    #[arg(long)]
    uploads_root: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Extra font directory (repeatable).
    #[arg(long = "font-dir", env = "VAULT_FONT_DIR")]
    font_dirs: Vec<PathBuf>,

    /// Skip loading system fonts.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

#[derive(Parser, Debug)]
struct LinkArgs {
    /// Playlist URL.
    url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Card(args) => cmd_card(args),
        Command::Link(args) => cmd_link(args),
    }
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.record)
        .with_context(|| format!("read record '{}'", args.record.display()))?;
    let record = vault_card::PlaylistRecord::from_json(&json)
        .with_context(|| format!("load record '{}'", args.record.display()))?;

    let thumbnail = match &args.thumbnail {
        Some(path) => Some(
            std::fs::read(path)
                .with_context(|| format!("read thumbnail '{}'", path.display()))?,
        ),
        None => {
            let uploads_root = args.uploads_root.clone().unwrap_or_else(|| {
                args.record
                    .parent()
                    .unwrap_or_else(|| Path::new("."))
                    .to_path_buf()
            });
            let store = vault_card::ThumbnailStore::new(uploads_root);
            record.thumbnail.as_ref().and_then(|t| store.resolve(t))
        }
    };

    let renderer = vault_card::CardRenderer::new(&vault_card::FontConfig {
        load_system_fonts: !args.no_system_fonts,
        font_dirs: args.font_dirs,
    });
    let png = renderer.render(&record, thumbnail.as_deref())?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_link(args: LinkArgs) -> anyhow::Result<()> {
    let info = vault_card::parse_link(&args.url)?;
    println!("{}", serde_json::to_string(&info)?);
    Ok(())
}
