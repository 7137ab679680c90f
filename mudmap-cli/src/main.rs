use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "mudmap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a map text file as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input map text file.
    #[arg(long = "in", conflicts_with = "base")]
    in_path: Option<PathBuf>,

    /// MUD base directory to resolve `--variant` against.
    #[arg(long)]
    base: Option<PathBuf>,

    /// Which map file to pick under `--base`.
    #[arg(long, value_enum, default_value_t = Variant::Normal)]
    variant: Variant,

    /// Optional JSON palette replacing the built-in table.
    #[arg(long)]
    palette: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    /// The live graphical map.
    Normal,
    /// The ownership overlay map.
    Political,
    /// The raw generated world.
    Generated,
}

impl Variant {
    fn relative_path(self) -> &'static str {
        match self {
            Variant::Normal => "data/map.txt",
            Variant::Political => "data/map-political.txt",
            Variant::Generated => "lib/world/wld/map.txt",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let in_path = resolve_input(&args)?;
    let text = std::fs::read_to_string(&in_path)
        .with_context(|| format!("read map text '{}'", in_path.display()))?;

    let palette = match &args.palette {
        Some(path) => mudmap::Palette::from_path(path)?,
        None => mudmap::Palette::standard(),
    };

    let grid = mudmap::MapGrid::parse(&text)?;
    let canvas = mudmap::rasterize(&grid, &palette)?;
    let png = mudmap::encode_png(&canvas)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn resolve_input(args: &RenderArgs) -> anyhow::Result<PathBuf> {
    match (&args.in_path, &args.base) {
        (Some(path), _) => Ok(path.clone()),
        (None, Some(base)) => Ok(base.join(args.variant.relative_path())),
        (None, None) => anyhow::bail!("pass either --in <FILE> or --base <DIR>"),
    }
}
