use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "living-dex")]
#[command(about = "Find where a pokemon goes in a living dex box layout")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Database directory holding pokedex/ and icons/ (overrides the config file)
    #[arg(long)]
    pub db_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the stored pokedexes
    List,
    /// Locate a pokemon by number or by name
    Locate(LocateArgs),
    /// Identify the pokemon stored at a box slot
    At(AtArgs),
    /// Draw one box of the grid
    ShowBox(ShowBoxArgs),
    /// Write the full box layout of a pokedex to a file
    Export(ExportArgs),
    /// Store a pokedex from a plain list, one name per line
    Import(ImportArgs),
}

#[derive(Debug, Clone, Args)]
pub struct LocateArgs {
    /// Pokedex to search (game name)
    #[arg(long)]
    pub dex: String,

    /// Pokedex number; anything that is not a positive integer clears the selection
    #[arg(long, conflicts_with = "name", required_unless_present = "name")]
    pub number: Option<String>,

    /// Approximate pokemon name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct AtArgs {
    #[arg(long)]
    pub dex: String,

    #[arg(long = "box")]
    pub box_number: usize,

    #[arg(long)]
    pub row: usize,

    #[arg(long)]
    pub column: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ShowBoxArgs {
    #[arg(long)]
    pub dex: String,

    /// Box to draw; defaults to the highlighted pokemon's box, or box 1
    #[arg(long = "box")]
    pub box_number: Option<usize>,

    /// Pokedex number to highlight
    #[arg(long)]
    pub highlight: Option<i64>,

    /// Print the icon file next to each pokemon
    #[arg(long)]
    pub icons: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub dex: String,

    #[arg(short, long)]
    pub output: String,

    #[arg(long, default_value = "csv")]
    pub format: String,
}

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    #[arg(long)]
    pub game: String,

    #[arg(long)]
    pub region: String,

    /// Text file with one pokemon name per line, in pokedex order
    #[arg(long)]
    pub list: String,
}
