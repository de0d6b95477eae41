use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "opensync-vif")]
#[command(about = "Translate OpenSync Wi-Fi VIF rows to and from OpenWrt UCI")]
pub struct Cli {
    /// TOML settings file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding the UCI packages (overrides the settings file).
    #[arg(long, global = true)]
    pub uci_dir: Option<PathBuf>,
    /// Directory for downloaded icons (overrides the settings file).
    #[arg(long, global = true)]
    pub icon_dir: Option<PathBuf>,
    /// Interface query root (overrides the settings file).
    #[arg(long, global = true)]
    pub sys_class_net: Option<PathBuf>,
    /// Default log filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Publish observed state for wifi-iface sections as JSON lines.
    State(StateArgs),
    /// Write a desired VIF config into the wireless package.
    Apply(ApplyArgs),
    /// Remove a VIF's wifi-iface section.
    Delete(DeleteArgs),
    /// Apply a Hotspot 2.0 profile to the VIFs it references.
    Hs20(Hs20Args),
    /// Write a Hotspot 2.0 OSU provider section.
    Osu(OsuArgs),
    /// Download a Hotspot 2.0 icon and register it.
    Icon(IconArgs),
    /// Print a UCI package as JSON.
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct StateArgs {
    /// Only this section.
    #[arg(long)]
    pub section: Option<String>,
    /// Also publish the desired config rebuilt from each state.
    #[arg(long)]
    pub with_config: bool,
}

#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Wifi_VIF_Config row (JSON).
    #[arg(long)]
    pub vif: PathBuf,
    /// Wifi_Radio_Config row (JSON).
    #[arg(long)]
    pub radio: PathBuf,
    /// Wifi_Credential_Config rows (JSON array).
    #[arg(long)]
    pub credentials: Option<PathBuf>,
    /// Changed columns, comma separated, or `all`.
    #[arg(long, default_value = "all")]
    pub changed: String,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Wifi_VIF_Config row (JSON).
    #[arg(long)]
    pub vif: PathBuf,
}

#[derive(Parser, Debug)]
pub struct Hs20Args {
    /// Hotspot20_Config row (JSON).
    #[arg(long)]
    pub profile: PathBuf,
    /// Rows referenced by identifier (JSON keyed by table).
    #[arg(long)]
    pub records: PathBuf,
}

#[derive(Parser, Debug)]
pub struct OsuArgs {
    /// Hotspot20_OSU_Providers row (JSON).
    #[arg(long)]
    pub provider: PathBuf,
    /// Rows referenced by identifier (JSON keyed by table).
    #[arg(long)]
    pub records: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct IconArgs {
    /// Hotspot20_Icon_Config row (JSON).
    #[arg(long)]
    pub icon: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[arg(default_value = "wireless")]
    pub package: String,
}
