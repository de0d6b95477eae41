use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use opensync_vif::config::Settings;
use opensync_vif::platform::{JsonRecords, UciStore};
use opensync_vif::report::{render_outcomes, render_result, render_summary, SectionOutcome};
use opensync_vif::schema::{
    CredentialConfig, Hotspot20Config, Hotspot20IconConfig, Hotspot20OsuProvider, RadioConfig,
    VifConfig, VifConfigFlags,
};
use opensync_vif::traits::ConfigStore;
use opensync_vif::translator::KIND_WIFI_IFACE;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;
use uci_core::format_json;

mod cli;
mod device;

use cli::{
    ApplyArgs, Cli, Command, DeleteArgs, Hs20Args, IconArgs, OsuArgs, ShowArgs, StateArgs,
};
use device::Device;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    let settings = load_settings(&cli)?;

    match cli.command {
        Command::State(args) => run_state(&settings, args),
        Command::Apply(args) => run_apply(&settings, args),
        Command::Delete(args) => run_delete(&settings, args),
        Command::Hs20(args) => run_hs20(&settings, args),
        Command::Osu(args) => run_osu(&settings, args),
        Command::Icon(args) => run_icon(&settings, args),
        Command::Show(args) => run_show(&settings, args),
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(dir) = &cli.uci_dir {
        settings.uci_dir = dir.clone();
    }
    if let Some(dir) = &cli.icon_dir {
        settings.icon_dir = dir.clone();
    }
    if let Some(dir) = &cli.sys_class_net {
        settings.sys_class_net = dir.clone();
    }
    Ok(settings)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn run_state(settings: &Settings, args: StateArgs) -> Result<()> {
    let mut device = Device::open(settings, JsonRecords::default())?;
    let wireless = std::mem::take(&mut device.wireless);
    let sections: Vec<_> = wireless
        .sections_of_kind(KIND_WIFI_IFACE)
        .filter(|s| args.section.as_deref().map_or(true, |name| s.name == name))
        .collect();
    if let Some(name) = &args.section {
        if sections.is_empty() {
            bail!("no {KIND_WIFI_IFACE} section named {name}");
        }
    }

    let mut translator = device.translator();
    let mut outcomes = Vec::new();
    for section in sections {
        let mut vconf = VifConfig::default();
        let published =
            translator.update_observed_state(section, args.with_config.then_some(&mut vconf));
        outcomes.push(SectionOutcome {
            section: section.name.clone(),
            radio: section.get_str("device").map(str::to_string),
            ssid: section.get_str("ssid").map(str::to_string),
            published,
        });
    }

    if !outcomes.is_empty() {
        eprintln!("{}", render_outcomes(&outcomes));
    }
    eprintln!("{}", render_summary(&outcomes));

    if let Some(name) = &args.section {
        if outcomes.iter().any(|o| !o.published) {
            bail!("section {name} is not a usable interface");
        }
    }
    Ok(())
}

fn run_apply(settings: &Settings, args: ApplyArgs) -> Result<()> {
    let vconf: VifConfig = read_json(&args.vif)?;
    let rconf: RadioConfig = read_json(&args.radio)?;
    let cconfs: Vec<CredentialConfig> = match &args.credentials {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let changed = VifConfigFlags::parse_list(&args.changed).map_err(anyhow::Error::msg)?;
    if vconf.if_name.is_empty() {
        bail!("{}: if_name is required", args.vif.display());
    }
    if rconf.if_name.is_empty() {
        bail!("{}: if_name is required", args.radio.display());
    }

    let mut device = Device::open(settings, JsonRecords::default())?;
    let ok = device
        .translator()
        .apply_desired_config(&vconf, &rconf, &cconfs, changed);
    eprintln!("{}", render_result("apply", &vconf.if_name, ok));
    if !ok {
        bail!("failed to apply config for {}", vconf.if_name);
    }
    Ok(())
}

fn run_delete(settings: &Settings, args: DeleteArgs) -> Result<()> {
    let vconf: VifConfig = read_json(&args.vif)?;
    if vconf.if_name.is_empty() {
        bail!("{}: if_name is required", args.vif.display());
    }
    let mut device = Device::open(settings, JsonRecords::default())?;
    let ok = device.translator().delete_vif_config(&vconf);
    eprintln!("{}", render_result("delete", &vconf.if_name, ok));
    if !ok {
        bail!("failed to delete config for {}", vconf.if_name);
    }
    Ok(())
}

fn run_hs20(settings: &Settings, args: Hs20Args) -> Result<()> {
    let profile: Hotspot20Config = read_json(&args.profile)?;
    let records = JsonRecords::load(&args.records)?;
    let mut device = Device::open(settings, records)?;
    let written = device.translator().update_hotspot20(&profile);
    let target = format!("{written}/{} vif(s)", profile.vif_config.len());
    eprintln!("{}", render_result("hs20", &target, written > 0));
    if written == 0 && !profile.vif_config.is_empty() {
        bail!("no referenced VIF could be updated");
    }
    Ok(())
}

fn run_osu(settings: &Settings, args: OsuArgs) -> Result<()> {
    let provider: Hotspot20OsuProvider = read_json(&args.provider)?;
    let records = match &args.records {
        Some(path) => JsonRecords::load(path)?,
        None => JsonRecords::default(),
    };
    let mut device = Device::open(settings, records)?;
    let ok = device.translator().update_osu_provider(&provider);
    eprintln!("{}", render_result("osu", &provider.osu_provider_name, ok));
    if !ok {
        bail!("failed to write OSU provider {:?}", provider.osu_provider_name);
    }
    Ok(())
}

fn run_icon(settings: &Settings, args: IconArgs) -> Result<()> {
    let icon: Hotspot20IconConfig = read_json(&args.icon)?;
    let mut device = Device::open(settings, JsonRecords::default())?;
    let ok = device.translator().update_icon(&icon);
    eprintln!("{}", render_result("icon", &icon.name, ok));
    if !ok {
        bail!("failed to register icon {:?}", icon.name);
    }
    Ok(())
}

fn run_show(settings: &Settings, args: ShowArgs) -> Result<()> {
    let store = UciStore::open(settings.uci_dir.clone());
    let package = store
        .load(&args.package)
        .with_context(|| format!("failed to load package {}", args.package))?;
    println!("{}", format_json(&package));
    Ok(())
}
