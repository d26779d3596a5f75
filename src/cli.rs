//! Command line parsing

use anyhow::{Context, Result, bail};
use sizehints_codec::SizeHintsFlags;
use std::path::PathBuf;
use x11rb::protocol::xproto::Window;

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub window: Option<Window>,
    /// Overrides `update.clear` from the config
    pub clear: Option<SizeHintsFlags>,
    pub dry_run: bool,
    pub config_path: Option<PathBuf>,
    pub help: bool,
    pub version: bool,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--id" | "-i" => {
                    let value = args.next().context("--id requires a window id")?;
                    parsed.window = Some(parse_window_id(&value)?);
                }
                "--clear" | "-c" => {
                    let value = args.next().context("--clear requires a list of flags")?;
                    parsed.clear = Some(parse_flag_list(&value)?);
                }
                "--config" => {
                    let value = args.next().context("--config requires a path argument")?;
                    parsed.config_path = Some(PathBuf::from(value));
                }
                "--dry-run" | "-n" => parsed.dry_run = true,
                "--help" | "-h" => parsed.help = true,
                "--version" | "-V" => parsed.version = true,
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

/// Parse a window id given in hexadecimal, with or without a `0x` prefix
pub fn parse_window_id(value: &str) -> Result<Window> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    // from_str_radix would also take a leading sign
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("Invalid window id {:?} (expected hex, e.g. 0x1a00003)", value);
    }
    Window::from_str_radix(digits, 16)
        .with_context(|| format!("Invalid window id {:?} (expected hex, e.g. 0x1a00003)", value))
}

/// Parse `P_ASPECT,P_MIN_SIZE` (or `|`-separated) into a flag set
pub fn parse_flag_list(value: &str) -> Result<SizeHintsFlags> {
    let mut flags = SizeHintsFlags::empty();
    for name in value.split([',', '|']).map(str::trim).filter(|s| !s.is_empty()) {
        let flag = SizeHintsFlags::from_name(&name.to_ascii_uppercase())
            .with_context(|| format!("Unknown size hints flag {:?}", name))?;
        flags |= flag;
    }
    Ok(flags)
}

pub fn print_help() {
    println!("xupdate-size-hints - clear WM_NORMAL_HINTS flags on an X11 window\n");
    println!("USAGE:");
    println!("    xupdate-size-hints --id <WINDOW> [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    -i, --id <WINDOW>     Window id in hex (e.g. 0x1a00003, see xwininfo)");
    println!("    -c, --clear <FLAGS>   Flags to clear, e.g. P_ASPECT,P_RESIZE_INC");
    println!("    -n, --dry-run         Show what would change without writing");
    println!("        --config <PATH>   Use custom config file");
    println!("    -V, --version         Print version information");
    println!("    -h, --help            Print this help message\n");
    println!("FLAGS:");
    for (name, _) in SizeHintsFlags::all().iter_names() {
        println!("    {}", name);
    }
    println!("\nCONFIG:");
    println!("    Location: ~/.config/xupdate-size-hints/config.toml");
}
