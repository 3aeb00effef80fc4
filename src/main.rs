// src/main.rs

use colorpack::config::{parse_color_setting, Config, CONFIG};
use colorpack::PixelFormat;

use anyhow::{bail, Context};
// Logging
use log::{error, info};
use std::path::PathBuf;

const USAGE: &str =
    "usage: colorpack [--argb | --rgba] [--premultiply | --no-premultiply] [--config PATH] [COLOR...]";

/// Command-line options. Flags left unset defer to the configuration.
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    pixel_format: Option<PixelFormat>,
    premultiply: Option<bool>,
    help: bool,
    colors: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rgba" => options.pixel_format = Some(PixelFormat::Rgba),
            "--argb" => options.pixel_format = Some(PixelFormat::Argb),
            "--premultiply" => options.premultiply = Some(true),
            "--no-premultiply" => options.premultiply = Some(false),
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => options.help = true,
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            _ => options.colors.push(arg),
        }
    }
    Ok(options)
}

/// Main entry point for the `colorpack` binary.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // --- Configuration ---
    let config = match &options.config_path {
        Some(path) => Config::load(path)?,
        None => CONFIG.clone(),
    };
    let format = options.pixel_format.unwrap_or(config.pixel_format);
    let premultiply = options.premultiply.unwrap_or(config.premultiply);
    info!(
        "Packing as {:?}{}",
        format,
        if premultiply { " (premultiplied)" } else { "" }
    );

    if options.colors.is_empty() {
        for (name, packed) in config.colors.packed(format, premultiply) {
            println!("{} -> 0x{:08X}", name, packed);
        }
        return Ok(());
    }

    let mut failures = 0usize;
    for input in &options.colors {
        match parse_color_setting(input) {
            Ok(color) => {
                let color = if premultiply {
                    color.premultiply_alpha()
                } else {
                    color
                };
                println!("{} -> 0x{:08X}", input, format.pack(color));
            }
            Err(e) => {
                error!("Skipping {:?}: {}", input, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} colors could not be parsed", failures, options.colors.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test_log::test]
    fn flags_and_colors_are_separated() {
        let options = parse_args(args(&["--rgba", "ff0000", "--premultiply", "#00ff0080"]))
            .expect("valid arguments");
        assert_eq!(options.pixel_format, Some(PixelFormat::Rgba));
        assert_eq!(options.premultiply, Some(true));
        assert!(!options.help);
        assert_eq!(options.colors, vec!["ff0000", "#00ff0080"]);
        assert!(options.config_path.is_none());
    }

    #[test_log::test]
    fn config_flag_takes_a_path() {
        let options = parse_args(args(&["--config", "/tmp/colors.json"])).expect("valid");
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/colors.json")));
        assert!(parse_args(args(&["--config"])).is_err());
    }

    #[test_log::test]
    fn later_flags_win() {
        let options = parse_args(args(&["--premultiply", "--no-premultiply", "--rgba", "--argb"]))
            .expect("valid arguments");
        assert_eq!(options.premultiply, Some(false));
        assert_eq!(options.pixel_format, Some(PixelFormat::Argb));
    }

    #[test_log::test]
    fn unset_flags_defer_to_config() {
        let options = parse_args(args(&["ff0000"])).expect("valid arguments");
        assert_eq!(options.premultiply, None);
        assert_eq!(options.pixel_format, None);
    }

    #[test_log::test]
    fn help_is_reported_not_printed() {
        let options = parse_args(args(&["ff0000", "--help"])).expect("valid arguments");
        assert!(options.help);
        assert!(parse_args(args(&["-h"])).expect("valid").help);
    }

    #[test_log::test]
    fn usage_lists_every_flag() {
        for flag in ["--argb", "--rgba", "--premultiply", "--no-premultiply", "--config"] {
            assert!(USAGE.contains(flag), "{} missing from usage", flag);
        }
    }

    #[test_log::test]
    fn unknown_flag_is_rejected() {
        assert!(parse_args(args(&["--bgra"])).is_err());
    }
}
