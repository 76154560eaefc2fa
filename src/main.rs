// SPDX-License-Identifier: MPL-2.0
use reqwest::Url;
use souq_gallery::app::{self, Flags};
use souq_gallery::logging;
use std::ffi::OsString;
use std::path::Path;

const HELP: &str = "\
Souq Gallery - storefront listing browser

USAGE:
  souq_gallery [OPTIONS] [IMAGE]...

ARGS:
  [IMAGE]...              Images to show in a standalone gallery (paths or URLs)

OPTIONS:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --base-url <URL>        Storefront origin (overrides [server] base_url)
  --config-dir <DIR>      Directory holding settings.toml
  --data-dir <DIR>        Directory holding state.cbor
  --log-level <LEVEL>     trace, debug, info, warn or error (default: info)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or(None);
    logging::init(logging::parse_level(log_level.as_deref()));

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        base_url: optional_value(&mut args, "--base-url"),
        config_dir: optional_value(&mut args, "--config-dir"),
        data_dir: optional_value(&mut args, "--data-dir"),
        images: args.finish().into_iter().filter_map(image_reference).collect(),
    };

    app::paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, %err, "ignoring invalid option");
            None
        }
    }
}

/// Turns a positional argument into an image reference. Existing local files
/// become `file://` URLs so absolute paths are not taken as server paths.
fn image_reference(arg: OsString) -> Option<String> {
    let raw = arg.into_string().ok()?;
    if raw.contains("://") {
        return Some(raw);
    }
    let path = Path::new(&raw);
    match path.canonicalize() {
        Ok(absolute) => Url::from_file_path(absolute)
            .map(|url| url.to_string())
            .ok()
            .or(Some(raw)),
        Err(_) => {
            tracing::warn!(path = %raw, "image file not found");
            Some(raw)
        }
    }
}
