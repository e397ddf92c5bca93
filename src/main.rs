// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use tiffany::app::{self, paths, Flags};

const HELP: &str = "\
Tiffany - view and touch up images

USAGE:
  tiffany [OPTIONS] [FILES...]

OPTIONS:
  --lang LANG          Interface language (e.g. en-US, fr)
  --config-dir DIR     Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        });
    paths::init_cli_override(config_dir);

    let files = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect::<Vec<_>>();

    app::run(Flags { lang, files })
}
