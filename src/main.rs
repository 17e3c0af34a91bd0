// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::notifications::Position;

fn main() -> iced::Result {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: parse_or_exit(args.opt_value_from_str("--config-dir")),
        position: parse_or_exit::<Position>(args.opt_value_from_str("--position")),
        max_toasts: parse_or_exit(args.opt_value_from_str("--max-toasts")),
        duration_ms: parse_or_exit(args.opt_value_from_str("--duration-ms")),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn parse_or_exit<T>(value: Result<Option<T>, pico_args::Error>) -> Option<T> {
    match value {
        Ok(value) => value,
        Err(err) => {
            eprintln!("iced_toast: {err}");
            std::process::exit(2);
        }
    }
}
