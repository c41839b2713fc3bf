// SPDX-License-Identifier: MPL-2.0
use leaf_loaf::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        backend_url: args.opt_value_from_str("--backend-url").unwrap(),
    };

    app::run(flags)
}
