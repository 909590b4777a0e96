//! Process settings: the `--settings` flag picks a TOML file that is read
//! into [`Settings`].

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
