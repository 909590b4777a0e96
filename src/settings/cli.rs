use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Sign-up form server")]
pub struct Cli {
    /// Path of the TOML settings file.
    #[arg(long)]
    pub settings: Option<String>,
}
