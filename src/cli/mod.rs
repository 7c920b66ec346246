use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "botforge", version, about = "Prompt-to-archive Discord bot generation service")]
pub struct Args {
    /// Bind address; overrides the config file when set.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port; overrides the config file when set.
    #[arg(long)]
    pub port: Option<u16>,

    /// Optional TOML config file.
    #[arg(long)]
    pub config: Option<String>,

    /// Save each request's prompt and raw model reply under .botforge/tx/.
    #[arg(long, default_value_t = false)]
    pub save_exchanges: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
