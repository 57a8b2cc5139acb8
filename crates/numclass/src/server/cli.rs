#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Run the classification HTTP API")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(flatten)]
    pub fact: crate::fact::FactOptions,

    /// URL pinged periodically to keep the host awake (disabled when unset)
    #[arg(long, env = "KEEP_ALIVE_URL")]
    pub keep_alive_url: Option<String>,

    /// Seconds between keep-alive pings
    #[arg(long, env = "KEEP_ALIVE_INTERVAL_SECS", default_value = "840")]
    pub keep_alive_interval_secs: u64,
}
