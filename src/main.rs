use anyhow::Context;
use log::debug;
use logger_data_wrap::{rewrite_file, RewriteConfig, CONFIRMATION_MESSAGE};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RewriteConfig::default();
    let report = rewrite_file(&config)
        .with_context(|| format!("rewriting {}", config.target.display()))?;

    debug!("report: {}", serde_json::to_string(&report)?);

    println!("{}", CONFIRMATION_MESSAGE);
    Ok(())
}
