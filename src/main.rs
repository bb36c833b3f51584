use anyhow::Result;
use osh::{Args, Interpreter, ShellConfig};
use std::env;
use tracing::debug;

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let log_level = if args.verbose { "debug" } else { "warn" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = ShellConfig::from(&args);
    debug!(?config, interactive = args.interactive, "starting");

    let mut sh = Interpreter::new(config);
    if args.interactive {
        sh.repl()?;
    } else {
        sh.run_self_test();
    }
    Ok(())
}
