//! Runtime settings of the shell and the command-line flags that produce them.

use argh::FromArgs;
use std::time::Duration;

/// Prompt printed by the interactive console reader.
pub const DEFAULT_PROMPT: &str = "osh> ";
/// Pause after launching a background segment, in milliseconds.
pub const DEFAULT_BACKGROUND_PAUSE_MS: u64 = 10;

/// Settings consulted by the [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prompt shown before every line in interactive mode.
    pub prompt: String,
    /// Delay after a background segment is launched, before the next segment
    /// is dispatched. It only gives the child a head start; ordering of output
    /// is not guaranteed.
    pub background_pause: Duration,
    /// Print every line read from the console back to stdout.
    pub echo_input: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            background_pause: Duration::from_millis(DEFAULT_BACKGROUND_PAUSE_MS),
            echo_input: false,
        }
    }
}

#[derive(FromArgs, Debug)]
/// A small command interpreter with pipes, redirection and background jobs.
/// Without --interactive a fixed list of sample lines is executed.
pub struct Args {
    #[argh(switch, short = 'i')]
    /// read commands from the console until end of input or `exit`.
    pub interactive: bool,

    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt shown before every line.
    pub prompt: String,

    #[argh(option, default = "DEFAULT_BACKGROUND_PAUSE_MS")]
    /// milliseconds to pause after launching a background command.
    pub background_pause_ms: u64,

    #[argh(switch)]
    /// print every line read from the console with its length.
    pub echo_input: bool,

    #[argh(switch, short = 'v')]
    /// enable debug logging (RUST_LOG takes precedence).
    pub verbose: bool,
}

impl From<&Args> for ShellConfig {
    fn from(args: &Args) -> Self {
        Self {
            prompt: args.prompt.clone(),
            background_pause: Duration::from_millis(args.background_pause_ms),
            echo_input: args.echo_input,
        }
    }
}
