use crate::builtin::Builtin;
use crate::config::ShellConfig;
use crate::launcher::{self, LaunchOutcome, PipelineOutcome};
use crate::pipeline::{Pipeline, split_pipeline};
use crate::redirect::resolve_redirection;
use crate::segment::{History, Recall, segment};
use crate::tokenizer::tokenize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::ops::ControlFlow;
use std::thread;
use tracing::{debug, info, warn};

/// Line typed at the console that ends the interactive loop.
pub const EXIT_COMMAND: &str = "exit";

/// Sample lines dispatched by [`Interpreter::run_self_test`].
pub const SELF_TEST_LINES: [&str; 7] = [
    "ls",
    "ls -al",
    "ls & whoami ;",
    "ls > junk.txt",
    "cat < junk.txt",
    "ls | wc",
    "ascii",
];

/// How a single segment was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Handled in-process by a builtin.
    Builtin(Builtin),
    /// A single command, possibly redirected or in the background.
    Single(LaunchOutcome),
    /// A two-stage pipeline.
    Piped(PipelineOutcome),
    /// Launch failed for lack of resources; the failure was reported.
    Abandoned,
}

/// Line-oriented command interpreter.
///
/// The interpreter owns the one-slot history and the runtime configuration.
/// Every line is split into segments which are dispatched strictly in order;
/// each segment is fully finished (or, for background segments, started)
/// before the next one begins.
///
/// Example
/// ```no_run
/// use osh::Interpreter;
/// let mut sh = Interpreter::default();
/// sh.process_line("echo hello; echo world");
/// ```
pub struct Interpreter {
    config: ShellConfig,
    history: History,
}

impl Interpreter {
    /// Create an interpreter with an empty history.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Segment `line` and dispatch every segment in order.
    ///
    /// Failures are reported on the console and never stop the remaining
    /// segments. The returned list has one entry per dispatched segment.
    pub fn process_line(&mut self, line: &str) -> Vec<Dispatch> {
        debug!("processing line: {}", line);

        let segmentation = segment(line, &mut self.history);
        match &segmentation.recall {
            Recall::Stored => {}
            Recall::Replayed(previous) => println!("Executing: {}", previous),
            Recall::Empty => {
                println!("No commands in history.");
                return Vec::new();
            }
        }

        for seg in &segmentation.segments {
            debug!("Executing: [{}] Background: [{}]", seg.text, seg.background);
        }

        let mut dispatched = Vec::with_capacity(segmentation.segments.len());
        for seg in segmentation.segments {
            dispatched.push(self.execute_command(&seg.text, !seg.background));
            if seg.background {
                thread::sleep(self.config.background_pause);
            }
        }
        dispatched
    }

    /// Execute one segment's command text.
    ///
    /// `wait` selects blocking or background execution for single commands.
    /// Pipelines always block.
    pub fn execute_command(&self, command: &str, wait: bool) -> Dispatch {
        if let Some(builtin) = Builtin::lookup(command) {
            if let Err(e) = builtin.execute(&mut std::io::stdout().lock()) {
                warn!("builtin {:?} failed: {:#}", builtin, e);
            }
            return Dispatch::Builtin(builtin);
        }

        let result = match split_pipeline(command) {
            Pipeline::Single(text) => {
                let (args, redirection) = resolve_redirection(tokenize(text));
                launcher::launch(&args, &redirection, wait).map(|outcome| {
                    debug!(status = ?outcome.exit_code(), "command dispatched");
                    Dispatch::Single(outcome)
                })
            }
            Pipeline::Piped(left, right) => {
                if !wait {
                    debug!("pipelines always run in the foreground");
                }
                launcher::launch_pipeline(left, right).map(Dispatch::Piped)
            }
        };

        result.unwrap_or_else(|e| {
            eprintln!("{:#}", e);
            warn!("launch of {:?} abandoned: {:#}", command, e);
            Dispatch::Abandoned
        })
    }

    /// Read-Eval-Print Loop on the controlling terminal.
    ///
    /// Stops on end of input, on `Ctrl-C`, or when the line `exit` is read.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.is_empty() && line != EXIT_COMMAND {
                        // Losing an editor history entry never ends the session.
                        if let Err(e) = rl.add_history_entry(line.as_str()) {
                            warn!("could not record console history: {}", e);
                        }
                    }
                    if self.accept_console_line(&line).is_break() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        info!("console closed");
        Ok(())
    }

    /// Handle one line read from the console. `Break` ends the loop.
    fn accept_console_line(&mut self, line: &str) -> ControlFlow<()> {
        debug!("read: {} (length = {})", line, line.len());
        if self.config.echo_input {
            println!("read: {} (length = {})", line, line.len());
        }
        if line == EXIT_COMMAND {
            return ControlFlow::Break(());
        }
        if !line.is_empty() {
            self.process_line(line);
        }
        ControlFlow::Continue(())
    }

    /// Dispatch the fixed list of [`SELF_TEST_LINES`] in order.
    pub fn run_self_test(&mut self) {
        println!("*** Running basic tests ***");
        for (i, line) in SELF_TEST_LINES.iter().enumerate() {
            println!("* {}. Testing {} *", i + 1, line);
            self.process_line(line);
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
