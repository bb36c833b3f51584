//! A small line-oriented command interpreter.
//!
//! A raw input line is split into `;`-separated segments, each optionally
//! marked for background execution with `&`. Every segment is either a single
//! command with optional `<`/`>` file redirection or a two-stage `|`
//! pipeline, and is run as child processes of the current process. The line
//! `!!` replays the previously dispatched line.
//!
//! The main entry point is [`Interpreter`]. The parsing stages are exposed as
//! plain functions: [`tokenize`], [`resolve_redirection`], [`split_pipeline`]
//! and [`segment`]. Process creation lives in [`launcher`].

mod builtin;
pub mod command;
pub mod config;
mod interpreter;
pub mod launcher;
pub mod pipeline;
pub mod redirect;
pub mod segment;
pub mod tokenizer;

pub use builtin::Builtin;
pub use config::{Args, ShellConfig};
pub use interpreter::{Dispatch, Interpreter};
pub use pipeline::{Pipeline, split_pipeline};
pub use redirect::{Redirection, resolve_redirection};
pub use segment::{CommandSegment, History, Recall, Segmentation, segment};
pub use tokenizer::{ArgVector, tokenize};
