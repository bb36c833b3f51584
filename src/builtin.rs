use anyhow::Result;
use std::io::Write;

/// Name of the decorative command. It is matched against the whole segment
/// text before any parsing, so `ascii | wc` is not treated as this command.
pub const ASCII: &str = "ascii";

const BANNER: &str = r#"
   /\_/\        ******************************
  ( o.o )       *   "Forked, piped and fed"  *
   > ^ <        *        -- the osh cat      *
  /|   |\       ******************************
 (_|   |_)
"#;

/// Commands handled in-process without spawning anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Prints a fixed decorative banner.
    Ascii,
}

impl Builtin {
    /// Look up `command`, which must match a builtin name verbatim.
    pub fn lookup(command: &str) -> Option<Self> {
        match command {
            ASCII => Some(Builtin::Ascii),
            _ => None,
        }
    }

    /// Executes the builtin using the provided output stream.
    pub fn execute(self, stdout: &mut dyn Write) -> Result<()> {
        match self {
            Builtin::Ascii => {
                writeln!(stdout, "{}", BANNER)?;
            }
        }
        stdout.flush()?;
        Ok(())
    }
}
