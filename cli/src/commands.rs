pub mod check;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Long flags that are also accepted with a single leading dash (`-file`, `-quiet`).
const SINGLE_DASH_FLAGS: &[&str] = &["file", "quiet"];

#[derive(Parser, Debug)]
#[command(name = "pingwatch")]
#[command(about = "Checks a list of servers for ICMP reachability.")]
pub struct CommandLine {
    /// Path to file containing server hostnames, one per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-file`, `-file=...` and `-quiet` into their double-dash form so
/// clap can parse them.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str().and_then(normalize_flag) {
            Some(normalized) => OsString::from(normalized),
            None => arg,
        })
        .collect()
}

fn normalize_flag(arg: &str) -> Option<String> {
    let rest: &str = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name: &str = rest.split('=').next().unwrap_or(rest);
    SINGLE_DASH_FLAGS.contains(&name).then(|| format!("-{arg}"))
}
