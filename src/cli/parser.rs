use crate::config::split_repository;

/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Export {
        snapshot: Option<String>,
        repo: Option<String>,
    },
    Help,
    Unknown(String),
}

pub const USAGE: &str = "Usage: minutes-data [export] [--snapshot <path|url>] [--repo <owner>/<repo>]";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    let rest = match args.get(1).map(String::as_str) {
        None => &args[args.len()..],
        Some("export") => &args[2..],
        Some("help" | "--help" | "-h") if args.len() == 2 => return Command::Help,
        Some(flag) if flag.starts_with("--") => &args[1..],
        Some(cmd) => return Command::Unknown(cmd.to_string()),
    };
    parse_export_flags(rest)
}

fn parse_export_flags(flags: &[String]) -> Command {
    let mut snapshot = None;
    let mut repo = None;

    let mut iter = flags.iter();
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--snapshot" => &mut snapshot,
            "--repo" => &mut repo,
            other => return Command::Unknown(other.to_string()),
        };
        let Some(value) = iter.next() else {
            return Command::Unknown(format!("Missing value for {flag}"));
        };
        if slot.is_some() {
            return Command::Unknown(format!("{flag} given more than once"));
        }
        *slot = Some(value.clone());
    }

    if let Some(repo_arg) = &repo {
        if split_repository(repo_arg).is_none() {
            return Command::Unknown(
                "Invalid repository format. Please use <owner>/<repo>.".to_string(),
            );
        }
    }

    Command::Export { snapshot, repo }
}
