use crate::error;
use crate::lang::{Error, LineNumber, MaxValue};

type Result<T> = std::result::Result<T, Error>;

/// A `%` command, typed at the prompt.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Help,
    ShortHelp,
    Quit,
    LoadFile(String),
    SaveFile(String),
    Opt(Opt, Option<bool>),
    Break(Option<u16>),
    Delete(Target),
    Continue,
    Step,
    Vars,
    Backtrace,
    Exit,
    Lint(bool),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Opt {
    Log,
    Time,
    RunOnLoad,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Target {
    Line(u16),
    All,
}

impl std::fmt::Display for Opt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Opt::Log => write!(f, "logging"),
            Opt::Time => write!(f, "time"),
            Opt::RunOnLoad => write!(f, "run_on_load"),
        }
    }
}

impl Command {
    pub fn is_command(text: &str) -> bool {
        text.trim_start().starts_with('%')
    }

    pub fn parse(text: &str) -> Result<Command> {
        let text = text.trim();
        let body = text.strip_prefix('%').unwrap_or(text);
        let (name, rest) = match body.find(char::is_whitespace) {
            Some(index) => (&body[..index], body[index..].trim()),
            None => (body, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();
        match name.to_ascii_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "?" => Ok(Command::ShortHelp),
            "quit" | "q" => Ok(Command::Quit),
            "loadfile" | "lf" => Ok(Command::LoadFile(filename(rest)?)),
            "savefile" | "sf" => Ok(Command::SaveFile(filename(rest)?)),
            "opt" => opt(&args),
            "break" | "bp" => match args.first() {
                None => Ok(Command::Break(None)),
                Some(arg) => Ok(Command::Break(Some(line_number(arg)?))),
            },
            "delete" | "d" => match args.first() {
                Some(&"*") => Ok(Command::Delete(Target::All)),
                Some(arg) => Ok(Command::Delete(Target::Line(line_number(arg)?))),
                None => Err(error!(LineParameter)),
            },
            "continue" | "c" => Ok(Command::Continue),
            "step" | "s" => Ok(Command::Step),
            "vars" | "v" => Ok(Command::Vars),
            "backtrace" | "bt" => Ok(Command::Backtrace),
            "exit" | "e" => Ok(Command::Exit),
            "lint" => match args.first() {
                None => Ok(Command::Lint(false)),
                Some(arg) if arg.eq_ignore_ascii_case("strict") => Ok(Command::Lint(true)),
                Some(arg) => Err(error!(MissingOption;
                    format!("Unknown %lint option: '{}'.", arg))),
            },
            _ => Err(error!(UnknownCommand;
                format!("Invalid or unknown command: '{}'.", text))),
        }
    }
}

fn filename(rest: &str) -> Result<String> {
    if rest.len() >= 2 && rest.starts_with('"') && rest.ends_with('"') {
        let name = &rest[1..rest.len() - 1];
        if !name.trim().is_empty() {
            return Ok(name.to_string());
        }
    }
    Err(error!(MissingFilename))
}

fn line_number(arg: &str) -> Result<u16> {
    match arg.parse::<u16>() {
        Ok(n) if n >= 1 && n <= LineNumber::max_value() => Ok(n),
        _ => Err(error!(LineParameter)),
    }
}

fn opt(args: &[&str]) -> Result<Command> {
    let opt = match args.first().map(|s| s.to_ascii_lowercase()) {
        None => return Err(error!(MissingOption)),
        Some(name) => match name.as_str() {
            "log" => Opt::Log,
            "time" => Opt::Time,
            "run_on_load" => Opt::RunOnLoad,
            _ => {
                return Err(error!(MissingOption;
                    format!("Unknown option: '{}'.", name)))
            }
        },
    };
    let value = match args.get(1).map(|s| s.to_ascii_lowercase()) {
        None => None,
        Some(value) => match value.as_str() {
            "true" | "t" => Some(true),
            "false" | "f" => Some(false),
            _ => {
                return Err(error!(MissingOption;
                    format!("Option value must be true or false, given '{}'.", value)))
            }
        },
    };
    Ok(Command::Opt(opt, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_forms() {
        assert_eq!(Command::parse("%bp 10").unwrap(), Command::Break(Some(10)));
        assert_eq!(Command::parse("%BREAK").unwrap(), Command::Break(None));
        assert_eq!(Command::parse("%d *").unwrap(), Command::Delete(Target::All));
        assert_eq!(Command::parse("%c").unwrap(), Command::Continue);
        assert_eq!(Command::parse("  %bt").unwrap(), Command::Backtrace);
        assert_eq!(Command::parse("%lint strict").unwrap(), Command::Lint(true));
        assert_eq!(Command::parse("%?").unwrap(), Command::ShortHelp);
    }

    #[test]
    fn test_filenames() {
        assert_eq!(
            Command::parse("%lf \"my prog.tbp\"").unwrap(),
            Command::LoadFile("my prog.tbp".to_string())
        );
        assert_eq!(Command::parse("%sf prog.tbp").unwrap_err().number(), 2);
        assert_eq!(Command::parse("%loadfile").unwrap_err().number(), 2);
    }

    #[test]
    fn test_opt() {
        assert_eq!(
            Command::parse("%opt time T").unwrap(),
            Command::Opt(Opt::Time, Some(true))
        );
        assert_eq!(
            Command::parse("%opt run_on_load").unwrap(),
            Command::Opt(Opt::RunOnLoad, None)
        );
        assert_eq!(Command::parse("%opt").unwrap_err().number(), 4);
        assert_eq!(Command::parse("%opt speed").unwrap_err().number(), 4);
        assert_eq!(Command::parse("%opt log maybe").unwrap_err().number(), 4);
    }

    #[test]
    fn test_errors() {
        let e = Command::parse("%frobnicate").unwrap_err();
        assert_eq!(e.to_string(), "CLE #01: Invalid or unknown command: '%frobnicate'.");
        assert_eq!(Command::parse("%break ten").unwrap_err().number(), 5);
        assert_eq!(Command::parse("%delete").unwrap_err().number(), 5);
        assert_eq!(Command::parse("%bp 40000").unwrap_err().number(), 5);
    }
}
