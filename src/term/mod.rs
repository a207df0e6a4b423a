extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Command, Event, Listing, Output, Runtime, State};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const PROMPT: &str = "tbp:> ";

const LOGO: &str = "Tiny BASIC: interpreter, debugger and linter\n\
                    Type %help for commands, CTRL-D to quit.\n";

const SHORT_HELP: &str = "\
%help                     Full help
%quit | %q                Quit
%loadfile | %lf \"file\"    Load a program
%savefile | %sf \"file\"    Save the program
%opt log|time|run_on_load [t|f]
%lint [strict]            Check the program
%break | %bp [n]          List or set breakpoints
%delete | %d n|*          Delete breakpoints
%continue | %c            Resume from a breakpoint
%step | %s                Execute one line
%vars | %v                Show variables
%backtrace | %bt          Show the GOSUB call stack
%exit | %e                Leave the debugger
";

const HELP: &str = "\
Enter Tiny BASIC statements with a line number to store them, without
one to run them now. A bare line number deletes that line. Lines typed
at the prompt that start with % are commands.

Command line: tinybasic [--nologo] [-c \"cmd^cmd\"] [FILE]

";

/// A line waiting to be processed before the next prompt.
enum Queued {
    Typed(String),
    FileLine(String),
    LoadEnd,
}

struct Args {
    logo: bool,
    file: Option<String>,
    commands: Vec<String>,
}

impl Args {
    fn parse() -> Args {
        let mut args = Args {
            logo: true,
            file: None,
            commands: vec![],
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--nologo" => args.logo = false,
                "-c" | "--commands" => {
                    if let Some(commands) = iter.next() {
                        args.commands
                            .extend(commands.split('^').map(|s| s.to_string()));
                    }
                }
                _ => args.file = Some(arg),
            }
        }
        args
    }
}

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let args = Args::parse();
    let command = Arc::new(Interface::new("tinybasic")?);
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);
    let mut runtime = Runtime::new(Box::new(Console(command.clone())));
    let mut queue: VecDeque<Queued> = VecDeque::new();

    if args.logo {
        command.write_fmt(format_args!("{}", LOGO))?;
    }
    if let Some(filename) = &args.file {
        if let Err(error) = load(&mut runtime, &mut queue, filename) {
            print_error(&command, &error)?;
        }
    }
    queue.extend(args.commands.into_iter().map(Queued::Typed));

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(&command, error)?;
                }
            }
            Event::Input(prompt) => match queue.pop_front() {
                Some(Queued::Typed(string)) | Some(Queued::FileLine(string)) => {
                    runtime.enter(&string);
                }
                Some(Queued::LoadEnd) => {
                    queue.push_front(Queued::LoadEnd);
                    runtime.interrupt();
                }
                None => {
                    input.set_prompt(&prompt)?;
                    match input.read_line()? {
                        ReadResult::Input(string) => {
                            if runtime.enter(&string) {
                                input.add_history_unique(string);
                            }
                        }
                        ReadResult::Signal(Signal::Interrupt) => {
                            input.set_buffer("")?;
                            input.lock_reader().cancel_read_line()?;
                            runtime.interrupt();
                        }
                        ReadResult::Signal(_) | ReadResult::Eof => break,
                    }
                }
            },
            Event::Stopped | Event::Break(_) => {
                let string = match queue.pop_front() {
                    Some(Queued::FileLine(string)) => {
                        runtime.enter(&string);
                        continue;
                    }
                    Some(Queued::LoadEnd) => {
                        if runtime.load_end() && runtime.run_on_load() {
                            queue.push_front(Queued::Typed("RUN".to_string()));
                        }
                        continue;
                    }
                    Some(Queued::Typed(string)) => string,
                    None => {
                        let prompt = match runtime.state() {
                            State::Break => format!("DEBUG({}):> ", runtime.cursor()),
                            _ => PROMPT.to_string(),
                        };
                        command.set_prompt(&prompt)?;
                        let saved_completer = command.completer();
                        command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                        let result = command.read_line()?;
                        command.set_completer(saved_completer);
                        match result {
                            ReadResult::Input(string) => string,
                            ReadResult::Signal(_) | ReadResult::Eof => break,
                        }
                    }
                };
                if !Command::is_command(&string) {
                    if runtime.enter(&string) {
                        command.add_history_unique(string);
                    }
                    continue;
                }
                command.add_history_unique(string.clone());
                match Command::parse(&string) {
                    Err(error) => print_error(&command, &error)?,
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        command.write_fmt(format_args!("{}{}{}", LOGO, HELP, SHORT_HELP))?
                    }
                    Ok(Command::ShortHelp) => command.write_fmt(format_args!("{}", SHORT_HELP))?,
                    Ok(Command::LoadFile(filename)) => {
                        if let Err(error) = load(&mut runtime, &mut queue, &filename) {
                            print_error(&command, &error)?;
                        }
                    }
                    Ok(Command::SaveFile(filename)) => {
                        if let Err(error) = save(&runtime.listing(), &filename) {
                            print_error(&command, &error)?;
                        }
                    }
                    Ok(cmd) => runtime.command(&cmd),
                }
            }
        }
    }
    Ok(())
}

fn print_error(interface: &Interface<DefaultTerminal>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

/// Program output goes through the line editor so it does not
/// collide with the prompt.
struct Console(Arc<Interface<DefaultTerminal>>);

impl Output for Console {
    fn write(&mut self, text: &str) {
        let _ = self.0.write_fmt(format_args!("{}", text));
    }

    fn diagnostic(&mut self, error: &Error) {
        let _ = print_error(&self.0, error);
    }

    fn trace(&mut self, text: &str) {
        let _ = self
            .0
            .write_fmt(format_args!("{}", Style::new().dimmed().paint(text)));
    }
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if let Ok(num) = prompter.buffer().trim().parse::<u16>() {
            if let Some(line) = self.listing.get(num) {
                let mut comp = Completion::simple(line.source().to_string());
                comp.suffix = linefeed::complete::Suffix::None;
                return Some(vec![comp]);
            }
        }
        None
    }
}

/// Queue a file's lines ahead of anything else waiting.
fn load(runtime: &mut Runtime, queue: &mut VecDeque<Queued>, filename: &str) -> Result<(), Error> {
    if runtime.state() == State::Break {
        return Err(error!(LoadWhileDebugging));
    }
    if filename.trim().is_empty() {
        return Err(error!(InvalidFilename));
    }
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => {
                return Err(error!(FileNotFound;
                    format!("File does not exist: '{}'.", filename)))
            }
            _ => {
                return Err(error!(InvalidFilename;
                    format!("Filename is invalid: '{}' ({}).", filename, error)))
            }
        },
    };
    let mut lines = vec![];
    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => {
                return Err(error!(InvalidFilename;
                    format!("Filename is invalid: '{}' ({}).", filename, error)))
            }
        }
    }
    runtime.load_begin();
    queue.push_front(Queued::LoadEnd);
    for line in lines.into_iter().rev() {
        queue.push_front(Queued::FileLine(line));
    }
    Ok(())
}

fn save(listing: &Listing, filename: &str) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(NothingToSave));
    }
    let invalid = |error: std::io::Error| {
        error!(InvalidFilename;
            format!("Filename is invalid: '{}' ({}).", filename, error))
    };
    let mut file = File::create(filename).map_err(invalid)?;
    for line in listing.lines() {
        writeln!(file, "{}", line).map_err(invalid)?;
    }
    Ok(())
}
