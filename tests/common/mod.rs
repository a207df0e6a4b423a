#![allow(dead_code)]
use std::ops::{Deref, DerefMut};
use tinybasic::mach::{Capture, Command, Event, Output, Runtime};

/// A runtime whose output is captured for comparison.
pub struct Session {
    runtime: Runtime,
    out: Capture,
    log: String,
    /// The INPUT prompt already reported and still pending.
    shown: Option<String>,
}

impl Deref for Session {
    type Target = Runtime;
    fn deref(&self) -> &Runtime {
        &self.runtime
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }
}

pub fn session() -> Session {
    let out = Capture::new();
    let mut runtime = Runtime::new(Box::new(out.clone()));
    runtime.seed(1976);
    Session {
        runtime,
        out,
        log: String::new(),
        shown: None,
    }
}

/// Enter each line in turn as the terminal would, routing `%` lines to
/// the command language and running whatever each line starts.
pub fn enter(r: &mut Session, lines: &[&str]) {
    for line in lines {
        r.shown = None;
        if Command::is_command(line) {
            match Command::parse(line) {
                Ok(command) => r.runtime.command(&command),
                Err(error) => r.out.clone().write(&format!("{}\n", error)),
            }
        } else {
            r.runtime.enter(line);
        }
        let s = drain(r, 5000);
        r.log.push_str(&s);
    }
}

/// Everything written since the last call.
pub fn exec(r: &mut Session) -> String {
    exec_n(r, 5000)
}

pub fn exec_n(r: &mut Session, cycles: usize) -> String {
    let mut s = std::mem::take(&mut r.log);
    s.push_str(&drain(r, cycles));
    s
}

fn drain(r: &mut Session, cycles: usize) -> String {
    let mut s = r.out.take();
    let mut prev_running = false;
    loop {
        let event = r.runtime.execute(cycles);
        s.push_str(&r.out.take());
        match &event {
            Event::Stopped | Event::Break(_) => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Input(prompt) => {
                if r.shown.as_ref() != Some(prompt) {
                    s.push_str(prompt);
                    r.shown = Some(prompt.clone());
                }
                break;
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

/// Enter the lines, then run everything that is pending.
pub fn run(lines: &[&str]) -> String {
    let mut r = session();
    enter(&mut r, lines);
    exec(&mut r)
}
