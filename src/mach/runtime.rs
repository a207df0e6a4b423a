use super::breakpoints::Hit;
use super::command::{Command, Opt, Target};
use super::{lint, Breakpoints, Function, Listing, Memory, Output, Stack, Stdout, Var};
use crate::error;
use crate::lang::ast::*;
use crate::lang::{lex, parse_expression, Column, Entry, Error, Line, LineNumber, MaxValue};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::VecDeque;
use std::time::Instant;

type Result<T> = std::result::Result<T, Error>;

/// What the driver should do next.
#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Break(u16),
    Input(String),
    Errors(Vec<Error>),
}

/// Outcome of executing a single program line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Advance {
    Continue,
    Break(u16),
    Ended,
    Failed,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum State {
    Line,
    File,
    Running,
    Break,
    ErrorFile,
}

#[derive(Debug)]
struct PendingInput {
    vars: Vec<Ident>,
    next: usize,
    line: LineNumber,
}

impl PendingInput {
    fn prompt(&self) -> String {
        let names: Vec<String> = self.vars[self.next..].iter().map(|v| v.to_string()).collect();
        format!("[{}]? ", names.join(","))
    }
}

/// ## Execution engine
///
/// Owns the program, variables, call stack and breakpoints. The driver
/// feeds it lines with `enter` and polls `execute` for events; nothing
/// here blocks.
pub struct Runtime {
    listing: Listing,
    vars: Var,
    stack: Stack<u16>,
    breakpoints: Breakpoints,
    memory: Memory,
    output: Box<dyn Output>,
    rng: StdRng,
    state: State,
    cursor: u16,
    branch: Option<u16>,
    direct: Option<(String, Statement)>,
    run_queue: VecDeque<i16>,
    input: Option<PendingInput>,
    errors: Vec<Error>,
    resume: bool,
    stepping: bool,
    file_line: Option<usize>,
    trace: bool,
    timing: bool,
    run_on_load: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Box::new(Stdout))
    }
}

impl Runtime {
    pub fn new(output: Box<dyn Output>) -> Runtime {
        let mut vars = Var::new();
        if let Some(s) = Ident::from_char('S') {
            vars.store(s, 256);
        }
        Runtime {
            listing: Listing::default(),
            vars,
            stack: Stack::new(),
            breakpoints: Breakpoints::default(),
            memory: Memory::default(),
            output,
            rng: StdRng::from_entropy(),
            state: State::Line,
            cursor: 0,
            branch: None,
            direct: None,
            run_queue: VecDeque::new(),
            input: None,
            errors: vec![],
            resume: false,
            stepping: false,
            file_line: None,
            trace: false,
            timing: false,
            run_on_load: false,
        }
    }

    /// Replace the random source, for repeatable runs.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    /// The line a run is at, or stopped at while debugging.
    pub fn cursor(&self) -> u16 {
        self.cursor
    }

    pub fn call_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn run_on_load(&self) -> bool {
        self.run_on_load
    }

    pub fn set_trace(&mut self, on: bool) {
        self.trace = on;
    }

    pub fn set_timing(&mut self, on: bool) {
        self.timing = on;
    }

    /// Accept one line of input: a program edit, a direct statement, or
    /// the answer to a pending INPUT. Returns false for blank lines.
    pub fn enter(&mut self, text: &str) -> bool {
        if let Some(file_line) = self.file_line.as_mut() {
            *file_line += 1;
        }
        if self.input.is_some() {
            self.enter_input(text);
            return true;
        }
        let source = text.trim_end();
        if source.trim().is_empty() {
            return false;
        }
        let entry = match Line::entry(source) {
            Ok(entry) => entry,
            Err(error) => {
                self.fail(error);
                return true;
            }
        };
        if self.state == State::ErrorFile {
            return true;
        }
        match entry {
            Entry::Store(number, statement) => {
                self.trace_entry(&format!("store {}", number));
                self.listing.insert(Line::new(number, source, statement));
            }
            Entry::Delete(number) => {
                self.trace_entry(&format!("delete {}", number));
                self.delete(number);
            }
            Entry::Direct(statement) => {
                self.trace_entry(&format!("direct {}", source.trim()));
                self.direct = Some((source.to_string(), statement));
            }
        }
        true
    }

    fn trace_entry(&mut self, text: &str) {
        if self.trace {
            self.output.trace(&format!("[trace] {}\n", text));
        }
    }

    fn delete(&mut self, number: u16) {
        if self.state == State::Break {
            self.report(error!(DeleteWhileDebugging));
            return;
        }
        if self.listing.remove(number).is_some() {
            self.breakpoints.forget(number);
        } else if self.file_line.is_none() {
            self.fail(error!(LineNotInProgram, Some(number);
                format!("Line number is not in the program: '{}'.", number)));
        }
    }

    /// Run for at most `cycles` program lines.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if !self.errors.is_empty() {
                return Event::Errors(std::mem::take(&mut self.errors));
            }
            if let Some(input) = &self.input {
                return Event::Input(input.prompt());
            }
            if let Some((source, statement)) = self.direct.take() {
                if let Err(error) = self.exec(&statement, None) {
                    self.fail(error.in_source(&source));
                }
                continue;
            }
            match self.state {
                State::Running => {
                    self.advance();
                }
                State::Break => return Event::Break(self.cursor),
                _ => return Event::Stopped,
            }
        }
        Event::Running
    }

    /// Execute the line at the cursor, or stop at a breakpoint on it.
    pub fn advance(&mut self) -> Advance {
        if self.state != State::Running {
            return Advance::Ended;
        }
        if self.input.is_some() {
            return Advance::Continue;
        }
        let line = match self.listing.get(self.cursor) {
            Some(line) => line,
            None => {
                self.fail(error!(LineNotInProgram, Some(self.cursor);
                    format!("Line number is not in the program: '{}'.", self.cursor)));
                return Advance::Failed;
            }
        };
        if self.resume {
            self.resume = false;
        } else if let Some(hit) = self.breakpoints.hit(line.number()) {
            if hit == Hit::Persistent {
                self.output.write(&format!("Breakpoint: {}\n", line.number()));
            }
            self.output.write(&format!("[{}]\n", line.source()));
            self.state = State::Break;
            self.stepping = false;
            return Advance::Break(line.number());
        }
        if self.trace {
            self.output.trace(&format!("[trace] {}\n", line.source()));
        }
        let started = if self.timing { Some(Instant::now()) } else { None };
        self.branch = None;
        let result = self.exec(line.statement(), Some(line.number()));
        if let Some(started) = started {
            let ms = started.elapsed().as_millis();
            self.output.trace(&format!("[{}] = {} ms\n", line.number(), ms));
        }
        if let Err(error) = result {
            self.fail(error.in_line_number(Some(line.number())).in_source(line.source()));
            return Advance::Failed;
        }
        if self.state != State::Running {
            return Advance::Ended;
        }
        if self.input.is_some() {
            return Advance::Continue;
        }
        self.finish_line()
    }

    fn finish_line(&mut self) -> Advance {
        let next = match self.branch.take() {
            Some(target) => Some(target),
            None => self.listing.next_after(self.cursor),
        };
        match next {
            Some(number) => {
                self.cursor = number;
                if self.stepping {
                    self.stepping = false;
                    self.breakpoints.arm(number);
                }
                Advance::Continue
            }
            None => {
                let mut error = error!(NoEnd, Some(self.cursor));
                if let Some(line) = self.listing.get(self.cursor) {
                    error = error.in_source(line.source());
                }
                self.fail(error);
                Advance::Failed
            }
        }
    }

    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    fn fail(&mut self, error: Error) {
        let error = match self.file_line {
            Some(file_line) => error.in_file_line(file_line),
            None => error,
        };
        self.errors.push(error);
        self.input = None;
        if self.state == State::Running {
            self.stop();
        }
        if self.file_line.is_some() {
            self.state = State::ErrorFile;
        }
    }

    fn stop(&mut self) {
        self.stack.clear();
        self.breakpoints.disarm();
        self.drop_run_queue();
        self.input = None;
        self.branch = None;
        self.resume = false;
        self.stepping = false;
        self.state = if self.file_line.is_some() {
            State::File
        } else {
            State::Line
        };
    }

    fn drop_run_queue(&mut self) {
        if !self.run_queue.is_empty() {
            self.output.diagnostic(&error!(ExcessInput));
            self.run_queue.clear();
        }
    }

    fn start_run(&mut self, target: u16) {
        self.stack.clear();
        self.breakpoints.disarm();
        self.cursor = target;
        self.branch = None;
        self.resume = false;
        self.stepping = false;
        self.state = State::Running;
    }

    fn exec(&mut self, statement: &Statement, line: LineNumber) -> Result<()> {
        match statement {
            Statement::Rem(..) => Ok(()),
            Statement::Let(_, Variable(_, ident), expr) => {
                let value = self.eval(expr)?;
                self.vars.store(*ident, value);
                Ok(())
            }
            Statement::Print(_, items) => self.print(items),
            Statement::If(_, lhs, relation, rhs, then) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                if relation.test(lhs, rhs) {
                    self.exec(then, line)
                } else {
                    Ok(())
                }
            }
            Statement::Input(_, vars) => {
                self.input(vars, line);
                Ok(())
            }
            Statement::List(col, from, to) => self.list(col, from.as_ref(), to.as_ref()),
            Statement::Clear(_) => {
                self.listing.clear();
                self.breakpoints.clear_all();
                self.memory.clear();
                self.stop();
                Ok(())
            }
            Statement::End(_) => {
                self.stop();
                Ok(())
            }
            Statement::Goto(col, expr) => {
                self.direct_in_break(col, line)?;
                let target = self.target("GOTO", expr)?;
                match line {
                    Some(_) => self.branch = Some(target),
                    None => {
                        self.run_queue.clear();
                        self.start_run(target);
                    }
                }
                Ok(())
            }
            Statement::Gosub(col, expr) => {
                self.direct_in_break(col, line)?;
                let target = self.target("GOSUB", expr)?;
                let ret = match line.and_then(|n| self.listing.next_after(n)) {
                    Some(ret) => ret,
                    None => return Err(error!(InvalidReturnAddress, ..col)),
                };
                self.stack.push(ret).map_err(|e| e.in_column(col))?;
                self.branch = Some(target);
                Ok(())
            }
            Statement::Return(col) => {
                self.direct_in_break(col, line)?;
                let ret = self.stack.pop().map_err(|e| e.in_column(col))?;
                self.branch = Some(ret);
                Ok(())
            }
            Statement::Run(col, args) => {
                self.direct_in_break(col, line)?;
                match line {
                    Some(number) => {
                        if !args.is_empty() {
                            let warning = error!(RunArgumentsIgnored, Some(number), ..col;
                                format!("RUN parameters not supported in programs, only in direct execution: Line [{}].", number));
                            self.output.diagnostic(&warning);
                        }
                        self.stack.clear();
                        self.drop_run_queue();
                        self.branch = self.listing.first();
                    }
                    None => {
                        let first = match self.listing.first() {
                            Some(first) => first,
                            None => return Err(error!(NoProgram, ..col)),
                        };
                        let mut queue = VecDeque::new();
                        for arg in args {
                            queue.push_back(self.eval(arg)?);
                        }
                        self.run_queue = queue;
                        self.start_run(first);
                    }
                }
                Ok(())
            }
        }
    }

    fn direct_in_break(&self, col: &Column, line: LineNumber) -> Result<()> {
        if line.is_none() && self.state == State::Break {
            return Err(error!(UseContinue, ..col));
        }
        Ok(())
    }

    fn target(&mut self, word: &str, expr: &Expression) -> Result<u16> {
        let number = self.eval(expr)?;
        if number >= 1 && self.listing.contains(number as u16) {
            Ok(number as u16)
        } else {
            Err(error!(UndefinedLine, ..&expr.column();
                format!("{} target does not exist '{}'.", word, number)))
        }
    }

    fn print(&mut self, items: &[PrintItem]) -> Result<()> {
        let mut s = String::new();
        for item in items {
            match item {
                PrintItem::String(_, text) => s.push_str(text),
                PrintItem::Expression(expr) => s.push_str(&self.eval(expr)?.to_string()),
                PrintItem::Comma(_) => {
                    let width = 8 - s.chars().count() % 8;
                    s.push_str(&" ".repeat(width));
                }
                PrintItem::Semicolon(_) => {}
            }
        }
        match items.last() {
            Some(PrintItem::Comma(_)) | Some(PrintItem::Semicolon(_)) => {}
            _ => s.push('\n'),
        }
        self.output.write(&s);
        Ok(())
    }

    fn list(&mut self, col: &Column, from: Option<&Expression>, to: Option<&Expression>) -> Result<()> {
        let max = LineNumber::max_value() as i16;
        let low = match from {
            Some(expr) => self.eval(expr)?,
            None => 1,
        };
        let high = match to {
            Some(expr) => self.eval(expr)?,
            None => max,
        };
        if low > high {
            return Err(error!(ListOrder, ..col;
                format!("LIST parameters must be in logical order, not '{}','{}'.", low, high)));
        }
        if low < 1 || high < 1 {
            return Err(error!(ListRange, ..col;
                format!("LIST parameters must be in the range 1 to 32767 not '{}, {}'.", low, high)));
        }
        let (low, high) = (low as u16, high as u16);
        let mut s = String::new();
        match (from, to, self.listing.get(low)) {
            (Some(_), None, Some(line)) => {
                s.push_str(line.source());
                s.push('\n');
            }
            _ => {
                for line in self.listing.range(low..=high) {
                    s.push_str(line.source());
                    s.push('\n');
                }
            }
        }
        self.output.write(&s);
        Ok(())
    }

    fn input(&mut self, vars: &[Variable], line: LineNumber) {
        let mut next = 0;
        while next < vars.len() {
            match self.run_queue.pop_front() {
                Some(value) => self.vars.store(vars[next].1, value),
                None => break,
            }
            next += 1;
        }
        if next < vars.len() {
            self.input = Some(PendingInput {
                vars: vars.iter().map(|v| v.1).collect(),
                next,
                line,
            });
        }
    }

    fn enter_input(&mut self, text: &str) {
        let mut pending = match self.input.take() {
            Some(pending) => pending,
            None => return,
        };
        let mut pieces = text.trim_end().split(',');
        while pending.next < pending.vars.len() {
            let piece = match pieces.next() {
                Some(piece) => piece.trim(),
                None => break,
            };
            match self.input_value(piece) {
                Ok(value) => self.vars.store(pending.vars[pending.next], value),
                Err(_) => {
                    let mut error = error!(InvalidInput;
                        format!("Invalid value in INPUT: '{}'.", piece));
                    if let Some(number) = pending.line {
                        error = error.in_line_number(Some(number));
                    }
                    self.fail(error);
                    return;
                }
            }
            pending.next += 1;
        }
        if pieces.next().is_some() {
            self.output.diagnostic(&error!(ExcessInput));
        }
        if pending.next < pending.vars.len() {
            self.input = Some(pending);
        } else if pending.line.is_some() && self.state == State::Running {
            self.finish_line();
        }
    }

    fn input_value(&mut self, text: &str) -> Result<i16> {
        let tokens = lex(text)?;
        let expr = parse_expression(&tokens)?;
        self.eval(&expr)
    }

    fn eval(&mut self, expr: &Expression) -> Result<i16> {
        use Expression::*;
        Ok(match expr {
            Integer(_, n) => *n,
            Var(col, ident) => self.vars.fetch(*ident).map_err(|e| e.in_column(col))?,
            Rnd(col, arg) => {
                let n = self.eval(arg)?;
                Function::rnd(&mut self.rng, n).map_err(|e| e.in_column(col))?
            }
            Usr(col, args) => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg)?);
                }
                Function::usr(&mut self.memory, &values).map_err(|e| e.in_column(col))?
            }
            Negation(_, expr) => self.eval(expr)?.wrapping_neg(),
            Absolute(_, expr) => self.eval(expr)?.wrapping_abs(),
            Grouping(_, expr) => self.eval(expr)?,
            Multiply(_, lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                lhs.wrapping_mul(self.eval(rhs)?)
            }
            Divide(col, lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero, ..col));
                }
                lhs.wrapping_div(rhs)
            }
            Add(_, lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                lhs.wrapping_add(self.eval(rhs)?)
            }
            Subtract(_, lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                lhs.wrapping_sub(self.eval(rhs)?)
            }
        })
    }

    /// Abort a run or a pending INPUT. Idle prompts ignore it.
    pub fn interrupt(&mut self) {
        if self.input.is_some() {
            self.fail(error!(InputAborted));
        } else if self.state == State::Running {
            let mut error = error!(Interrupted, Some(self.cursor));
            if let Some(line) = self.listing.get(self.cursor) {
                error = error.in_source(line.source());
            }
            self.fail(error);
        }
    }

    /// Start loading a file: the old program, breakpoints and USR memory go.
    pub fn load_begin(&mut self) {
        self.listing.clear();
        self.breakpoints.clear_all();
        self.memory.clear();
        self.direct = None;
        self.file_line = Some(0);
        self.stop();
    }

    /// Returns true if the file loaded without errors.
    pub fn load_end(&mut self) -> bool {
        let clean = self.state != State::ErrorFile;
        self.file_line = None;
        if self.state == State::File || self.state == State::ErrorFile {
            self.state = State::Line;
        }
        clean
    }

    pub fn is_loading(&self) -> bool {
        self.file_line.is_some()
    }

    fn debugging(&self, name: &str) -> Result<()> {
        if self.state == State::Break {
            Ok(())
        } else {
            Err(error!(NotDebugging;
                format!("%{} command only works while debugging.", name)))
        }
    }

    pub fn cont(&mut self) -> Result<()> {
        self.debugging("continue")?;
        self.state = State::Running;
        self.resume = true;
        Ok(())
    }

    /// Execute the statement at the cursor, then break on the next line.
    pub fn step(&mut self) -> Result<()> {
        self.debugging("step")?;
        if let Some(line) = self.listing.get(self.cursor) {
            self.check_step(line.statement())?;
        }
        self.state = State::Running;
        self.resume = true;
        self.stepping = true;
        Ok(())
    }

    fn check_step(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Return(_) if self.stack.is_empty() => Err(error!(EmptyCallStack)),
            Statement::Goto(_, target) | Statement::Gosub(_, target) => {
                if let Some((_, number)) = target.literal() {
                    if number < 1 || !self.listing.contains(number as u16) {
                        return Err(error!(NoBranchTarget;
                            format!("Branch target does not exist '{}'.", number)));
                    }
                }
                Ok(())
            }
            Statement::If(_, lhs, relation, rhs, then) => {
                if lhs.calls_function() || rhs.calls_function() {
                    return Ok(());
                }
                match (self.eval(lhs), self.eval(rhs)) {
                    (Ok(lhs), Ok(rhs)) if relation.test(lhs, rhs) => self.check_step(then),
                    _ => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// Abandon the run being debugged.
    pub fn exit(&mut self) -> Result<()> {
        self.debugging("exit")?;
        self.stop();
        Ok(())
    }

    pub fn print_vars(&mut self) {
        let table = self.vars.table();
        self.output.write(&table);
    }

    pub fn backtrace(&mut self) -> Result<()> {
        self.debugging("backtrace")?;
        let mut s = String::from("-- Call Stack --\n");
        for number in self.stack.iter() {
            if let Some(line) = self.listing.get(*number) {
                s.push_str(line.source());
                s.push('\n');
            }
        }
        self.output.write(&s);
        Ok(())
    }

    pub fn set_breakpoint(&mut self, number: u16) -> Result<()> {
        self.breakpoints.set(number, &self.listing)
    }

    pub fn clear_breakpoint(&mut self, number: u16) -> Result<()> {
        self.breakpoints.clear(number)
    }

    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear_all();
    }

    pub fn list_breakpoints(&mut self) {
        if self.breakpoints.is_empty() {
            self.output.write("No breakpoints set.\n");
            return;
        }
        let mut s = String::from("Breakpoints set on:\n");
        for number in self.breakpoints.iter() {
            if let Some(line) = self.listing.get(number) {
                s.push_str(line.source());
                s.push('\n');
            }
        }
        self.output.write(&s);
    }

    pub fn lint(&mut self, strict: bool) {
        for error in lint(&self.listing, strict) {
            self.output.diagnostic(&error);
        }
    }

    fn option(&mut self, opt: Opt, value: Option<bool>) {
        let flag = match opt {
            Opt::Log => &mut self.trace,
            Opt::Time => &mut self.timing,
            Opt::RunOnLoad => &mut self.run_on_load,
        };
        match value {
            Some(value) => *flag = value,
            None => {
                let text = format!("Option: {} is {}.\n", opt, *flag);
                self.output.write(&text);
            }
        }
    }

    /// Carry out a command-language request. File and session commands
    /// belong to the driver and are ignored here.
    pub fn command(&mut self, command: &Command) {
        let result = match command {
            Command::Opt(opt, value) => {
                self.option(*opt, *value);
                Ok(())
            }
            Command::Break(None) => {
                self.list_breakpoints();
                Ok(())
            }
            Command::Break(Some(number)) => self.set_breakpoint(*number),
            Command::Delete(Target::Line(number)) => self.clear_breakpoint(*number),
            Command::Delete(Target::All) => {
                self.clear_breakpoints();
                Ok(())
            }
            Command::Continue => self.cont(),
            Command::Step => self.step(),
            Command::Vars => {
                self.print_vars();
                Ok(())
            }
            Command::Backtrace => self.backtrace(),
            Command::Exit => self.exit(),
            Command::Lint(strict) => {
                self.lint(*strict);
                Ok(())
            }
            Command::Help
            | Command::ShortHelp
            | Command::Quit
            | Command::LoadFile(_)
            | Command::SaveFile(_) => Ok(()),
        };
        if let Err(error) = result {
            self.report(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::Capture;

    fn runtime() -> (Runtime, Capture) {
        let capture = Capture::new();
        let mut runtime = Runtime::new(Box::new(capture.clone()));
        runtime.seed(1);
        (runtime, capture)
    }

    fn drain(runtime: &mut Runtime, capture: &Capture) -> String {
        let mut s = String::new();
        loop {
            match runtime.execute(5000) {
                Event::Errors(errors) => {
                    for error in errors {
                        s.push_str(&format!("{}\n", error));
                    }
                }
                Event::Running => {}
                _ => break,
            }
            s.push_str(&capture.take());
        }
        s.push_str(&capture.take());
        s
    }

    #[test]
    fn test_advance_reports_each_line() {
        let (mut r, _) = runtime();
        r.enter("10 A=1");
        r.enter("20 END");
        r.enter("RUN");
        assert_eq!(r.execute(0), Event::Running);
        assert_eq!(r.execute(1), Event::Running);
        assert_eq!(r.state(), State::Running);
        assert_eq!(r.advance(), Advance::Continue);
        assert_eq!(r.advance(), Advance::Ended);
        assert_eq!(r.state(), State::Line);
        assert_eq!(r.advance(), Advance::Ended);
    }

    #[test]
    fn test_advance_waits_for_input() {
        let (mut r, c) = runtime();
        r.enter("10 INPUT A");
        r.enter("20 PRINT A");
        r.enter("30 END");
        r.enter("RUN");
        assert_eq!(r.execute(5), Event::Input("[A]? ".to_string()));
        assert_eq!(r.advance(), Advance::Continue);
        assert_eq!(r.cursor(), 10);
        assert_eq!(r.execute(5), Event::Input("[A]? ".to_string()));
        r.enter("7");
        assert_eq!(drain(&mut r, &c), "7\n");
    }

    #[test]
    fn test_s_starts_at_256() {
        let (mut r, c) = runtime();
        r.enter("PRINT S");
        assert_eq!(drain(&mut r, &c), "256\n");
    }

    #[test]
    fn test_breakpoint_then_step() {
        let (mut r, c) = runtime();
        r.enter("10 A=1");
        r.enter("20 B=2");
        r.enter("30 END");
        r.set_breakpoint(20).unwrap();
        r.enter("RUN");
        assert_eq!(drain(&mut r, &c), "Breakpoint: 20\n[20 B=2]\n");
        assert_eq!(r.state(), State::Break);
        assert!(r.vars().is_defined(Ident::from_char('A').unwrap()));
        assert!(!r.vars().is_defined(Ident::from_char('B').unwrap()));
        r.step().unwrap();
        assert_eq!(drain(&mut r, &c), "[30 END]\n");
        assert_eq!(r.execute(1), Event::Break(30));
        r.step().unwrap();
        assert_eq!(drain(&mut r, &c), "");
        assert_eq!(r.state(), State::Line);
    }

    #[test]
    fn test_continue_outside_break() {
        let (mut r, _) = runtime();
        let e = r.cont().unwrap_err();
        assert_eq!(e.to_string(), "CLE #08: %continue command only works while debugging.");
    }

    #[test]
    fn test_run_in_break_rejected() {
        let (mut r, c) = runtime();
        r.enter("10 END");
        r.set_breakpoint(10).unwrap();
        r.enter("RUN");
        drain(&mut r, &c);
        r.enter("RUN");
        assert_eq!(
            drain(&mut r, &c),
            "CLE #16: Use %c to continue from a breakpoint instead of RUN.\nRUN\n^\n"
        );
        assert_eq!(r.state(), State::Break);
    }

    #[test]
    fn test_interrupt() {
        let (mut r, c) = runtime();
        r.enter("10 GOTO 10");
        r.enter("RUN");
        assert_eq!(r.execute(100), Event::Running);
        r.interrupt();
        assert_eq!(
            drain(&mut r, &c),
            "Runtime Error: Error #349: Program execution interrupted.\n10 GOTO 10\n^\n"
        );
        assert_eq!(r.state(), State::Line);
        r.interrupt();
        assert_eq!(r.execute(1), Event::Stopped);
    }

    #[test]
    fn test_load_error_keeps_earlier_lines() {
        let (mut r, c) = runtime();
        r.enter("5 END");
        r.load_begin();
        r.enter("10 PRINT 1");
        r.enter("");
        r.enter("20 PRINT (");
        r.enter("30 END");
        assert_eq!(r.state(), State::ErrorFile);
        assert!(!r.load_end());
        let out = drain(&mut r, &c);
        assert!(out.starts_with("Syntax Error: Error #293:"));
        assert!(out.contains("(file line 3)"));
        let listing = r.listing();
        let lines: Vec<u16> = listing.lines().map(|l| l.number()).collect();
        assert_eq!(lines, vec![10]);
    }

    #[test]
    fn test_options() {
        let (mut r, c) = runtime();
        r.command(&Command::Opt(Opt::Log, None));
        r.command(&Command::Opt(Opt::Log, Some(true)));
        r.enter("10 END");
        r.enter("RUN");
        assert_eq!(
            drain(&mut r, &c),
            "Option: logging is false.\n[trace] store 10\n[trace] direct RUN\n[trace] 10 END\n"
        );
    }
}
