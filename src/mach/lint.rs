use super::Listing;
use crate::error;
use crate::lang::ast::*;
use crate::lang::{Error, Line};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Check a stored program without running it.
///
/// Variables are tracked in a single top-to-bottom pass. By default a
/// read that precedes an assignment anywhere later in the listing is
/// forgiven; `strict` keeps it. Neither mode follows GOTO or GOSUB, so
/// a variable set in a subroutine below its caller is always flagged
/// by `strict`.
pub fn lint(listing: &Listing, strict: bool) -> Vec<Error> {
    if listing.is_empty() {
        return vec![];
    }
    let mut linter = Linter {
        listing,
        line: None,
        initialized: BTreeSet::new(),
        uninitialized: BTreeMap::new(),
        found: vec![],
        had_end: false,
    };
    for line in listing.lines() {
        linter.line = Some(line.clone());
        line.statement().accept(&mut linter);
    }
    linter.finish(strict)
}

struct Linter<'a> {
    listing: &'a Listing,
    line: Option<Arc<Line>>,
    initialized: BTreeSet<Ident>,
    uninitialized: BTreeMap<Ident, (u16, Error)>,
    found: Vec<(u16, Error)>,
    had_end: bool,
}

impl<'a> Linter<'a> {
    fn located(&self, error: Error) -> (u16, Error) {
        match &self.line {
            Some(line) => (
                line.number(),
                error
                    .in_line_number(Some(line.number()))
                    .in_source(line.source()),
            ),
            None => (0, error),
        }
    }

    fn branch(&mut self, word: &str, target: &Expression) {
        if let Some((column, number)) = target.literal() {
            if number < 1 || !self.listing.contains(number as u16) {
                let error = error!(BadBranchTarget, ..&column;
                    format!("{} target not in program: '{}'.", word, number));
                let found = self.located(error);
                self.found.push(found);
            }
        }
    }

    fn finish(mut self, strict: bool) -> Vec<Error> {
        if !strict {
            for ident in &self.initialized {
                self.uninitialized.remove(ident);
            }
        }
        let mut all = self.found;
        all.extend(self.uninitialized.into_iter().map(|(_, found)| found));
        if !self.had_end {
            all.push((u16::max_value(), error!(MissingEnd)));
        }
        all.sort_by_key(|(line, _)| *line);
        all.into_iter().map(|(_, error)| error).collect()
    }
}

impl<'a> Visitor for Linter<'a> {
    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::End(_) => self.had_end = true,
            Statement::Clear(col) => {
                let found = self.located(error!(ClearPresent, ..col));
                self.found.push(found);
            }
            Statement::Goto(_, target) => self.branch("GOTO", target),
            Statement::Gosub(_, target) => self.branch("GOSUB", target),
            _ => {}
        }
    }

    fn visit_variable(&mut self, var: &Variable) {
        self.initialized.insert(var.1);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        if let Expression::Var(col, ident) = expr {
            if self.initialized.contains(ident) || self.uninitialized.contains_key(ident) {
                return;
            }
            let error = error!(MaybeUninitialized, ..col;
                format!("Potentially uninitialized variable '{}'.", ident));
            let found = self.located(error);
            self.uninitialized.insert(*ident, found);
        }
    }
}
