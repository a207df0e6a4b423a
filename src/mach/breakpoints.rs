use super::Listing;
use crate::error;
use crate::lang::Error;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, Error>;

/// Why execution stopped at a line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Hit {
    Persistent,
    OneShot,
}

/// ## Breakpoints
///
/// Persistent breakpoints set by the user plus at most one one-shot
/// breakpoint armed by single-stepping.

#[derive(Debug, Default)]
pub struct Breakpoints {
    lines: BTreeSet<u16>,
    one_shot: Option<u16>,
}

impl Breakpoints {
    pub fn set(&mut self, number: u16, listing: &Listing) -> Result<()> {
        if !listing.contains(number) {
            return Err(error!(NoSuchLine;
                format!("Line does not exist in the program: '{}'.", number)));
        }
        if !self.lines.insert(number) {
            return Err(error!(BreakpointExists;
                format!("Breakpoint already set on '{}'.", number)));
        }
        Ok(())
    }

    pub fn clear(&mut self, number: u16) -> Result<()> {
        if self.lines.remove(&number) {
            Ok(())
        } else {
            Err(error!(NoSuchLine;
                format!("No breakpoint set on line '{}'.", number)))
        }
    }

    pub fn clear_all(&mut self) {
        self.lines.clear();
        self.one_shot = None;
    }

    /// Forget a deleted line.
    pub fn forget(&mut self, number: u16) {
        self.lines.remove(&number);
        if self.one_shot == Some(number) {
            self.one_shot = None;
        }
    }

    pub fn arm(&mut self, number: u16) {
        self.one_shot = Some(number);
    }

    pub fn disarm(&mut self) {
        self.one_shot = None;
    }

    /// Checks a line about to execute. Any break consumes the one-shot.
    pub fn hit(&mut self, number: u16) -> Option<Hit> {
        let hit = if self.lines.contains(&number) {
            Some(Hit::Persistent)
        } else if self.one_shot == Some(number) {
            Some(Hit::OneShot)
        } else {
            None
        };
        if hit.is_some() {
            self.one_shot = None;
        }
        hit
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.lines.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
