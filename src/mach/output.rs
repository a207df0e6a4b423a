use crate::lang::Error;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Where program output, warnings, lint diagnostics and traces go.
pub trait Output {
    fn write(&mut self, text: &str);

    /// Non-fatal reports: warnings and lint diagnostics.
    fn diagnostic(&mut self, error: &Error) {
        self.write(&format!("{}\n", error));
    }

    fn trace(&mut self, text: &str) {
        self.write(text);
    }
}

#[derive(Debug, Default)]
pub struct Stdout;

impl Output for Stdout {
    fn write(&mut self, text: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        let _ = lock.write_all(text.as_bytes());
        let _ = lock.flush();
    }
}

/// Collects everything written; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct Capture(Rc<RefCell<String>>);

impl Capture {
    pub fn new() -> Capture {
        Capture::default()
    }

    pub fn take(&self) -> String {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl Output for Capture {
    fn write(&mut self, text: &str) {
        self.0.borrow_mut().push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_capture_shares_buffer() {
        let capture = Capture::new();
        let mut sink: Box<dyn Output> = Box::new(capture.clone());
        sink.write("10");
        sink.diagnostic(&error!(ExcessInput));
        assert_eq!(
            capture.take(),
            "10WARN #001: More input given than variables requested by INPUT.\n"
        );
        assert_eq!(capture.take(), "");
    }
}
