use crate::error;
use crate::lang::{Error, LineNumber, MaxValue};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    fn max_len(&self) -> usize {
        LineNumber::max_value() as usize
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Most recent first.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.vec.iter().rev()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(StackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(ReturnWithoutGosub)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_push_pop() {
        let mut stack: Stack<u16> = Stack::new();
        for n in 1..=3 {
            stack.push(n * 10).unwrap();
        }
        assert_eq!(stack.iter().copied().collect::<Vec<u16>>(), vec![30, 20, 10]);
        for _ in 0..3 {
            stack.pop().unwrap();
        }
        assert!(stack.is_empty());
        assert_eq!(stack.pop().unwrap_err().number(), 133);
    }

    #[test]
    fn test_overflow() {
        let mut stack: Stack<u16> = Stack::new();
        for _ in 0..32767 {
            stack.push(1).unwrap();
        }
        assert_eq!(stack.push(1).unwrap_err().number(), 134);
    }
}
