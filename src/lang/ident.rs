// Used in both Token and Ast

/// One of the 26 global variables, `A` through `Z`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Ident(u8);

impl Ident {
    pub fn from_char(ch: char) -> Option<Ident> {
        let ch = ch.to_ascii_uppercase();
        if ch.is_ascii_uppercase() {
            Some(Ident(ch as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Ident> {
        if index < 26 {
            Some(Ident(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(Ident::from_char('q'), Ident::from_char('Q'));
        assert_eq!(Ident::from_char('z').map(Ident::index), Some(25));
        assert_eq!(Ident::from_char('1'), None);
        assert_eq!(Ident::from_index(26), None);
    }
}
