use crate::error;
use crate::lang::{ast::Ident, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// The 26 integer variables. A variable holds no value until it is
/// first assigned.

#[derive(Debug, Default)]
pub struct Var {
    vars: [Option<i16>; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, ident: Ident) -> Result<i16> {
        match self.vars[ident.index()] {
            Some(val) => Ok(val),
            None => Err(error!(Uninitialized;
                format!("Accessing uninitialized variable '{}'.", ident))),
        }
    }

    pub fn store(&mut self, ident: Ident, value: i16) {
        self.vars[ident.index()] = Some(value);
    }

    pub fn is_defined(&self, ident: Ident) -> bool {
        self.vars[ident.index()].is_some()
    }

    pub fn defined(&self) -> impl Iterator<Item = (Ident, i16)> + '_ {
        self.vars
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((Ident::from_index(i)?, (*v)?)))
    }

    /// Defined variables as `X=value`, six to a row.
    pub fn table(&self) -> String {
        let mut s = String::new();
        for (index, (ident, value)) in self.defined().enumerate() {
            s.push_str(&format!("{}={:<10}", ident, value));
            if (index + 1) % 6 == 0 {
                s.push('\n');
            }
        }
        if !s.is_empty() && !s.ends_with('\n') {
            s.push('\n');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(c: char) -> Ident {
        Ident::from_char(c).unwrap()
    }

    #[test]
    fn test_uninitialized_names_variable() {
        let var = Var::new();
        let e = var.fetch(ident('B')).unwrap_err();
        assert_eq!(e.number(), 336);
        assert_eq!(e.text(), "Accessing uninitialized variable 'B'.");
    }

    #[test]
    fn test_table_rows() {
        let mut var = Var::new();
        for (i, c) in "ABCDEFG".chars().enumerate() {
            var.store(ident(c), i as i16);
        }
        let table = var.table();
        let rows: Vec<&str> = table.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("A=0         B=1"));
        assert_eq!(rows[1].trim_end(), "G=6");
    }
}
