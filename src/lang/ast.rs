use super::Column;
pub use super::ident::Ident;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Clear(Column),
    End(Column),
    Gosub(Column, Expression),
    Goto(Column, Expression),
    If(Column, Expression, Relation, Expression, Box<Statement>),
    Input(Column, Vec<Variable>),
    Let(Column, Variable, Expression),
    List(Column, Option<Expression>, Option<Expression>),
    Print(Column, Vec<PrintItem>),
    Rem(Column, String),
    Return(Column),
    Run(Column, Vec<Expression>),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Variable(pub Column, pub Ident);

#[derive(Debug, PartialEq, Clone)]
pub enum PrintItem {
    String(Column, String),
    Expression(Expression),
    Comma(Column),
    Semicolon(Column),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(Column, i16),
    Var(Column, Ident),
    Rnd(Column, Box<Expression>),
    Usr(Column, Vec<Expression>),
    Negation(Column, Box<Expression>),
    Absolute(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Grouping(Column, Box<Expression>),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            Clear(col) | End(col) | Return(col) | Rem(col, _) => col.clone(),
            Gosub(col, _) | Goto(col, _) | Input(col, _) | Print(col, _) | Run(col, _) => {
                col.clone()
            }
            If(col, ..) | Let(col, ..) | List(col, ..) => col.clone(),
        }
    }
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Integer(col, _) | Var(col, _) | Rnd(col, _) | Usr(col, _) => col.clone(),
            Negation(col, _) | Absolute(col, _) | Grouping(col, _) => col.clone(),
            Multiply(col, ..) | Divide(col, ..) | Add(col, ..) | Subtract(col, ..) => col.clone(),
        }
    }

    /// The value of a literal, looking through parentheses.
    pub fn literal(&self) -> Option<(Column, i16)> {
        match self {
            Expression::Integer(col, n) => Some((col.clone(), *n)),
            Expression::Grouping(_, expr) => expr.literal(),
            _ => None,
        }
    }

    /// True if evaluating this touches RND or USR.
    pub fn calls_function(&self) -> bool {
        struct Calls(bool);
        impl Visitor for Calls {
            fn visit_expression(&mut self, expr: &Expression) {
                if let Expression::Rnd(..) | Expression::Usr(..) = expr {
                    self.0 = true;
                }
            }
        }
        let mut calls = Calls(false);
        self.accept(&mut calls);
        calls.0
    }
}

impl Relation {
    pub fn test(self, lhs: i16, rhs: i16) -> bool {
        use Relation::*;
        match self {
            Equal => lhs == rhs,
            NotEqual => lhs != rhs,
            Less => lhs < rhs,
            LessEqual => lhs <= rhs,
            Greater => lhs > rhs,
            GreaterEqual => lhs >= rhs,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Relation::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

/// Children are visited before their parent. An assignment visits its
/// value before its target.
pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Clear(_) | End(_) | Return(_) | Rem(..) => {}
            Gosub(_, expr) | Goto(_, expr) => {
                expr.accept(visitor);
            }
            If(_, lhs, _, rhs, then) => {
                lhs.accept(visitor);
                rhs.accept(visitor);
                then.accept(visitor);
            }
            Input(_, vars) => {
                for var in vars {
                    var.accept(visitor);
                }
            }
            Let(_, var, expr) => {
                expr.accept(visitor);
                var.accept(visitor);
            }
            List(_, expr1, expr2) => {
                for expr in expr1.iter().chain(expr2.iter()) {
                    expr.accept(visitor);
                }
            }
            Print(_, items) => {
                for item in items {
                    if let PrintItem::Expression(expr) = item {
                        expr.accept(visitor);
                    }
                }
            }
            Run(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Integer(..) | Var(..) => {}
            Usr(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Rnd(_, expr) | Negation(_, expr) | Absolute(_, expr) | Grouping(_, expr) => {
                expr.accept(visitor)
            }
            Multiply(_, expr1, expr2)
            | Divide(_, expr1, expr2)
            | Add(_, expr1, expr2)
            | Subtract(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order(Vec<String>);

    impl Visitor for Order {
        fn visit_variable(&mut self, var: &Variable) {
            self.0.push(format!("set {}", var.1));
        }
        fn visit_expression(&mut self, expr: &Expression) {
            if let Expression::Var(_, ident) = expr {
                self.0.push(format!("get {}", ident));
            }
        }
    }

    #[test]
    fn test_assignment_reads_before_write() {
        let a = Ident::from_char('A').unwrap();
        let stmt = Statement::Let(
            0..3,
            Variable(4..5, a),
            Expression::Add(
                7..8,
                Box::new(Expression::Var(6..7, a)),
                Box::new(Expression::Integer(8..9, 1)),
            ),
        );
        let mut order = Order(vec![]);
        stmt.accept(&mut order);
        assert_eq!(order.0, vec!["get A", "set A"]);
    }

    #[test]
    fn test_calls_function() {
        let a = Ident::from_char('A').unwrap();
        let plain = Expression::Negation(0..1, Box::new(Expression::Var(1..2, a)));
        assert!(!plain.calls_function());
        let rnd = Expression::Add(
            1..2,
            Box::new(Expression::Integer(0..1, 1)),
            Box::new(Expression::Rnd(2..5, Box::new(Expression::Integer(6..7, 9)))),
        );
        assert!(rnd.calls_function());
        assert!(Expression::Usr(0..3, vec![]).calls_function());
    }

    #[test]
    fn test_literal_through_grouping() {
        let e = Expression::Grouping(0..1, Box::new(Expression::Integer(1..3, 20)));
        assert_eq!(e.literal(), Some((1..3, 20)));
    }
}
