use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
    file_line: Option<usize>,
    source: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: code.default_message().to_string(),
            file_line: None,
            source: None,
        }
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = line;
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        self.column = column.clone();
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        self.message = message.into();
        self
    }

    /// Attach the text of the offending line so the caret can be drawn.
    pub fn in_source(mut self, source: &str) -> Error {
        if self.source.is_none() {
            self.source = Some(source.to_string());
        }
        self
    }

    pub fn in_file_line(mut self, file_line: usize) -> Error {
        self.file_line = Some(file_line);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn number(&self) -> u16 {
        self.code.number()
    }

    pub fn category(&self) -> Category {
        self.code.category()
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lexical,
    Syntax,
    Runtime,
    Command,
    Lint,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnexpectedCharacter,
    UnterminatedString,

    LineNumberRange,
    LetMissingVariable,
    LetMissingEquals,
    LetMissingExpression,
    MissingTarget,
    InputMissingVariable,
    UnexpectedExpression,
    ExpectedEndOfLine,
    MissingParenthesis,
    MissingRelation,
    PrintLeadingSeparator,

    NoProgram,
    UndefinedLine,
    ReturnWithoutGosub,
    StackOverflow,
    DivisionByZero,
    RndArgument,
    NoEnd,
    Uninitialized,
    ListOrder,
    ListRange,
    InvalidReturnAddress,
    LineNotInProgram,
    Interrupted,
    InputAborted,
    InvalidInput,
    UsrRoutine,
    UsrAddress,
    UsrValue,

    UnknownCommand,
    MissingFilename,
    NothingToSave,
    MissingOption,
    LineParameter,
    NoSuchLine,
    NotDebugging,
    DeleteWhileDebugging,
    NoBranchTarget,
    EmptyCallStack,
    InvalidFilename,
    FileNotFound,
    BreakpointExists,
    LoadWhileDebugging,
    UseContinue,

    MissingEnd,
    ClearPresent,
    BadBranchTarget,
    MaybeUninitialized,

    ExcessInput,
    RunArgumentsIgnored,
}

impl ErrorCode {
    pub fn number(self) -> u16 {
        use ErrorCode::*;
        match self {
            UnexpectedCharacter => 293,
            UnterminatedString => 331,
            LineNumberRange => 9,
            LetMissingVariable => 18,
            LetMissingEquals => 20,
            LetMissingExpression => 23,
            MissingTarget => 37,
            InputMissingVariable => 104,
            UnexpectedExpression => 293,
            ExpectedEndOfLine => 294,
            MissingParenthesis => 296,
            MissingRelation => 330,
            PrintLeadingSeparator => 339,
            NoProgram => 13,
            UndefinedLine => 46,
            ReturnWithoutGosub => 133,
            StackOverflow => 134,
            DivisionByZero => 224,
            RndArgument => 259,
            NoEnd => 335,
            Uninitialized => 336,
            ListOrder => 337,
            ListRange => 338,
            InvalidReturnAddress => 345,
            LineNotInProgram => 347,
            Interrupted => 349,
            InputAborted => 350,
            InvalidInput => 351,
            UsrRoutine => 360,
            UsrAddress => 361,
            UsrValue => 362,
            UnknownCommand => 1,
            MissingFilename => 2,
            NothingToSave => 3,
            MissingOption => 4,
            LineParameter => 5,
            NoSuchLine => 6,
            NotDebugging => 8,
            DeleteWhileDebugging => 9,
            NoBranchTarget => 10,
            EmptyCallStack => 11,
            InvalidFilename => 12,
            FileNotFound => 13,
            BreakpointExists => 14,
            LoadWhileDebugging => 15,
            UseContinue => 16,
            MissingEnd => 1,
            ClearPresent => 2,
            BadBranchTarget => 3,
            MaybeUninitialized => 4,
            ExcessInput => 1,
            RunArgumentsIgnored => 2,
        }
    }

    pub fn category(self) -> Category {
        use ErrorCode::*;
        match self {
            UnexpectedCharacter | UnterminatedString => Category::Lexical,
            LineNumberRange
            | LetMissingVariable
            | LetMissingEquals
            | LetMissingExpression
            | MissingTarget
            | InputMissingVariable
            | UnexpectedExpression
            | ExpectedEndOfLine
            | MissingParenthesis
            | MissingRelation
            | PrintLeadingSeparator => Category::Syntax,
            NoProgram | UndefinedLine | ReturnWithoutGosub | StackOverflow | DivisionByZero
            | RndArgument | NoEnd | Uninitialized | ListOrder | ListRange
            | InvalidReturnAddress | LineNotInProgram | Interrupted | InputAborted
            | InvalidInput | UsrRoutine | UsrAddress | UsrValue => Category::Runtime,
            UnknownCommand | MissingFilename | NothingToSave | MissingOption | LineParameter
            | NoSuchLine | NotDebugging | DeleteWhileDebugging | NoBranchTarget
            | EmptyCallStack | InvalidFilename | FileNotFound | BreakpointExists
            | LoadWhileDebugging | UseContinue => Category::Command,
            MissingEnd | ClearPresent | BadBranchTarget | MaybeUninitialized => Category::Lint,
            ExcessInput | RunArgumentsIgnored => Category::Warning,
        }
    }

    fn default_message(self) -> &'static str {
        use ErrorCode::*;
        match self {
            UnexpectedCharacter => "Syntax error - unexpected character.",
            UnterminatedString => "Unterminated string.",
            LineNumberRange => "Line number not allowed.",
            LetMissingVariable => "LET is missing a variable name.",
            LetMissingEquals => "LET is missing an '='.",
            LetMissingExpression => "Improper syntax in LET, no right-side expression.",
            MissingTarget => "Missing line number.",
            InputMissingVariable => "INPUT expected a variable name.",
            UnexpectedExpression => "Syntax error - unexpected expression.",
            ExpectedEndOfLine => "Expected the end of the line.",
            MissingParenthesis => "Syntax error - expected a closing parenthesis.",
            MissingRelation => "IF is missing the relational operator.",
            PrintLeadingSeparator => {
                "Separators or colons cannot be the first item in a PRINT statement."
            }
            NoProgram => "No program in memory to run.",
            UndefinedLine => "Branch target does not exist.",
            ReturnWithoutGosub => "RETURN called with an empty call stack.",
            StackOverflow => "GOSUB nesting is too deep.",
            DivisionByZero => "Division by zero.",
            RndArgument => "RND(0) not allowed.",
            NoEnd => "No END in the program.",
            Uninitialized => "Accessing uninitialized variable.",
            ListOrder => "LIST parameters must be in logical order.",
            ListRange => "LIST parameters must be in the range 1 to 32767.",
            InvalidReturnAddress => "GOSUB return address is invalid.",
            LineNotInProgram => "Line number is not in the program.",
            Interrupted => "Program execution interrupted.",
            InputAborted => "Aborting RUN from INPUT entry.",
            InvalidInput => "Invalid value in INPUT.",
            UsrRoutine => "USR only supports read (276) or write (280) subroutines.",
            UsrAddress => "USR read/write routines require an address in XReg.",
            UsrValue => "USR write routine requires a value in AReg.",
            UnknownCommand => "Invalid or unknown command.",
            MissingFilename => "Missing required filename or missing quote delimiters.",
            NothingToSave => "No program in memory to save.",
            MissingOption => "Required option is missing.",
            LineParameter => "%break and %delete commands require line numbers as parameters.",
            NoSuchLine => "Line does not exist in the program.",
            NotDebugging => "Command only works while debugging.",
            DeleteWhileDebugging => "Deleting program lines while debugging disabled.",
            NoBranchTarget => "Branch target does not exist.",
            EmptyCallStack => "RETURN call stack is empty.",
            InvalidFilename => "Filename is invalid.",
            FileNotFound => "File does not exist.",
            BreakpointExists => "Breakpoint already set.",
            LoadWhileDebugging => "%loadfile disabled while debugging.",
            UseContinue => "Use %c to continue from a breakpoint instead of RUN.",
            MissingEnd => "Missing END statement in the program.",
            ClearPresent => "CLEAR must never be in a program.",
            BadBranchTarget => "Branch target not in program.",
            MaybeUninitialized => "Potentially uninitialized variable.",
            ExcessInput => "More input given than variables requested by INPUT.",
            RunArgumentsIgnored => "RUN parameters not supported in programs.",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let number = self.code.number();
        match self.category() {
            Category::Lexical => write!(f, "Lexical Error: Error #{:03}: ", number)?,
            Category::Syntax => write!(f, "Syntax Error: Error #{:03}: ", number)?,
            Category::Runtime => write!(f, "Runtime Error: Error #{:03}: ", number)?,
            Category::Command => write!(f, "CLE #{:02}: ", number)?,
            Category::Lint => write!(f, "LINT #{:02}: ", number)?,
            Category::Warning => write!(f, "WARN #{:03}: ", number)?,
        }
        write!(f, "{}", self.message)?;
        if let Some(file_line) = self.file_line {
            write!(f, " (file line {})", file_line)?;
        }
        if let Some(source) = &self.source {
            write!(f, "\n{}\n{:->w$}^", source, "", w = self.column.start)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_caret() {
        let e = error!(Uninitialized, Some(10), ..&(9..10); "Accessing uninitialized variable 'B'.")
            .in_source("10 PRINT B");
        assert_eq!(
            e.to_string(),
            "Runtime Error: Error #336: Accessing uninitialized variable 'B'.\n10 PRINT B\n---------^"
        );
    }

    #[test]
    fn test_command_and_lint_prefixes() {
        assert_eq!(
            error!(NotDebugging; "%step command only works while debugging.").to_string(),
            "CLE #08: %step command only works while debugging."
        );
        assert_eq!(
            error!(MissingEnd).to_string(),
            "LINT #01: Missing END statement in the program."
        );
        assert_eq!(
            error!(ExcessInput).to_string(),
            "WARN #001: More input given than variables requested by INPUT."
        );
    }

    #[test]
    fn test_file_line_suffix() {
        let e = error!(UndefinedLine, ..&(0..0)).in_file_line(3).in_source("GOTO 5");
        assert_eq!(
            e.to_string(),
            "Runtime Error: Error #046: Branch target does not exist. (file line 3)\nGOTO 5\n^"
        );
    }
}
