/*!
# Messages

Errors name their category and number, then show the line with a caret
under the problem. Errors found while loading a file add the line of
the file they came from.

```text
Syntax Error: Error #020: LET is missing an '=' but found end of line.
10 LET A
--------^
```

Command errors start with `CLE`, linter reports with `LINT` and
warnings with `WARN`. Warnings never stop a program.

## Lexical and syntax

| Number | Meaning |
|--------|---------|
| 009 | Line number out of range |
| 018 | LET is missing a variable |
| 020 | LET is missing an `=` |
| 023 | LET is missing an expression |
| 037 | GOTO or GOSUB is missing a line number |
| 104 | INPUT expected a variable |
| 293 | Unexpected character or expression |
| 294 | Expected the end of the line |
| 296 | Missing closing parenthesis |
| 330 | IF is missing a relational operator |
| 331 | Unterminated string |
| 339 | PRINT cannot start with a separator |

## Runtime

| Number | Meaning |
|--------|---------|
| 013 | No program to run |
| 046 | GOTO or GOSUB target does not exist |
| 133 | RETURN with an empty call stack |
| 134 | GOSUB nesting too deep |
| 224 | Division by zero |
| 259 | RND argument not positive |
| 335 | Ran past the last line without an END |
| 336 | Variable read before assignment |
| 337 | LIST values out of order |
| 338 | LIST values out of range |
| 345 | GOSUB has no line to return to |
| 347 | Line is not in the program |
| 349 | Interrupted |
| 350 | INPUT interrupted |
| 351 | Invalid INPUT value |
| 360 | Unknown USR routine |
| 361 | USR is missing an address |
| 362 | USR is missing a value or it is out of range |

## Warnings

| Number | Meaning |
|--------|---------|
| 001 | More input than INPUT asked for |
| 002 | RUN values inside a program are ignored |

*/
