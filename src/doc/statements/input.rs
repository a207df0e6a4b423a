/*!
# `INPUT <variable>[,<variable>...]`

## Purpose
Suspends execution and awaits values from the terminal.

## Remarks
The prompt lists the variables still needed, for example `[A,B]? `.
Answers are separated by commas and each one is an expression, so
`A+1` is a fine answer. Values left over after every variable is set
produce a warning; a value that is not a valid expression stops the
program. Values given to `RUN` are used first, in order.

## Example
```text
10 INPUT A, B
20 PRINT A + B
30 END
```

*/
