/*!
# `RUN [[,]<expression>[,<expression>...]]`

## Purpose
Start the program from its first line.

## Remarks
Values after `RUN` are handed to `INPUT` statements in order before
any prompting. Inside a program `RUN` restarts it and any values are
ignored with a warning. While stopped in the debugger use `%continue`
instead.

## Example
```text
10 INPUT A, B
20 PRINT A * B
30 END
RUN 6,7
42
```

*/
