/*!
# `CLEAR`

## Purpose
Erase the program in memory.

## Remarks
Breakpoints, the GOSUB call stack and USR memory are cleared as well.
Variables keep their values. `CLEAR` inside a program stops it, and
the linter reports it.

## Example
```text
CLEAR
```

*/
