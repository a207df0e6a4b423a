/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value to a variable.

## Remarks
The word `LET` is optional.

## Example
```text
LET A = 1
B = A + 1
```

*/
