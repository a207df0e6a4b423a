/*!
# `GOTO <expression>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If the line doesn't exist a `GOTO target does not exist` error will occur.
The target may be computed. Typed without a line number, `GOTO` starts
the program at the target without clearing variables.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
40 END
```

*/
