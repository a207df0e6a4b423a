/*!
# `GOSUB <expression>`

## Purpose
Call a subroutine.

## Remarks
The line after the `GOSUB` is remembered and execution moves to the
target line. `RETURN` comes back. The target may be any expression and
must name a stored line. A `GOSUB` on the last line of a program has
nowhere to return to, which is an error.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "IN SUBROUTINE"
110 RETURN
```

*/
