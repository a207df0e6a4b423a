/*!
# `IF <expression> <relation> <expression> [THEN] <statement>`

## Purpose
Run a statement only when a comparison holds.

## Remarks
`THEN` is optional. The statement can be any statement, including
another `IF`.

## Example
```text
10 INPUT A
20 IF A < 0 THEN PRINT "NEGATIVE"
30 IF A >= 0 GOTO 10
40 END
```

*/
