/*!
# `END`

## Purpose
Stop the program.

## Remarks
Every program needs an `END`; running past the last line is an error.
Values given to `RUN` that no `INPUT` used are reported with a warning.

## Example
```text
10 PRINT "DONE"
20 END
```

*/
