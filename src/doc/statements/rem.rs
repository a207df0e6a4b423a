/*!
# `REM <comment>`

## Purpose
Leave a note in the program.

## Remarks
Everything after `REM` is kept exactly as typed.

## Example
```text
10 REM COUNT TO TEN
```

*/
