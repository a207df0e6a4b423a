/*!
# `RETURN`

## Purpose
Return from a subroutine started by `GOSUB`.

## Remarks
A `RETURN` with no `GOSUB` outstanding is an error.

## Example
```text
10 GOSUB 100
20 END
100 RETURN
```

*/
