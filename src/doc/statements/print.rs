/*!
# `PRINT <item>[<separator><item>...]`

## Purpose
Output strings and values to the terminal.

## Remarks
`PR` is short for `PRINT`. Items are strings or expressions. A semicolon
(;) prints nothing between items. A comma (,) moves to the next column
that is a multiple of 8. A newline is added unless the last item is a
separator. `PRINT` by itself outputs a newline; a separator cannot be
the first item.

## Example
```text
PRINT "A",1,"B";2
A       1       B2
```

*/
