/*!
# `LIST [<first>[,<last>]]`

## Purpose
Show the program.

## Remarks
With one value, that line is listed if it exists, otherwise every line
from there on. With two, the inclusive range is listed. Values must be
between 1 and 32767 and in order.

## Example
```text
LIST
LIST 100
LIST 100,200
```

*/
