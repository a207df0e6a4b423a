/*!
# Limits and Internals

Each line is scanned and parsed when it is typed. Only lines that parse
are stored, so a stored program never contains a syntax error. The
stored form is a syntax tree plus the text as you typed it, which is
what `LIST` and `%savefile` show.

The interpreter walks the syntax tree one line at a time. Between lines
the terminal gets a chance to check for CTRL-C and to stop at
breakpoints, which is why the debugger can pause anywhere and resume
later.

| Limit | Value |
|-------|-------|
| Line numbers | 1 to 32767 |
| Values | -32768 to 32767 |
| Variables | 26 |
| GOSUB nesting | 32767 |
| USR memory | 65536 bytes |

*/
