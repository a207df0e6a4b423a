/*!
# Linting

`%lint` checks the program in memory without running it.

| Code | Report |
|------|--------|
| LINT #01 | No `END` anywhere in the program |
| LINT #02 | A `CLEAR` in the program |
| LINT #03 | `GOTO` or `GOSUB` to a line number that is not stored |
| LINT #04 | A variable read before anything assigns it |

Only targets written as plain numbers are checked by LINT #03; a
computed target is skipped. LINT #01 only looks for an `END`, not
whether one is reached.

LINT #04 reads the program top to bottom without following jumps. By
default a read is forgiven when the variable is assigned anywhere in
the program, even further down. `%lint strict` keeps those reports,
which catches more mistakes but also flags subroutines that set a
variable for code above them.

<pre><code>&nbsp;  tbp:> 10 GOSUB 50
&nbsp;  tbp:> 20 PRINT B
&nbsp;  tbp:> 30 END
&nbsp;  tbp:> 50 LET B=1
&nbsp;  tbp:> 60 RETURN
&nbsp;  tbp:> %lint
&nbsp;  tbp:> %lint strict
&nbsp;  LINT #04: Potentially uninitialized variable 'B'.
&nbsp;  20 PRINT B
&nbsp;  ---------^
</code></pre>

*/
