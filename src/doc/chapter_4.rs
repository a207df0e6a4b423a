/*!
# Debugging

Any stored line can carry a breakpoint. When a running program reaches
one, it stops before that line executes and the prompt changes to show
where it is. Breakpoints stay set from run to run until they are
deleted, or until `CLEAR` or a file load removes the program.

<pre><code>&nbsp;  tbp:> 10 A=1
&nbsp;  tbp:> 20 B=2
&nbsp;  tbp:> 30 END
&nbsp;  tbp:> %bp 20
&nbsp;  tbp:> RUN
&nbsp;  Breakpoint: 20
&nbsp;  [20 B=2]
&nbsp;  DEBUG(20):> %v
&nbsp;  A=1         S=256
&nbsp;  DEBUG(20):> %s
&nbsp;  [30 END]
&nbsp;  DEBUG(30):> %c
</code></pre>

While stopped you can assign variables, print expressions and edit
lines. Deleting lines is not allowed, and `RUN`, `GOTO`, `GOSUB` and
`RETURN` must not be typed directly; use `%continue`.

| Command | Short | Action |
|---------|-------|--------|
| `%break [n]` | `%bp` | Set a breakpoint on line n, or list them |
| `%delete n` or `%delete *` | `%d` | Remove one or every breakpoint |
| `%continue` | `%c` | Resume the run |
| `%step` | `%s` | Execute one line and stop again |
| `%vars` | `%v` | Show every variable that has a value |
| `%backtrace` | `%bt` | Show the lines GOSUB will return to, newest first |
| `%exit` | `%e` | Abandon the run |

`%step` refuses to go somewhere that cannot exist: a `RETURN` with
nothing to return to, or a `GOTO` or `GOSUB` to a missing line. An
`IF` is only checked this way when its condition is true. The program
stays stopped so you can fix the problem.

## Options

`%opt` changes how a run is reported, never what it does. Without a
value it shows the current setting.

| Option | Effect |
|--------|--------|
| `log` | Print each line before it executes |
| `time` | Print how long each line took |
| `run_on_load` | `RUN` after a file loads without errors |

```text
%opt log t
%opt time
Option: time is false.
```

*/
