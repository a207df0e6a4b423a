/*!
# Introductory Tutorial for Tiny BASIC

Open a terminal and run `tinybasic`. A short banner and the prompt tell
you it is ready. Type CTRL-D or `%q` to exit.
<pre><code>&nbsp;  Tiny BASIC: interpreter, debugger and linter
&nbsp;  Type %help for commands, CTRL-D to quit.
&nbsp;  tbp:> █
</code></pre>

Stop a running program with CTRL-C.

Tiny BASIC is small on purpose. There are twelve statements, two
functions and twenty six variables named `A` through `Z`. Every value is
a 16-bit signed integer. Keywords can be typed in any case and may even
contain spaces, so `g o t o 10` is a perfectly good `GOTO 10`.

A statement typed without a line number runs right away. This is called
direct execution.

<pre><code>&nbsp;  tbp:> print "Hello World"
&nbsp;  Hello World
</code></pre>

Give the statement a line number between 1 and 32767 and it is stored
instead. `LIST` shows the program and `RUN` starts it. Typing a line
number that already exists replaces the line; typing the number by
itself deletes it.

<pre><code>&nbsp;  tbp:> 10 print "Hello World"
&nbsp;  tbp:> 20 end
&nbsp;  tbp:> LIST
&nbsp;  10 print "Hello World"
&nbsp;  20 end
&nbsp;  tbp:> RUN
&nbsp;  Hello World
</code></pre>

To edit a stored line, type its number and press TAB. The line is
loaded into the input buffer.

<pre><code>&nbsp;  tbp:> 10<i>{TAB}</i>
&nbsp;  tbp:> 10 print "Hello World"
</code></pre>

Mistakes are reported with the line that caused them and a caret under
the offending spot.

<pre><code>&nbsp;  tbp:> 10 PRINT B
&nbsp;  tbp:> RUN
&nbsp;  <b>Runtime Error: Error #336: Accessing uninitialized variable 'B'.</b>
&nbsp;  <b>10 PRINT B</b>
&nbsp;  <b>---------^</b>
</code></pre>

Programs are saved and loaded with `%savefile` and `%loadfile`; the
short forms are `%sf` and `%lf`. The filename goes in double quotes.
A program file is plain text, one numbered line per row.

<pre><code>&nbsp;  tbp:> %sf "hello.tbp"
&nbsp;  tbp:> %lf "hello.tbp"
</code></pre>

A file can also be named on the command line. `--nologo` skips the
banner and `-c` runs a list of lines separated by `^` as though typed.

```text
tinybasic --nologo -c "%lf \"hello.tbp\"^RUN^%q"
```

The remaining chapters describe expressions, each statement, the
functions, the debugger and the linter.

*/
