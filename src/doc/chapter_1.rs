/*!
# Expressions and Variables

Tiny BASIC has a single data type: the signed 16-bit integer, from
-32768 to 32767. Arithmetic wraps around instead of failing, so
`32767+1` is `-32768`.

There are 26 variables, `A` through `Z`. A variable has no value until
something assigns one, and reading it before then is an error. The only
exception is `S`, which starts at 256 so USR programs have a base
address to work from. Variables keep their values across `CLEAR` and
across program loads.

```text
LET A = 5
B = A * 2
```

## Operators

From tightest to loosest binding:

| Operator | Meaning |
|----------|---------|
| `( )` | Grouping |
| `-X` | Negation |
| `+X` | Absolute value |
| `*` `/` | Multiplication and division |
| `+` `-` | Addition and subtraction |

Division truncates toward zero: `7/2` is `3` and `-7/2` is `-3`.
Dividing by zero is an error that stops the program.

## Relations

The six relational operators only appear in `IF`, once, between two
expressions. They cannot be nested or used elsewhere.

| Operator | Meaning |
|----------|---------|
| `=` | Equal |
| `<>` or `><` | Not equal |
| `<` | Less than |
| `<=` | Less than or equal |
| `>` | Greater than |
| `>=` | Greater than or equal |

## Numbers and strings

Numbers are decimal digits and may contain spaces: `1 000` is `1000`.
Strings are double quoted and are only allowed in `PRINT`.

*/
