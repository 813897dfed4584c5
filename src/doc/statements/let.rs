/*!
# `[LET] <variable> = <expression>`

## Purpose
Store the value of an expression in a variable.

## Remarks
The word `LET` is optional and `LIST` always shows it.
The expression is evaluated before the variable changes, so a
variable may appear on both sides.

## Example
```text
10 X = 10
20 LET X = X * 2 + 1
30 PRINT X
21
```

*/
