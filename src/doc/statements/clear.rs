/*!
# `CLEAR`

## Purpose
Clear all variables and the stack.

## Remarks
Every variable reads as 0 afterwards. Pending `GOSUB` returns are
forgotten, so a following `RETURN` is a `?RETURN WITHOUT GOSUB` error.
Execution continues with the next line.

## Example
```text
10 LET A = 5
20 CLEAR
30 PRINT A
0
```

*/
