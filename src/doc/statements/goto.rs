/*!
# `GOTO <expression>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If the line doesn't exist an `?UNDEFINED LINE` error will occur.
The target may be computed.

## Example
```text
10 LET A = 3
20 GOTO A * 10
30 PRINT "THIS WILL PRINT"
```

*/
