/*!
# `RUN`

## Purpose
Clear memory and start the program from the beginning.

## Remarks
This is a shortcut for `CLEAR` followed by a `GOTO` to the first line.
Every program starts as if by `RUN`.

## Example
```text
10 PRINT A
20 LET A = 1
30 IF A = 1 THEN RUN
0
0
...
```

*/
