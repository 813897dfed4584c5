/*!
# `IF <expression> <relop> <expression> THEN <statement>`

## Purpose
Do something contingent on a comparison.

## Remarks
The statement after `THEN` may be any statement, including another `IF`.
When the comparison is false execution continues with the next line.
There is no `ELSE`.

## Example
```text
10 LET A = 10
20 IF A < 30 THEN IF A > 5 THEN PRINT A
10
```

*/
