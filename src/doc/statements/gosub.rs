/*!
# `GOSUB <expression>`

## Purpose
Save the next line on the stack and move execution to the specified line number.

## Remarks
`RETURN` will return execution to the line saved on the stack.
The target is evaluated like any expression. If it doesn't name a line
of the program an `?UNDEFINED LINE` error will occur.
Nesting deeper than 65535 calls is an `?OUT OF MEMORY` error.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO"
110 RETURN
HELLO
WORLD
```

*/
