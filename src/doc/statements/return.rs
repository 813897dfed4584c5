/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. A `RETURN` with nothing on the stack is a
`?RETURN WITHOUT GOSUB` error. Returning from a `GOSUB` on the last
line of the program ends the program.

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
