/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program.

## Remarks
`END` at the end of a program is optional. Running past the last line
stops the program the same way.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
HELLO
```

*/
