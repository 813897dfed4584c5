/*!
# `LIST`

## Purpose
Show the program.

## Remarks
Lines are shown in ascending order in a normalized form, no matter how
they were written in the source file. Execution continues with the next line.

## Example
```text
20 PRINT "B",A+1
10 LIST
10 LIST
20 PRINT "B", A + 1
B	1
```

*/
