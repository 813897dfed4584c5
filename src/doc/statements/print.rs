/*!
# `PRINT [<item>[, <item>...]]`

## Purpose
Output information to the terminal for the operator.

## Remarks
Each item is a string literal or an expression. Items are separated by
a tab and the line always ends with a newline. A `PRINT` by itself
outputs an empty line.

## Example
```text
10 PRINT "E is", -31
20 PRINT
30 PRINT 100, 9
E is	-31

100	9
```

*/
