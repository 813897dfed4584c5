/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is `? `. Leading and trailing spaces are ignored. Anything
other than an optionally signed integer is an `?INVALID INPUT` error.
Reaching the end of input is an `?INPUT PAST END` error.

## Example
```text
10 INPUT A
20 PRINT A * 2
? 21
42
```

*/
