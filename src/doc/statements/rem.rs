/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
A remark takes the whole line and may be written with or without a line
number. Remark lines are dropped before parsing, so they can't be the
target of `GOTO` and don't show in `LIST`.

## Example
```text
REM Authored by Zaphod
10 REM Answer to everything.
20 PRINT 42
42
```

*/
