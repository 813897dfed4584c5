/*!
# Errors

Nothing runs until the whole program has been read. The first problem
stops everything; there is no recovery and no partial program.

Errors found while reading the source name the BASIC line when one is
known, then the line and column in the source file, then what was
expected and what was found.

| Error | Cause |
|-|-|
| `UNRECOGNIZED CHARACTER` | A character that can't start any token. |
| `UNTERMINATED STRING` | A string literal missing its closing quote. |
| `OVERFLOW` | A number literal too large for 64 bits. |
| `SYNTAX ERROR` | The tokens don't form a statement. |
| `DUPLICATE LINE` | Two lines with the same line number. |
| `INVALID LINE NUMBER` | Line number 0, or one larger than 4294967295. |

Errors while running name only the BASIC line that was executing.

| Error | Cause |
|-|-|
| `UNDEFINED LINE` | `GOTO` or `GOSUB` to a line that isn't in the program. |
| `RETURN WITHOUT GOSUB` | `RETURN` with nothing on the stack. |
| `DIVISION BY ZERO` | The right side of `/` was 0. |
| `OVERFLOW` | An arithmetic result too large for 64 bits. |
| `INVALID INPUT` | `INPUT` got something other than an integer. |
| `INPUT PAST END` | `INPUT` ran out of input. |
| `OUT OF MEMORY` | `GOSUB` nested too deeply. |
| `I/O ERROR` | The terminal failed. |

```text
?SYNTAX ERROR IN 20 AT 2:13; EXPECTED THEN, FOUND "GOTO"
?DIVISION BY ZERO IN 10
```

*/
