/*!
# Expressions and Types

NanoBASIC has one type of data, the signed 64-bit integer. Variables are
names that refer to an integer. Variable names are made of ASCII letters
and underbars (_). Names are case sensitive so `A` and `a` are different
variables. Keywords must be uppercase.

A value is assigned to a variable with the `LET` statement. The word
`LET` is optional.

```text
10 LET A = 1
20 B = A + 1
```

A variable which was never assigned is 0. This is not an error.

Literals are unchanging values included in your source code. A number
literal is a run of decimal digits. There are no negative literals,
`-5` is the negation of `5`. A literal larger than 9223372036854775807
is an `?OVERFLOW` error before the program runs.

String literals are surrounded by quotation marks and may only be printed.
There is no escape sequence, so a string can't contain a quotation mark.

```text
10 PRINT "Hello", 42
```

NanoBASIC supports the following operators, listed in order of precedence.

| Precedence | Operators | Meaning |
|-|-|-|
| 3 | - | Unary negation |
| 2 | * / | Multiplication and division |
| 1 | + - | Addition and subtraction |

Operators of equal precedence are evaluated left to right. Parentheses
override precedence. Division truncates toward zero. All arithmetic is
checked.

```text
PRINT 7 / 2                     ' 3
PRINT -7 / 2                    ' -3
PRINT 2 + 3 * 4                 ' 14
PRINT (2 + 3) * 4               ' 20
PRINT 10 / 0                    ' ?DIVISION BY ZERO
PRINT 9223372036854775807 + 1   ' ?OVERFLOW
```

Relational operators may only be used in an `IF` statement and each `IF`
has exactly one of them.

| Operator | Meaning |
|-|-|
| = | Equality |
| <> >< | Inequality |
| < | Less than |
| <= | Less than or equal |
| > | Greater than |
| >= | Greater than or equal |

```text
IF A <> B THEN PRINT "DIFFERENT"
```

The next chapter of this manual is a reference for statements.

*/
