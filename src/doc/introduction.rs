/*!
# Introductory Tutorial for NanoBASIC

NanoBASIC runs one program file from start to finish. There is no
`READY.` prompt and no direct mode. Write the program with any text
editor, then hand it to `nanobasic`.

Every line of a program starts with a line number. Line numbers don't
have to be consecutive and they don't have to be in order in the file.
The program always runs from the lowest line number upwards.

```text
10 PRINT "Hello World"
```

Save that as `hello.bas` and run it.

<pre><code>&nbsp;$ nanobasic hello.bas
&nbsp;Hello World
</code></pre>

Short programs can be given on the command line with `-e`.

<pre><code>&nbsp;$ nanobasic -e '10 PRINT "A", 1 + 2'
&nbsp;A	3
</code></pre>

Let's try something longer. This prints the Fibonacci numbers below 100.
Variables hold integers and start out as 0, so `N` doesn't need to be set.

```text
10 LET N = 0
20 LET M = 1
30 PRINT N
40 LET T = M + N
50 LET N = M
60 LET M = T
70 IF N < 100 THEN GOTO 30
```

Mistakes are reported before anything runs. The message names the error,
the BASIC line, then the line and column in the source file.

<pre><code>&nbsp;$ nanobasic -e '10 PRINT (1 + 2'
&nbsp;<b>?SYNTAX ERROR IN 10 AT 1:16; EXPECTED RIGHT PARENTHESIS, FOUND END OF LINE</b>
</code></pre>

Runtime errors only know the line number that was executing.

<pre><code>&nbsp;$ nanobasic -e '10 PRINT 1 / 0'
&nbsp;<b>?DIVISION BY ZERO IN 10</b>
</code></pre>

A program that never ends can be stopped with CTRL-C. The exit status
is 130 after a break, 1 after an error, and 0 otherwise.

<pre><code>&nbsp;$ nanobasic -e '10 GOTO 10'
&nbsp;<i>{CTRL-C}</i>
&nbsp;<b>BREAK IN 10</b>
</code></pre>

Two switches help when a program doesn't do what you expect.
`--trace` prints each line number to standard error as it executes.
`--dump-ast` writes the parsed form of `prog.bas` to `prog_AST.txt`.

This concludes the introductory tutorial. The remainder of this manual is
reference material covering everything NanoBASIC can do.

*/
