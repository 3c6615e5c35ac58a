/*!
# Introduction

Programs are written with eight characters. Every other character in a
source file is ignored, so comments need no marker at all.

Run a program from a file:
```text
$ bf hello.b
Hello World!
```

Or pipe the source in on standard input. In that case the program
itself sees an empty input stream.
```text
$ echo '++++++++[>++++++++<-]>+.' | bf
A
```

Stop a running program with CTRL-C.

## Memory

A program works on a tape of byte cells, 32768 of them unless
`--tape-size` asks for more. Every cell starts at zero. One cell at a
time is under the pointer. The tape is a ring: stepping left from the
first cell lands on the last, and stepping right from the last cell
lands on the first. Cells are bytes, so adding one to 255 gives 0 and
subtracting one from 0 gives 255.

## Input and output

`.` writes the cell under the pointer as one byte. `,` reads one byte
into it. Once the input is used up, `,` leaves the cell alone, so a
program can test for end of input by clearing the cell first.
```text
$ printf 'hello' | bf -e ',[.[-],]'
```

## Errors

A `]` with no open `[` stops the program with `UNMATCHED LOOP`, and so
does a `[` that is skipped over when there is no `]` to skip to. Any
output written before that point stays written.
```text
$ echo '+.]' | bf | xxd
?UNMATCHED LOOP IN 2; NO OPEN LOOP
00000000: 01
```
*/
