/*!
# Operators

| Operator | Meaning |
|----------|---------|
| `>` | Move the pointer one cell right. |
| `<` | Move the pointer one cell left. |
| `+` | Add one to the cell under the pointer. |
| `-` | Subtract one from the cell under the pointer. |
| `.` | Write the cell under the pointer. |
| `,` | Read one byte into the cell under the pointer. |
| `[` | If the cell is zero, jump past the matching `]`. |
| `]` | Jump back to the matching `[`. |

## Optimizer

Unless `--no-optimize` is given, programs are rewritten before they run.
The rewrite never changes what a program prints or what is left on the
tape.

Runs of moves and of additions are folded together, so `+++++` is one
instruction adding five. The loops `[>]` and `[<]`, and any loop whose
body is nothing but pointer moves, become a single instruction that
steps the pointer until it finds a zero cell.

The rewritten program can be printed with `--dump`:
```text
$ echo '+++[>]<<--.' | bf --dump
+++[>]<<--.
```
Dumped instructions are written in source form, one character per unit
of movement or addition.
*/
