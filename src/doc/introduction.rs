/*!
# Introductory Tutorial

A program is a text file of instructions. Run it by passing the file
name to the executable. Anything the program `WRITE`s goes to standard
output, one number per line. Nothing else is printed unless something
goes wrong.

<pre><code>&nbsp;$ cat double.asm
&nbsp;READ r1          # one number from standard input
&nbsp;MUL r1, 2, r2
&nbsp;WRITE r2
&nbsp;$ echo 21 | bytecode double.asm
&nbsp;42
</code></pre>

## The machine

There are sixteen registers named `r0` through `r15`. All of them start
at zero. Memory is a row of cells addressed by any integer, negative
ones included, and every cell also starts at zero. Numbers are signed
64 bit integers. Arithmetic wraps around instead of failing.

## Instructions

Instruction names are upper case. Operands are separated by commas.
A *value* operand is either a register or an integer. A *register*
operand must be a register.

| Instruction | Operands | Effect |
|---|---|---|
| `CP` | value, register | copy the value into the register |
| `LOAD` | address, register | copy a memory cell into the register |
| `STORE` | value, address | copy the value into a memory cell |
| `ADD` `SUB` `MUL` | value, value, register | arithmetic into the register |
| `READ` | register | read one number from input |
| `WRITE` | value | print one number |
| `JUMP` | condition, value, address | jump if the condition holds |

An integer in an address position names a memory cell. A register in
an address position names that register, so `STORE 5, r3` behaves like
`CP 5, r3`.

`JUMP` tests its value with `zero`, `pos` or `neg`. When the test
passes, execution continues at the instruction whose index is the
address. The first instruction has index 0. Comments start with `#`.

<pre><code>&nbsp;CP 10, r1        # 0: counter
&nbsp;WRITE r1         # 1
&nbsp;SUB r1, 1, r1    # 2
&nbsp;JUMP pos, r1, 1  # 3: loop while r1 > 0
</code></pre>

There is no stop instruction. A program ends when it runs past its
last instruction, or when a jump lands outside of it. `JUMP zero, 0, -1`
is a handy way to stop early.

## Errors

Mistakes in the text are reported before anything runs, with the line
and column of the problem. Runtime errors report the index of the
failing instruction. A program stuck in a loop can be stopped with
CTRL-C.

<pre><code>&nbsp;$ bytecode bad.asm
&nbsp;<b>SYNTAX ERROR IN (12..14); EXPECTED COMMA, FOUND r2</b>
&nbsp; --> bad.asm:2:5
</code></pre>

Use `--list` to see how a file was understood and `--trace` to watch
each instruction as it executes.

*/
