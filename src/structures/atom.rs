/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 1, or:
- *u - 1* is an atom.

Atoms begin at 1 as the integer `0` is reserved.
In particular, `0` is never the atom of a literal, and so the word `0` is free to act as a sentinel within the [arena](crate::db::arena).

```rust
# use otter_clause_db::structures::atom::{Atom, ATOM_MAX};
let atom: Atom = 97;
assert!(atom <= ATOM_MAX);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
