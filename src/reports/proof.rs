/*!
Transcription of clause additions and deletions as a DRAT proof.

Each non-original clause stored is written as a line of literals closed by `0`, and each deleted clause likewise with a `d` prefix.
Original clauses are part of the formula, and so are not written.

# Use

Through the callbacks of a context, with [transcribe_to](GenericContext::transcribe_to).

```rust
# use std::{cell::RefCell, rc::Rc};
# use otter_clause_db::{config::Config, context::Context, reports::proof::Transcriber};
let mut the_context = Context::from_config(Config::default());

let transcriber = Rc::new(RefCell::new(Transcriber::new(Vec::<u8>::new())));
the_context.transcribe_to(transcriber.clone());

assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
assert!(the_context.create_redundant(3, vec![-1, 2, 4]).is_ok());

let proof = String::from_utf8(transcriber.borrow().writer().clone()).unwrap();
assert_eq!(proof, "-1 2 4 0\n");
```

# Notes

- Steps are buffered until [flushed](Transcriber::flush), and the callbacks set by [transcribe_to](GenericContext::transcribe_to) flush after each step.
- Shrinking a clause writes the shortened clause before the deletion of the original clause, as required for the shortened clause to be checked.
*/

use std::{cell::RefCell, fmt::Write, rc::Rc};

use crate::{
    context::GenericContext,
    db::ClauseId,
    misc::log::targets::{self},
    predictor::Predictor,
    structures::{clause::ClauseSource, literal::CLiteral},
};

/// Writes the steps of a proof to `W`.
pub struct Transcriber<W: std::io::Write> {
    /// Where steps of the proof are written.
    writer: W,

    /// Steps held until written.
    step_buffer: Vec<String>,
}

impl<W: std::io::Write> Transcriber<W> {
    pub fn new(writer: W) -> Self {
        Transcriber {
            writer,
            step_buffer: Vec::default(),
        }
    }

    /// Writes the literals of `clause`, each followed by a space.
    fn write_clause_to_string(clause: &[CLiteral], string: &mut String) {
        for literal in clause {
            let _ = write!(string, "{literal} ");
        }
    }

    /// Notes the addition of `clause`.
    pub fn transcribe_addition(&mut self, clause: &[CLiteral]) {
        let mut step = String::new();
        Self::write_clause_to_string(clause, &mut step);
        step.push_str("0\n");
        self.step_buffer.push(step);
    }

    /// Notes the deletion of `clause`.
    pub fn transcribe_deletion(&mut self, clause: &[CLiteral]) {
        let mut step = String::from("d ");
        Self::write_clause_to_string(clause, &mut step);
        step.push_str("0\n");
        self.step_buffer.push(step);
    }

    /// Writes any buffered steps.
    pub fn flush(&mut self) -> std::io::Result<()> {
        for step in self.step_buffer.drain(..) {
            self.writer.write_all(step.as_bytes())?;
        }
        self.writer.flush()
    }

    /// The writer, without flushing any buffered steps.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Takes the writer, after flushing any buffered steps.
    pub fn into_writer(mut self) -> std::io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

impl<P: Predictor> GenericContext<P> {
    /// Sets the addition and deletion callbacks of the context to write steps of a proof to `transcriber`.
    ///
    /// Any existing addition or deletion callback is replaced.
    pub fn transcribe_to<W: std::io::Write + 'static>(&mut self, transcriber: Rc<RefCell<Transcriber<W>>>) {
        let addition_tx = transcriber.clone();
        let addition_callback = move |_: ClauseId, clause: &[CLiteral], _: ClauseSource| {
            let mut tx = addition_tx.borrow_mut();
            tx.transcribe_addition(clause);
            if let Err(e) = tx.flush() {
                log::error!(target: targets::CLAUSE_DB, "Failed to write a proof step: {e}");
            }
        };
        self.set_callback_addition(Box::new(addition_callback));

        let deletion_callback = move |_: ClauseId, clause: &[CLiteral]| {
            let mut tx = transcriber.borrow_mut();
            tx.transcribe_deletion(clause);
            if let Err(e) = tx.flush() {
                log::error!(target: targets::CLAUSE_DB, "Failed to write a proof step: {e}");
            }
        };
        self.set_callback_delete(Box::new(deletion_callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_buffered() {
        let mut tx = Transcriber::new(Vec::<u8>::new());
        tx.transcribe_addition(&[1, -2, 3]);
        tx.transcribe_deletion(&[4, 5, -6]);
        assert!(tx.writer().is_empty());

        let proof = String::from_utf8(tx.into_writer().unwrap()).unwrap();
        assert_eq!(proof, "1 -2 3 0\nd 4 5 -6 0\n");
    }
}
