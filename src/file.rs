use failure::Error;

use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::log;
use crate::values::Value;
use crate::Interpreter;

impl Interpreter {
    /// evaluate each line of a file, printing every result
    pub fn run_file<P>(&self, path: P) -> Result<(), Error>
        where P: AsRef<Path> + Debug
    {
        log::info(format!("running {:?}...", path));

        let file = File::open(path)?;
        let buf = BufReader::new(file);

        self.run_lines(buf, |result| println!("{}", result))?;

        log::info("run_file: done");
        Ok(())
    }

    /// evaluate every non-blank line read from `input`, handing each result
    /// to `emit` as soon as it is ready. a line the grammar rejects is
    /// reported and skipped; a read error stops the run.
    pub fn run_lines<R, F>(&self, input: R, mut emit: F) -> Result<(), Error>
        where R: BufRead,
              F: FnMut(Value)
    {
        for line in input.lines() {
            let line = line?;
            if is_blank(&line) {
                continue;
            }

            match self.run(line.as_str()) {
                Ok(value) => emit(value),
                Err(err) => {
                    log::warn("an error ocurred:");
                    log::warn(&line);
                    log::warn(err);
                }
            }
        }

        Ok(())
    }
}

/// whitespace, or nothing but a comment
fn is_blank(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with(';')
}

// }}}
