use itertools::join;
use std::path::PathBuf;

use lispy::log;
use lispy::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
struct Opt {
    #[structopt(short = "d", long = "debug", help = "log the syntax tree of every line")]
    debug: bool,

    #[structopt(short = "b", long = "batch", help = "exit after running FILE")]
    batch: bool,

    #[structopt(name = "FILE", parse(from_os_str), help = "file of expressions to run on startup")]
    file: Option<PathBuf>,
}

const HISTFILE: &str = ".lispy_hist";

fn main() {
    let opt = Opt::from_args();
    if opt.debug {
        log::debug(format!("set options: {:?}", opt))
    }

    let interpreter = Interpreter::new(opt.debug);
    if let Some(file) = &opt.file {
        if let Err(why) = interpreter.run_file(file) {
            log::warn(why);
        }
    }

    if opt.batch {
        return;
    }

    let mut rl = Editor::<()>::new();
    if let Err(err) = rl.load_history(HISTFILE) {
        log::warn(format!("error opening history file: {}", err));
    }

    let prompt = format!("{}lispy λ{} ", log::BLU, log::RESET);

    loop {
        let input = rl.readline(&prompt);

        match input {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str());
                let meta = if line.starts_with('>') {
                    command(&interpreter, &line[1..])
                } else {
                    None
                };

                match meta {
                    Some(output) => println!("{}", output),
                    None => match interpreter.run(line) {
                        Ok(result) => println!("{}", result),
                        Err(err) => log::error(err),
                    },
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }

            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }

            Err(err) => {
                log::error(err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTFILE) {
        log::warn(format!("error saving history file: {}", err));
    }
}

/// handle a `>`-prefixed meta command. anything that isn't a known
/// command name, like `>= 1 2`, is left for the evaluator.
fn command(interpreter: &Interpreter, cmd: &str) -> Option<String> {
    let (name, rest) = match cmd.find(char::is_whitespace) {
        Some(idx) => (&cmd[..idx], cmd[idx..].trim()),
        None => (cmd, ""),
    };

    let output = match name {
        "builtins" => join(lispy::builtin_names(), ", "),
        "tree" => match lispy::parser::parse(rest) {
            Ok(tree) => tree.to_string().trim_end().to_owned(),
            Err(err) => {
                log::error(err);
                "".to_owned()
            }
        },
        "debug" => format!("debug logging is {}", if interpreter.debug { "on" } else { "off" }),
        _ => return None,
    };
    Some(output)
}

// }}}
