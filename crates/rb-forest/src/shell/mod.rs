//! Interactive menu over a [`SearchTree`] of integers.
//!
//! Reads whitespace-separated integers, one menu choice at a time, and
//! answers on the output stream. Used by the `rb-shell` binary; tests drive
//! it with in-memory buffers.

pub mod config;

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::set::SearchTree;

pub use config::{ConfigError, ShellConfig, TreeKind, LOG_ENV, USAGE};

pub const MENU: &str = "\
1: Insert an integer into the tree;
2: Print the in-order treewalk of the tree;
3: Search for an integer in the tree;
4: Remove an integer from the tree;
5: Print the tree structure;
0: Quit;";

pub const CHOICE_PROMPT: &str = "Please input your choice(1/2/3/4/5/0): ";

/// Whitespace-separated tokens across input lines.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

enum Input {
    Key(i64),
    Invalid(String),
    Eof,
}

fn read_key<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    out: &mut W,
    prompt: &str,
) -> io::Result<Input> {
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(match tokens.next()? {
        None => Input::Eof,
        Some(token) => match token.parse::<i64>() {
            Ok(key) => Input::Key(key),
            Err(_) => Input::Invalid(token),
        },
    })
}

/// Runs the menu loop until `0` or end of input, then tears the tree down.
pub fn run<T, R, W>(tree: &mut T, input: R, mut out: W) -> io::Result<()>
where
    T: SearchTree<Key = i64>,
    R: BufRead,
    W: Write,
{
    info!("shell started on {} tree", tree.kind());
    let mut tokens = Tokens::new(input);
    writeln!(out, "{MENU}")?;

    loop {
        write!(out, "{CHOICE_PROMPT}")?;
        out.flush()?;
        let Some(choice) = tokens.next()? else {
            writeln!(out)?;
            break;
        };
        debug!("shell choice {choice:?}");

        match choice.parse::<i64>() {
            Ok(1) => {
                let prompt = "Input an integer that you want to insert into the tree: ";
                match read_key(&mut tokens, &mut out, prompt)? {
                    Input::Key(key) => {
                        if let Err(err) = tree.insert(key) {
                            writeln!(out, "Error. {err}.")?;
                        }
                    }
                    Input::Invalid(token) => writeln!(out, "Not an integer: {token}")?,
                    Input::Eof => break,
                }
            }
            Ok(2) => {
                if tree.is_empty() {
                    writeln!(out, "The tree is empty.")?;
                } else {
                    writeln!(out, "The resulting in-order treewalk of the tree is: ")?;
                    let walk: Vec<String> = tree.keys().map(i64::to_string).collect();
                    writeln!(out, "{}", walk.join(" "))?;
                }
            }
            Ok(3) => {
                let prompt = "Input an integer that you want to search for: ";
                match read_key(&mut tokens, &mut out, prompt)? {
                    Input::Key(key) if tree.contains(&key) => writeln!(out, "Integer found!")?,
                    Input::Key(_) => writeln!(out, "Integer not in tree!")?,
                    Input::Invalid(token) => writeln!(out, "Not an integer: {token}")?,
                    Input::Eof => break,
                }
            }
            Ok(4) => {
                let prompt = "Input an integer that you want to remove: ";
                match read_key(&mut tokens, &mut out, prompt)? {
                    Input::Key(key) => match tree.remove(&key) {
                        Ok(_) => writeln!(out, "Integer successfully removed!")?,
                        Err(_) => writeln!(out, "Error. Integer not in tree!")?,
                    },
                    Input::Invalid(token) => writeln!(out, "Not an integer: {token}")?,
                    Input::Eof => break,
                }
            }
            Ok(5) => {
                writeln!(out, "The tree structure is:")?;
                writeln!(out, "{}", tree.render())?;
            }
            Ok(0) => break,
            _ => writeln!(out, "Choice unknown;")?,
        }
    }

    let released = tree.len();
    tree.clear();
    info!("shell finished, released {released} nodes");
    out.flush()
}
