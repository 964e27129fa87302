//! `rb-shell`: interactive integer tree.
//!
//! Usage:
//!   rb-shell [--ordered | --balanced] [-v | --verbose]...
//!
//! Menu choices and integers are read from stdin. Logs go to stderr; set
//! `RB_SHELL_LOG` (`off`, `error`, `warn`, `info`, `debug`, `trace`) to pick
//! the level explicitly.

use std::io;

use rb_forest::shell::{self, ShellConfig, TreeKind, LOG_ENV, USAGE};
use rb_forest::{OrderedTree, RbTree};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let env_level = std::env::var(LOG_ENV).ok();
    let config = match ShellConfig::from_args(std::env::args().skip(1), env_level.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = match config.tree {
        TreeKind::Ordered => shell::run(&mut OrderedTree::<i64>::new(), stdin.lock(), stdout.lock()),
        TreeKind::Balanced => shell::run(&mut RbTree::<i64>::new(), stdin.lock(), stdout.lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
