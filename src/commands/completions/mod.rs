use std::io::Write;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as CompletionShell};

use crate::config::EXEC_NAME;
use crate::CLI;

#[derive(Debug, Parser)]
#[clap(about = "Generate completion scripts for the specified shell")]
pub struct Options {
    #[clap(name = "shell", help = "The shell to print the completion script for")]
    shell: CompletionShell,
}

pub fn handle(options: Options, out: &mut impl Write) {
    generate(options.shell, &mut CLI::command(), EXEC_NAME, out);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bash_completions() {
        let mut out = vec![];

        handle(
            Options {
                shell: CompletionShell::Bash,
            },
            &mut out,
        );

        let script = String::from_utf8(out).unwrap();

        assert!(script.contains(EXEC_NAME));
        assert!(script.contains("cluster-bus"));
    }
}
