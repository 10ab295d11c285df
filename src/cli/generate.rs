use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

pub const COMPLETION_LONG_ABOUT: &str = "\
Generate a misspell-codeclimate completion script for your target shell

To load completions in your current shell session:
  bash: $ source <(misspell-codeclimate completion bash)
  zsh:  $ source <(misspell-codeclimate completion zsh)
  fish: $ misspell-codeclimate completion fish | source

To load completions for every new session, execute once:
  bash (Linux): $ misspell-codeclimate completion bash > /etc/bash_completion.d/misspell-codeclimate
  bash (MacOS): $ misspell-codeclimate completion bash > /usr/local/etc/bash_completion.d/misspell-codeclimate
  zsh:          $ misspell-codeclimate completion zsh > \"${fpath[1]}/_misspell-codeclimate\"
  fish:         $ misspell-codeclimate completion fish > ~/.config/fish/completions/misspell-codeclimate.fish

You will need to start a new shell for this setup to take effect.";

pub fn write_completion(shell: Shell, cmd: &mut Command, bin_name: &str, out: &mut dyn Write) {
    generate(shell, cmd, bin_name, out);
}

/// Render a roff man page for the command
pub fn write_man_page(cmd: Command, out: &mut dyn Write) -> io::Result<()> {
    clap_mangen::Man::new(cmd).render(out)
}
