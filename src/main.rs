use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

use anyhow::{bail, Context};
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use josephus::{Circle, Strategy};

/// Finds the last player standing when every k-th player in a circle is eliminated.
///
/// Values not given as flags are prompted for, or read from stdin when it isn't a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of players in the circle
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    players: Option<i64>,
    /// Step count, the k-th counted player is eliminated
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    step: Option<i64>,
    /// Algorithm: roster, ring or recurrence
    #[arg(long, default_value_t = Strategy::Roster)]
    strategy: Strategy,
    /// Print the elimination order before the winner
    #[arg(long)]
    order: bool,
    /// Run every strategy and fail if they disagree
    #[arg(long)]
    verify: bool,
}

/// Source of values missing from the command line.
enum Prompt<R> {
    Terminal(ColorfulTheme),
    Piped { input: R, pending: VecDeque<String> },
}

impl Prompt<StdinLock<'static>> {
    fn open() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Prompt::Terminal(ColorfulTheme::default())
        } else {
            Prompt::piped(stdin.lock())
        }
    }
}

impl<R: BufRead> Prompt<R> {
    fn piped(input: R) -> Self {
        Prompt::Piped { input, pending: VecDeque::new() }
    }

    fn integer(&mut self, prompt: &str) -> anyhow::Result<i64> {
        match self {
            Prompt::Terminal(theme) => Ok(Input::<i64>::with_theme(&*theme).with_prompt(prompt).interact_text()?),
            Prompt::Piped { input, pending } => {
                // stdout carries only the result
                eprint!("{prompt}: ");
                loop {
                    if let Some(token) = pending.pop_front() {
                        return token.parse().with_context(|| format!("{prompt}: `{token}` is not an integer"));
                    }
                    let mut line = String::new();
                    if input.read_line(&mut line).context("reading stdin")? == 0 {
                        bail!("{prompt}: unexpected end of input");
                    }
                    pending.extend(line.split_whitespace().map(str::to_string));
                }
            }
        }
    }
}

fn report(circle: &Circle, strategy: Strategy, verify: bool, order: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let winner = if verify { circle.verify()? } else { circle.winner_with(strategy) };
    if order {
        writeln!(out, "Elimination order: {}", circle.elimination_order())?;
    }
    writeln!(out, "The winner is player {winner}")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().ok();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let mut prompt = None;
    let mut value = |given: Option<i64>, text: &str| match given {
        Some(v) => Ok(v),
        None => prompt.get_or_insert_with(Prompt::open).integer(text),
    };
    let players = value(cli.players, "Enter number of players (n)")?;
    let step = value(cli.step, "Enter step count (k)")?;

    let circle = Circle::new(players, step)?;
    log::info!("{} players, eliminating every {}", circle.players(), circle.step());

    report(&circle, cli.strategy, cli.verify, cli.order, &mut io::stdout().lock())
}
