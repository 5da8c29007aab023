//! CLI parse tests.

use super::{Cli, CliCommand, FetchInstallersArgs};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

pub(super) fn fetch_args(args: &[&str]) -> FetchInstallersArgs {
    match parse(args).command {
        CliCommand::FetchInstallers(a) => a,
    }
}
