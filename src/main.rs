mod cli;

use std::process;

use anyhow::Result;
use clap::Parser;
use clozeline::ConvertError;

use crate::cli::{Cli, utils};

fn main() -> Result<()> {
    let cli = Cli::parse_from(utils::normalize_args(std::env::args_os()));
    utils::init_logging(cli.debug);

    match cli::run(cli) {
        Err(err)
            if err
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_config) =>
        {
            eprintln!("error: {err}");
            process::exit(1);
        }
        result => result,
    }
}
