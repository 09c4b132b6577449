#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate simple_error;

mod cartdb;
mod database;
mod import_cartdb;
mod info;
mod model;
mod progress;
mod schema;
mod search_cartdb;
mod util;

use clap::Command;
use dotenvy::dotenv;
use progress::*;
use simple_error::SimpleError;

type SimpleResult<T> = Result<T, SimpleError>;

#[tokio::main]
async fn main() -> SimpleResult<()> {
    let matches = Command::new(env!("CARGO_BIN_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommands([
            import_cartdb::subcommand(),
            search_cartdb::subcommand(),
            info::subcommand(),
        ])
        .subcommand_required(true)
        .arg_required_else_help(true)
        .get_matches();

    dotenv().ok();
    env_logger::init();

    let progress_bar = get_progress_bar(0, get_none_progress_style());

    match matches.subcommand() {
        Some(("import", matches)) => import_cartdb::main(matches, &progress_bar).await?,
        Some(("search", matches)) => search_cartdb::main(matches, &progress_bar).await?,
        Some(("info", matches)) => info::main(matches, &progress_bar).await?,
        _ => (),
    }

    Ok(())
}
