use std::io::Write;
use std::process::ExitCode;

use ble_plugin_bridge::{run, AppConf, ErrorPayload};
use clap::Parser;
use tracing::error;

use crate::init::init_tracing;

mod init;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    let conf = AppConf::parse();
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = run(&conf.command, &mut stdout) {
        error!(%err, "Command failed");
        writeln!(stdout, "{}", ErrorPayload::from(&err).to_json()?)?;
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
