/*
Copyright 2026 climoplot developers

This file is part of climoplot.

climoplot is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

climoplot is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with climoplot. If not, see https://www.gnu.org/licenses/.
*/

use clap::Parser;
use climoplot::args::Args;
use climoplot::climatology;
use env_logger::Env;
use log::{error, info};

/// The main program function.
/// Prepares the runtime environment and calls [`climatology::run`].
///
/// To provide meaningful and high-quality error messages the `env_logger`
/// needs to be initiated before any log messages are possible to occur.
/// Any pipeline failure is reported through the logger and turned into a
/// non-zero exit status.
fn main() {
    #[cfg(not(feature = "debug"))]
    let logger_env = Env::new().filter_or("CLIMOPLOT_LOG_LEVEL", "info");

    #[cfg(feature = "debug")]
    let logger_env = Env::new().filter_or("CLIMOPLOT_LOG_LEVEL", "debug");

    env_logger::Builder::from_env(logger_env)
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    match climatology::run(&args) {
        Ok(()) => info!(
            "Climatology plot finished. Check {} and its provenance log.",
            args.outfile.display()
        ),
        Err(err) => {
            error!("Climatology plot failed with error: {}", err);
            std::process::exit(1);
        }
    }
}
