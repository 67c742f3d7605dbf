pub mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dxf2shp-launcher",
    version,
    about = "Runs the DXF to shapefile converter and then the .prj generator from ./venv",
    long_about = "Runs src/dxf2shp.py and then src/makePrj4shp.py with the interpreter in the \
                  venv directory next to this executable. Stops at the first failing script and \
                  exits with its code; on success waits for Enter before closing."
)]
pub struct Cli {}

pub async fn run(_cli: Cli) -> crate::core::error::Result<i32> {
    commands::launch::execute().await
}
