//! ZBX - Entry Point
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `zbx publish [--dir DIR] [--force]` | Write the `zbx.toml` template |
//! | `zbx env` | List recognized `ZABBIX_*` variables |
//! | `zbx show [--config FILE]` | Build the client and print its settings |

use clap::Parser;
use zbx::cli::{Cli, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    run(cli, &mut stdout)?;
    Ok(())
}
