// crates/strip_prelude/src/main.rs

use std::io;
use std::process;

use anyhow::Result;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let code = strip_prelude::run(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;
    process::exit(code);
}
