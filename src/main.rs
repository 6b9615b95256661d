use std::env;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use sitepad::app::Shell;
use sitepad::kernel::services::adapters::{HttpContentApi, MemoryContentApi};
use sitepad::kernel::services::ports::ContentApi;

/// How long to wait for in-flight fetches before deciding the app is idle.
const IDLE_TIMEOUT: Duration = Duration::from_millis(800);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logging = sitepad::logging::init();

    let api: Arc<dyn ContentApi> = match env::args().nth(1) {
        Some(base_url) => Arc::new(HttpContentApi::new(&base_url)),
        None => Arc::new(MemoryContentApi::fixture()),
    };

    let (tx, rx) = mpsc::channel();
    let mut shell = Shell::new(api, tx)?;
    shell.boot();

    // Process completions until the app goes quiet.
    while let Ok(action) = rx.recv_timeout(IDLE_TIMEOUT) {
        shell.handle(action)?;
    }

    println!("{}", shell.router().hash());
    println!("{}", shell.document().outer_markup(shell.document().root()));
    Ok(())
}
