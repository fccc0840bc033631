//! Interrupt capture.
//!
//! While an edit session is open, Ctrl-C must not kill the process before the
//! scratch file is removed. [`install`] replaces the default SIGINT behaviour
//! with a flag; the foreground editor still receives the signal itself, and the
//! workflow checks [`interrupted`] once the editor exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::debug;

use crate::error::Result;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static INSTALL: Once = Once::new();

/// Start listening for Ctrl-C on a background thread. Idempotent.
pub fn install() -> Result<()> {
    let mut outcome = Ok(());
    INSTALL.call_once(|| {
        outcome = spawn_listener();
    });
    outcome
}

fn spawn_listener() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("gsm-interrupt".to_string())
        .spawn(move || {
            runtime.block_on(async {
                while tokio::signal::ctrl_c().await.is_ok() {
                    debug!("interrupt received");
                    INTERRUPTED.store(true, Ordering::SeqCst);
                }
            })
        })?;
    Ok(())
}

/// Whether Ctrl-C was pressed since [`install`].
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
