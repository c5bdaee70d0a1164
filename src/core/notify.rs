use std::io::{
    self,
    Write,
};

/// The "time's up" capability the session controller calls on expiry.
/// What a notification looks like (sound, flash, both) is decided by
/// the caller wiring the session up.
pub trait Notify {
    fn notify(&mut self);
}

/// Terminal bell. The plainest realization, and the fallback when the
/// GUI overlay is not in play.
pub struct TerminalBell;

impl Notify for TerminalBell {
    fn notify(&mut self) {
        print!("\x07");
        let _ = io::stdout().flush();
    }
}
