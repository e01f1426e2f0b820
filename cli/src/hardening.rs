//! Crash hardening: restore the terminal before reporting a panic.
//!
//! Raw mode plus the alternate screen would otherwise eat the panic
//! message and leave the user's shell unusable.

use std::io::{Write, stdout};
use std::panic;

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut out = stdout();
        let _ = execute!(out, LeaveAlternateScreen);
        let _ = out.flush();
        default_hook(info);
    }));
}
