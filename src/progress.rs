use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};

///Observer loop for the match phase: wakes on a one second cadence, reads
///the shared counter and redraws the progress line. Returns when the stop
///channel is signalled or disconnects.
pub fn run_monitor(processed: &AtomicU64, total: usize, stop: Receiver<()>) {
    loop {
        match stop.recv_timeout(Duration::from_secs(1)) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                print_progress(processed.load(Ordering::Relaxed), total);
            }
        }
    }
}

///Single-line overwrite via carriage return, no trailing newline
pub fn print_progress(current: u64, total: usize) {
    let percent = if total == 0 {
        100.0
    } else {
        (current as f64 / total as f64) * 100.0
    };
    print!("\rProgress: {} / {} ({:.2}%)", current, total, percent);
    io::stdout().flush().ok();
}
