use std::mem::MaybeUninit;

use libc::winsize as WinSize;

/// The width assumed when stdout isn't a terminal.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Returns the number of columns in the terminal attached to stdout, queried fresh on each call so
/// that resizes are picked up. Falls back to [`DEFAULT_COLUMNS`] if stdout isn't a terminal.
pub fn terminal_columns() -> u16 {
    let mut size: MaybeUninit<WinSize> = MaybeUninit::zeroed();
    // SAFETY: TIOCGWINSZ writes a winsize into the provided pointer, which is valid for writes.
    if unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) } == -1 {
        log::debug!("stdout isn't a terminal, assuming {DEFAULT_COLUMNS} columns");
        return DEFAULT_COLUMNS;
    }
    // SAFETY: The struct was zeroed, which is a valid winsize, and ioctl succeeded.
    match unsafe { size.assume_init() }.ws_col {
        0 => DEFAULT_COLUMNS,
        cols => cols,
    }
}

/// Prints `array` to stdout in columns fitting the current terminal width.
pub fn print_columns<S: AsRef<str>>(array: &[S]) -> std::io::Result<()> {
    super::write_columns(&mut std::io::stdout().lock(), array, terminal_columns() as usize)
}
