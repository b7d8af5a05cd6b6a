//! Console reader thread feeding text commands to the UI thread.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Spawn a thread that reads stdin line by line and forwards each line.
///
/// The thread ends after forwarding `quit`, at end of input, or once the
/// receiving side is gone. End of input leaves the window open.
pub fn spawn() -> io::Result<(Receiver<String>, JoinHandle<()>)> {
    let (tx, rx) = mpsc::channel();
    let handle = thread::Builder::new()
        .name("console".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            read_commands(stdin.lock(), &tx, true);
        })?;
    Ok((rx, handle))
}

/// Forward lines from `input` to `tx` until `quit`, EOF or a closed channel.
pub fn read_commands<R: BufRead>(input: R, tx: &Sender<String>, prompt: bool) {
    let mut lines = input.lines();
    loop {
        if prompt {
            print!("> ");
            let _ = io::stdout().flush();
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("Failed to read console input: {e}");
                break;
            }
            None => {
                log::debug!("Console input closed");
                return;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let quit = line.trim() == "quit";
        if tx.send(line).is_err() || quit {
            return;
        }
    }
}
