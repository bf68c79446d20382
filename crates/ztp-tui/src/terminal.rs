//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ztp_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen in raw mode with bracketed paste
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        // Paste still works as a burst of key events
        debug!("Bracketed paste unavailable: {}", e);
    }
    Ok(terminal)
}

/// Leave the alternate screen
pub fn restore() -> Result<()> {
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}
