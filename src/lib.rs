// Ugkey Library Root
// Hosts the terminal playground; the engine itself lives in ugkey-core

pub mod tui;
