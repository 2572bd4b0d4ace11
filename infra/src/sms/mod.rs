//! SMS dispatch implementations.
//!
//! Real delivery is out of scope for this deployment; the console
//! dispatcher logs the code where a gateway integration would send it.

mod console;

pub use console::ConsoleSmsDispatcher;
