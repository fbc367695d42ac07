#![no_std] // The archived format must stay usable without std

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod lexicon;

pub use lexicon::*;
