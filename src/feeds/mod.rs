/// This module provides the Google Merchant (Atom) product feed.
pub mod google_merchant;
