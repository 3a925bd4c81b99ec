//! Dictionary membership structures

mod prefix_set;

pub use prefix_set::PrefixSet;
