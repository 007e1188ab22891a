//! Consumer-side data model

mod sentence;

pub use sentence::Sentence;
