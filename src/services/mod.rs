pub mod completion;
pub mod extraction;
