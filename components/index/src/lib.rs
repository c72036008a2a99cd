mod bst;
pub use bst::*;
