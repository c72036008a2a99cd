quick_error! {
    /// Errors the engine surfaces when it finds a structural invariant
    /// broken. Callers must treat these as fatal: with a single writer they
    /// cannot occur.
    #[derive(Debug, PartialEq, Eq)]
    pub enum EngineError {
        CorruptIndex(rid: usize, heap_len: usize) {
            display("index entry refers to rid {} outside heap of len {}", rid, heap_len)
        }
    }
}
