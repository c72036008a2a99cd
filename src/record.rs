/// Rid is the stable position of a record in the append-only heap.
/// It is assigned at insertion and never reused or reassigned.
pub type Rid = usize;

/// One roster record.
///
/// `id` is unique among live records and feeds the id index; `last` feeds
/// the non-unique last-name index; `first` is not indexed. Deletion is
/// logical: `deleted` hides the record from every lookup while its heap
/// slot stays put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub first: String,
    pub last: String,
    pub deleted: bool,
}

impl Record {
    pub fn new(id: i64, first: &str, last: &str) -> Record {
        Record {
            id,
            first: first.to_string(),
            last: last.to_string(),
            deleted: false,
        }
    }
}
