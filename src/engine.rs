use index::Bst;

use crate::EngineError;
use crate::Record;
use crate::Rid;

/// Upper bound for last-name prefix scans. '~' sorts after every ASCII
/// lowercase letter, so any realistic lowercase last name falls below it.
const LAST_KEY_SENTINEL: &str = "~";

/// Engine owns the record heap and both indexes and keeps the three
/// structures consistent.
///
/// The heap is append-only: a record's slot(its Rid) never moves and is
/// never reused. Deletion is logical, the record keeps its slot while both
/// indexes drop it. One logical caller at a time; there is no internal
/// synchronization.
pub struct Engine {
    heap: Vec<Record>,
    id_index: Bst<i64, Rid>,
    last_index: Bst<String, Vec<Rid>>,
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

impl Engine {
    pub fn new() -> Engine {
        Engine {
            heap: Vec::new(),
            id_index: Bst::new(),
            last_index: Bst::new(),
        }
    }

    /// number of heap slots, deleted records included.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// record_at returns the record in slot `rid`, deleted or not.
    pub fn record_at(&self, rid: Rid) -> Option<&Record> {
        self.heap.get(rid)
    }

    /// insert_record appends `rec` to the heap and registers it in both
    /// indexes. Returns the Rid assigned to it.
    ///
    /// An existing live record with the same id loses its id-index mapping
    /// to the new one; avoiding or accepting that is up to the caller.
    pub fn insert_record(&mut self, rec: Record) -> Rid {
        let rid = self.heap.len();
        let id = rec.id;
        let last_key = rec.last.to_lowercase();

        if self.id_index.find(&id).is_some() {
            warn!("live id mapping overwritten"; "id" => id, "rid" => rid);
        }

        self.heap.push(Record {
            deleted: false,
            ..rec
        });
        self.id_index.insert(id, rid);

        if let Some(bucket) = self.last_index.find(&last_key) {
            bucket.push(rid);
        } else {
            self.last_index.insert(last_key, vec![rid]);
        }

        debug!("record inserted"; "id" => id, "rid" => rid);
        rid
    }

    /// delete_by_id soft-deletes the record with `id`: flips its deleted
    /// flag and drops it from both indexes. Ok(false) when no live record
    /// has that id.
    ///
    /// The bucket removal is keyed by the last name stored in the record at
    /// deletion time, not by anything re-derived later.
    pub fn delete_by_id(&mut self, id: i64) -> Result<bool, EngineError> {
        let rid = match self.id_index.find(&id) {
            Some(rid) => *rid,
            None => return Ok(false),
        };

        let heap_len = self.heap.len();
        let rec = self
            .heap
            .get_mut(rid)
            .ok_or(EngineError::CorruptIndex(rid, heap_len))?;
        rec.deleted = true;
        let last_key = rec.last.to_lowercase();

        self.id_index.erase(&id);

        let mut emptied = false;
        if let Some(bucket) = self.last_index.find(&last_key) {
            bucket.retain(|r| *r != rid);
            emptied = bucket.is_empty();
        }
        // no empty bucket may persist
        if emptied {
            self.last_index.erase(&last_key);
        }

        debug!("record soft-deleted"; "id" => id, "rid" => rid);
        Ok(true)
    }

    /// find_by_id returns the live record with `id` together with the number
    /// of key comparisons this one lookup cost.
    ///
    /// A deleted record is reported as absent, exactly like an unknown id.
    pub fn find_by_id(&mut self, id: i64) -> Result<(Option<&Record>, u64), EngineError> {
        self.id_index.reset_metrics();
        let rid = self.id_index.find(&id).map(|rid| *rid);
        let cmps = self.id_index.comparisons();

        let rid = match rid {
            Some(rid) => rid,
            None => return Ok((None, cmps)),
        };

        let heap_len = self.heap.len();
        let rec = self
            .heap
            .get(rid)
            .ok_or(EngineError::CorruptIndex(rid, heap_len))?;
        if rec.deleted {
            return Ok((None, cmps));
        }
        Ok((Some(rec), cmps))
    }

    /// range_by_id returns the live records with id in `[lo, hi]` inclusive,
    /// in ascending id order, and the comparison count of the traversal.
    pub fn range_by_id(&mut self, lo: i64, hi: i64) -> (Vec<&Record>, u64) {
        self.id_index.reset_metrics();

        let heap = &self.heap;
        let mut hits = Vec::new();
        self.id_index.range_apply(&lo, &hi, |_, rid: &Rid| {
            // bounds and liveness are independent checks
            if let Some(rec) = heap.get(*rid) {
                if !rec.deleted {
                    hits.push(rec);
                }
            }
        });

        (hits, self.id_index.comparisons())
    }

    /// prefix_by_last returns every live record whose lowercase last name
    /// starts with lowercase `prefix`, and the comparison count.
    ///
    /// The scan runs over `[prefix, sentinel]`, which also admits keys that
    /// sort after the prefix without containing it, so the visitor
    /// re-verifies the prefix on every visited key.
    pub fn prefix_by_last(&mut self, prefix: &str) -> (Vec<&Record>, u64) {
        self.last_index.reset_metrics();

        let want = prefix.to_lowercase();
        let hi = LAST_KEY_SENTINEL.to_string();

        let heap = &self.heap;
        let mut hits = Vec::new();
        self.last_index.range_apply(&want, &hi, |key, bucket: &Vec<Rid>| {
            if !key.starts_with(&want) {
                return;
            }
            for rid in bucket {
                if let Some(rec) = heap.get(*rid) {
                    if !rec.deleted {
                        hits.push(rec);
                    }
                }
            }
        });

        (hits, self.last_index.comparisons())
    }
}
