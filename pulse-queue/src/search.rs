//! Insertion and lookup strategy over the ordered sequence.
//!
//! Every operation picks between two strategies on sequence length.
//! Small sequences take reverse linear scans: real scheduling workloads
//! insert priorities near "now", which cluster at the tail, so the scan
//! usually ends within a few comparisons. Large sequences take a
//! closed-bound binary search that lands inside an equal-priority band
//! and restores FIFO order by walking the band.

use core::cmp::Ordering;

use crate::seq::OrderedSeq;
use crate::{EventId, Priority};

/// Sequence length below which linear scans beat binary search.
pub(crate) const SCAN_THRESHOLD: usize = 512;

/// Returns the splice slot for priority `p` given the closed candidate
/// range `[lo, hi]`.
///
/// A fresh push passes the full range. A bounded reinsert guarantees
/// `seq[lo - 1].priority <= p` (when `lo > 0`) and
/// `seq[hi + 1].priority > p` (when `hi + 1 < len`), so only the range
/// itself is ever examined. The sequence must be non-empty.
pub(crate) fn insertion_slot<P: Priority, T>(
    seq: &OrderedSeq<P, T>,
    lo: usize,
    hi: usize,
    p: P,
) -> usize {
    let len = seq.len();

    // Appends dominate scheduling workloads; prepend is the mirror case.
    if p >= seq.priority_at(len - 1) {
        return len;
    }
    if p < seq.priority_at(0) {
        return 0;
    }
    // Two elements and neither end claimed it: strictly between.
    if len == 2 {
        return 1;
    }

    if len < SCAN_THRESHOLD {
        // Reverse scan from the top of the candidate range. Stops at the
        // first predecessor not above `p`, which keeps equal-priority
        // runs in arrival order.
        let mut slot = hi + 1;
        while slot > lo && p < seq.priority_at(slot - 1) {
            slot -= 1;
        }
        return slot;
    }

    binary_slot(seq, lo, hi, p)
}

/// Closed-bound binary search for the FIFO splice slot of `p`.
fn binary_slot<P: Priority, T>(
    seq: &OrderedSeq<P, T>,
    mut lo: usize,
    mut hi: usize,
    p: P,
) -> usize {
    // The bound range shrinks strictly every iteration.
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match p.cmp(&seq.priority_at(mid)) {
            Ordering::Less => {
                if mid == lo {
                    return mid;
                }
                hi = mid - 1;
            }
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                // Walk past the tied band so equal priorities stay FIFO.
                let mut slot = mid + 1;
                while slot <= hi && seq.priority_at(slot) == p {
                    slot += 1;
                }
                return slot;
            }
        }
    }
    lo
}

/// Returns the position of `id`, whose current priority `p` was already
/// fetched from the id index.
///
/// # Panics
///
/// Panics if `id` cannot be found. The index said the event exists, so
/// a miss here means the structure is corrupt, not that the caller
/// passed a bad handle.
pub(crate) fn locate<P: Priority, T>(seq: &OrderedSeq<P, T>, id: EventId, p: P) -> usize {
    let len = seq.len();

    if len < SCAN_THRESHOLD {
        // Id-only reverse scan; priority is not consulted.
        let mut i = len;
        while i > 0 {
            i -= 1;
            if seq.get(i).id == id {
                return i;
            }
        }
        missing_event(id);
    }

    // Land anywhere inside the equal-priority band...
    let mut lo = 0;
    let mut hi = len - 1;
    let mut anchor = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        match p.cmp(&seq.priority_at(mid)) {
            Ordering::Less => {
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => {
                anchor = Some(mid);
                break;
            }
        }
    }
    let Some(anchor) = anchor else { missing_event(id) };

    // ...then fan outward on id until the band is exhausted.
    if seq.get(anchor).id == id {
        return anchor;
    }
    let mut left = anchor;
    while left > 0 && seq.priority_at(left - 1) == p {
        left -= 1;
        if seq.get(left).id == id {
            return left;
        }
    }
    let mut right = anchor + 1;
    while right < len && seq.priority_at(right) == p {
        if seq.get(right).id == id {
            return right;
        }
        right += 1;
    }

    missing_event(id)
}

#[cold]
#[inline(never)]
fn missing_event(id: EventId) -> ! {
    panic!("event {id:?} is in the index but absent from the sequence");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident;
    use crate::seq::Event;

    fn seq_of(priorities: &[u64]) -> (OrderedSeq<u64, usize>, Vec<EventId>) {
        let mut seq = OrderedSeq::new();
        let mut ids = Vec::with_capacity(priorities.len());
        for (i, &p) in priorities.iter().enumerate() {
            let id = ident::next_id();
            ids.push(id);
            seq.insert_at(i, Event {
                priority: p,
                id,
                payload: i,
            });
        }
        (seq, ids)
    }

    fn full_slot(seq: &OrderedSeq<u64, usize>, p: u64) -> usize {
        insertion_slot(seq, 0, seq.len() - 1, p)
    }

    #[test]
    fn append_and_prepend_fast_paths() {
        let (seq, _) = seq_of(&[10, 20, 30]);

        assert_eq!(full_slot(&seq, 30), 3); // equal to last appends
        assert_eq!(full_slot(&seq, 99), 3);
        assert_eq!(full_slot(&seq, 5), 0);
    }

    #[test]
    fn two_element_ladder_case() {
        let (seq, _) = seq_of(&[10, 30]);
        assert_eq!(full_slot(&seq, 20), 1);
        assert_eq!(full_slot(&seq, 10), 1); // after its equal, FIFO
    }

    #[test]
    fn linear_scan_keeps_ties_fifo() {
        let (seq, _) = seq_of(&[10, 20, 20, 20, 30]);
        // A fourth 20 lands after the whole band.
        assert_eq!(full_slot(&seq, 20), 4);
        assert_eq!(full_slot(&seq, 15), 1);
        assert_eq!(full_slot(&seq, 25), 4);
    }

    #[test]
    fn bounded_scan_never_leaves_range() {
        let (seq, _) = seq_of(&[10, 20, 30, 40, 50]);
        // Candidate range [2, 3] for a priority that belongs at 2.
        assert_eq!(insertion_slot(&seq, 2, 3, 25), 2);
        assert_eq!(insertion_slot(&seq, 2, 3, 45), 4);
    }

    #[test]
    fn binary_slot_matches_linear_slot() {
        // Above the threshold with duplicate bands everywhere.
        let priorities: Vec<u64> = (0..600).map(|i| (i / 3) as u64).collect();
        let (seq, _) = seq_of(&priorities);
        assert!(seq.len() >= SCAN_THRESHOLD);

        for p in [0u64, 57, 100, 199] {
            let slot = full_slot(&seq, p);
            // All equals strictly before the slot, all greater at/after.
            assert!(slot == 0 || seq.priority_at(slot - 1) <= p);
            assert!(slot == seq.len() || seq.priority_at(slot) > p);
        }
    }

    #[test]
    fn locate_linear_branch() {
        let (seq, ids) = seq_of(&[10, 20, 20, 20, 30]);

        assert_eq!(locate(&seq, ids[0], 10), 0);
        assert_eq!(locate(&seq, ids[2], 20), 2);
        assert_eq!(locate(&seq, ids[4], 30), 4);
    }

    #[test]
    fn locate_binary_branch_scans_band_both_ways() {
        let priorities: Vec<u64> = (0..600).map(|i| (i / 10) as u64).collect();
        let (seq, ids) = seq_of(&priorities);
        assert!(seq.len() >= SCAN_THRESHOLD);

        // Every member of a wide band is found, not just the landing point.
        for pos in [0usize, 299, 300, 305, 309, 599] {
            let p = seq.priority_at(pos);
            assert_eq!(locate(&seq, ids[pos], p), pos);
        }
    }

    #[test]
    #[should_panic(expected = "absent from the sequence")]
    fn locate_missing_id_is_fatal() {
        let (seq, _) = seq_of(&[10, 20, 30]);
        let stranger = ident::next_id();
        locate(&seq, stranger, 20);
    }
}
