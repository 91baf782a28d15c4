//! Address-ordered doubly linked list over the free segments.
//!
//! The list threads every segment that is not in use, ordered by
//! ascending start offset:
//!
//! ```text
//!    head
//!     |
//!     v
//! +--------+      +--------+      +--------+
//! |  free  | <--> |  free  | <--> |  free  |
//! | @ 136  |      | @ 1024 |      | @ 3960 |
//! +--------+      +--------+      +--------+
//! ```
//!
//! Ordering by address keeps neighbor checks meaningful (two entries that
//! touch in the region sit next to each other in the list) and makes the
//! allocation pattern deterministic: the lowest qualifying address wins.
//! The price is a linear scan on insertion and search, acceptable for a
//! region managed as one flat list rather than size-class buckets.
//!
//! The `prev`/`next` links live inside the [`Segment`] records, so the
//! list itself holds nothing but the head offset and a length.
//!
//! [`Segment`]: crate::segment::Segment

use crate::segment::SegmentTable;

#[derive(Debug, Default)]
pub(crate) struct FreeList {
    head: Option<usize>,
    len: usize,
}

impl FreeList {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks the segment at `offset` free and links it in at its
    /// address-ordered position. Costs a linear scan from the head.
    pub fn insert(&mut self, segments: &mut SegmentTable, offset: usize) {
        // The entry this one has to go after: the last entry with a
        // smaller start offset.
        let mut anchor = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if current > offset {
                break;
            }
            anchor = Some(current);
            cursor = segments.get(current).and_then(|segment| segment.next);
        }

        match anchor {
            None => {
                let old_head = self.head;
                if let Some(head) = old_head {
                    segments.get_mut(head).unwrap().prev = Some(offset);
                }

                let segment = segments.get_mut(offset).unwrap();
                segment.in_use = false;
                segment.prev = None;
                segment.next = old_head;

                self.head = Some(offset);
            }
            Some(anchor_offset) => {
                let anchor_next = segments.get(anchor_offset).unwrap().next;
                if let Some(next) = anchor_next {
                    segments.get_mut(next).unwrap().prev = Some(offset);
                }

                let segment = segments.get_mut(offset).unwrap();
                segment.in_use = false;
                segment.prev = Some(anchor_offset);
                segment.next = anchor_next;

                segments.get_mut(anchor_offset).unwrap().next = Some(offset);
            }
        }

        self.len += 1;
    }

    /// Unlinks the segment at `offset` and clears its links. O(1) given
    /// the segment's own `prev`/`next`.
    pub fn remove(&mut self, segments: &mut SegmentTable, offset: usize) {
        let (prev, next) = match segments.get(offset) {
            Some(segment) => (segment.prev, segment.next),
            None => return,
        };

        match prev {
            Some(prev_offset) => segments.get_mut(prev_offset).unwrap().next = next,
            None => self.head = next,
        }
        if let Some(next_offset) = next {
            segments.get_mut(next_offset).unwrap().prev = prev;
        }

        let segment = segments.get_mut(offset).unwrap();
        segment.prev = None;
        segment.next = None;

        self.len -= 1;
    }

    /// Walks the list head to tail and returns the offset of the first
    /// segment of at least `required` bytes, together with the number of
    /// entries passed over before the match. When nothing fits, the hop
    /// count equals the list length.
    pub fn first_fit(&self, segments: &SegmentTable, required: usize) -> (Option<usize>, usize) {
        if self.is_empty() {
            return (None, 0);
        }

        let mut hops = 0;
        let mut cursor = self.head;

        while let Some(offset) = cursor {
            let segment = match segments.get(offset) {
                Some(segment) => segment,
                None => break,
            };

            if segment.size >= required {
                return (Some(offset), hops);
            }

            hops += 1;
            cursor = segment.next;
        }

        (None, hops)
    }

    /// The list contents in link order, for asserting on structure.
    #[cfg(test)]
    pub fn offsets(&self, segments: &SegmentTable) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut cursor = self.head;

        while let Some(offset) = cursor {
            offsets.push(offset);
            cursor = segments.get(offset).and_then(|segment| segment.next);
        }

        offsets
    }
}
