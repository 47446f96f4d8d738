//! Page-break planning

/// Overflow tolerance in millimetres
pub const OVERFLOW_EPSILON: f64 = 1e-6;

/// An inclusive run of row or column indices printed on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start: usize,
    pub end: usize,
}

impl Band {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Partition `sizes` into page bands
///
/// A new band starts at index `i > 0` when `i` is a manual break, or when
/// adding element `i` would overflow `limit` and the current band already
/// holds something. A single element larger than `limit` gets a band of its
/// own and is never split. `manual` must be sorted.
pub fn plan_bands(sizes: &[f64], limit: f64, manual: &[usize], force_single: bool) -> Vec<Band> {
    if sizes.is_empty() {
        return Vec::new();
    }
    if force_single {
        return vec![Band {
            start: 0,
            end: sizes.len() - 1,
        }];
    }

    let mut bands = Vec::new();
    let mut start = 0;
    let mut acc = 0.0;
    for (i, &size) in sizes.iter().enumerate() {
        let manual_break = i > 0 && manual.binary_search(&i).is_ok();
        let overflow = acc > 0.0 && acc + size > limit + OVERFLOW_EPSILON;
        if i > start && (manual_break || overflow) {
            bands.push(Band { start, end: i - 1 });
            start = i;
            acc = 0.0;
        }
        acc += size;
    }
    bands.push(Band {
        start,
        end: sizes.len() - 1,
    });
    bands
}

/// Map sheet-level break indices onto local indices
///
/// `local_to_sheet` lists the sheet index of each surviving local index in
/// ascending order. A break before a filtered-out index moves to the next
/// surviving one; breaks at or before the first local index, or past the
/// last, vanish.
pub fn map_breaks<T: Copy + Ord>(breaks: &[T], local_to_sheet: &[T]) -> Vec<usize> {
    let mut mapped: Vec<usize> = breaks
        .iter()
        .map(|b| local_to_sheet.partition_point(|s| s < b))
        .filter(|&i| i > 0 && i < local_to_sheet.len())
        .collect();
    mapped.sort_unstable();
    mapped.dedup();
    mapped
}
