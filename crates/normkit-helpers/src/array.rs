/// Sorts ascending. The vector is consumed and handed back.
pub fn sort(values: Option<Vec<i64>>) -> Option<Vec<i64>> {
    values.map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Largest element, or `None` for absent or empty input.
pub fn find_max(values: Option<&[i64]>) -> Option<i64> { values?.iter().copied().max() }
