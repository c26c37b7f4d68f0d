use crate::util::*;

/// Elimination scratch for a whole sweep.
/// Line `l` owns `[l * line_len, (l + 1) * line_len)` of each buffer,
/// so lines never see each other's values.
/// The arena is reused for every sweep of a run.
#[derive(Clone, Debug)]
pub struct ScratchArena<T> {
    lines: usize,
    line_len: usize,
    p: Vec<T>,
    q: Vec<T>,
    x: Vec<T>,
}

/// Borrowed scratch of a single line.
pub struct LineScratch<'a, T> {
    pub line: usize,
    pub p: &'a mut [T],
    pub q: &'a mut [T],
    pub out: &'a mut [T],
}

impl<T: FloatTrait> ScratchArena<T> {
    pub fn new(lines: usize, line_len: usize) -> Self {
        let size = lines * line_len;
        ScratchArena {
            lines,
            line_len,
            p: vec![T::zero(); size],
            q: vec![T::zero(); size],
            x: vec![T::zero(); size],
        }
    }

    /// Arena for square sweeps over `aabb`.
    pub fn for_grid(aabb: &AABB<2>) -> Self {
        debug_assert!(aabb.is_square());
        ScratchArena::new(aabb.len(0), aabb.len(1))
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn line_len(&self) -> usize {
        self.line_len
    }

    /// Solved lines, written by sweeps whose output is not line contiguous.
    pub fn solution(&self) -> &[T] {
        &self.x
    }

    /// Per line scratch for `line_range`, writing solutions into the arena.
    pub fn line_tasks(
        &mut self,
        line_range: std::ops::Range<usize>,
    ) -> Vec<LineScratch<'_, T>> {
        let ScratchArena {
            line_len, p, q, x, ..
        } = self;
        split_lines(*line_len, p, q, x, line_range)
    }

    /// Per line scratch for `line_range`, writing solutions into `out`,
    /// which must be line major with the arena's shape.
    pub fn line_tasks_into<'a>(
        &'a mut self,
        out: &'a mut [T],
        line_range: std::ops::Range<usize>,
    ) -> Vec<LineScratch<'a, T>> {
        debug_assert_eq!(out.len(), self.lines * self.line_len);
        let ScratchArena { line_len, p, q, .. } = self;
        split_lines(*line_len, p, q, out, line_range)
    }
}

fn split_lines<'a, T>(
    line_len: usize,
    p: &'a mut [T],
    q: &'a mut [T],
    out: &'a mut [T],
    line_range: std::ops::Range<usize>,
) -> Vec<LineScratch<'a, T>> {
    p.chunks_mut(line_len)
        .zip(q.chunks_mut(line_len))
        .zip(out.chunks_mut(line_len))
        .enumerate()
        .filter(|(line, _)| line_range.contains(line))
        .map(|(line, ((p, q), out))| LineScratch { line, p, q, out })
        .collect()
}
