//! Fixed-size aligned buffers
//!
//! A [`Block`] is a plain scalar array aligned to 128 bytes, the widest
//! alignment any vector in the resolver table asks for. Walking it in chunks
//! of `V::LANES` scalars therefore always lands on `V::ALIGNMENT`, so every
//! chunk is read and written with the aligned loads and stores.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::slice::{ChunksExact, ChunksExactMut};

use crate::element::SimdElement;
use crate::traits::SimdVector;

/// Alignment of every block in bytes
pub const BLOCK_ALIGNMENT: usize = 128;

/// Fixed-size scalar buffer aligned for any vector over `T`
///
/// # Memory Layout
///
/// Scalars are stored in order. Chunk `k` covers scalars
/// `k * LANES .. (k + 1) * LANES`:
///
/// ```text
/// Block<f32, 16> walked as f32x4:
/// [0  1  2  3] [4  5  6  7] [8  9  10 11] [12 13 14 15]
///  └ chunk 0 ┘  └ chunk 1 ┘  └ chunk 2 ─┘  └ chunk 3 ─┘
/// ```
///
/// # Example
///
/// ```rust
/// use lanes::{Block, f32x8, SimdVector};
///
/// let mut block = Block::<f32, 32>::from_slice(&[1.0; 32]);
/// let gain = f32x8::splat(0.5);
/// for mut chunk in block.chunks_mut::<f32x8>() {
///     let value = chunk.load();
///     chunk.store(value.mul(gain));
/// }
/// assert_eq!(block.as_slice(), &[0.5; 32]);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(C, align(128))]
pub struct Block<T: SimdElement, const LEN: usize> {
    data: [T; LEN],
}

impl<T: SimdElement, const LEN: usize> Block<T, LEN> {
    /// Create a block filled with zeros
    ///
    /// # Example
    ///
    /// ```rust
    /// use lanes::Block;
    ///
    /// let block = Block::<u16, 64>::new();
    /// assert_eq!(block.len(), 64);
    /// assert!(block.as_slice().iter().all(|&x| x == 0));
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::splat(T::ZERO)
    }

    /// Create a block with every scalar set to `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; LEN] }
    }

    /// Create a block from a slice of exactly `LEN` scalars
    ///
    /// # Panics
    ///
    /// Panics if the slice length is not `LEN`
    #[inline]
    pub fn from_slice(slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            LEN,
            "slice length {} doesn't match block length {}",
            slice.len(),
            LEN
        );
        let mut data = [T::ZERO; LEN];
        data.copy_from_slice(slice);
        Self { data }
    }

    /// Number of scalars
    #[inline]
    pub const fn len(&self) -> usize {
        LEN
    }

    /// True for a zero-length block
    #[inline]
    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }

    /// Borrow the scalars
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow the scalars mutably
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the block as vectors of type `V`
    ///
    /// # Panics
    ///
    /// Panics if `V::LANES` does not divide `LEN`, or if `V` needs more than
    /// 128-byte alignment
    ///
    /// # Example
    ///
    /// ```rust
    /// use lanes::{Block, u32x4, SimdVector};
    ///
    /// let mut block = Block::<u32, 16>::new();
    /// for (i, x) in block.as_mut_slice().iter_mut().enumerate() {
    ///     *x = i as u32;
    /// }
    /// let total: u32 = block.chunks::<u32x4>().map(|v| v.horizontal_sum()).sum();
    /// assert_eq!(total, 120);
    /// ```
    #[inline]
    pub fn chunks<V: SimdVector<Scalar = T>>(&self) -> Chunks<'_, T, V> {
        check_chunking::<T, V>(LEN);
        Chunks {
            inner: self.data.chunks_exact(V::LANES),
            _vector: PhantomData,
        }
    }

    /// Iterate over the block as mutable vector-sized chunks
    ///
    /// # Panics
    ///
    /// Same conditions as [`chunks`](Self::chunks)
    #[inline]
    pub fn chunks_mut<V: SimdVector<Scalar = T>>(&mut self) -> ChunksMut<'_, T, V> {
        check_chunking::<T, V>(LEN);
        ChunksMut {
            inner: self.data.chunks_exact_mut(V::LANES),
            _vector: PhantomData,
        }
    }

    /// Replace every chunk `v` with `f(v)`
    ///
    /// # Example
    ///
    /// ```rust
    /// use lanes::{Block, i16x8, SimdSigned};
    ///
    /// let mut block = Block::<i16, 32>::splat(-3);
    /// block.map_chunks(|v: i16x8| v.abs());
    /// assert_eq!(block[31], 3);
    /// ```
    #[inline]
    pub fn map_chunks<V, F>(&mut self, mut f: F)
    where
        V: SimdVector<Scalar = T>,
        F: FnMut(V) -> V,
    {
        for mut chunk in self.chunks_mut::<V>() {
            let value = chunk.load();
            chunk.store(f(value));
        }
    }
}

#[inline]
fn check_chunking<T: SimdElement, V: SimdVector<Scalar = T>>(len: usize) {
    assert_eq!(
        len % V::LANES,
        0,
        "block length {} must be divisible by lane count {}",
        len,
        V::LANES
    );
    assert!(
        BLOCK_ALIGNMENT % V::ALIGNMENT == 0
            && (V::LANES * core::mem::size_of::<T>()) % V::ALIGNMENT == 0,
        "{}-byte vectors cannot be chunked from a {}-byte aligned block",
        V::ALIGNMENT,
        BLOCK_ALIGNMENT
    );
}

impl<T: SimdElement, const LEN: usize> Default for Block<T, LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SimdElement, const LEN: usize> core::fmt::Debug for Block<T, LEN> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: SimdElement, const LEN: usize> Index<usize> for Block<T, LEN> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: SimdElement, const LEN: usize> IndexMut<usize> for Block<T, LEN> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Iterator over a block as vectors
pub struct Chunks<'a, T, V> {
    inner: ChunksExact<'a, T>,
    _vector: PhantomData<V>,
}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> Iterator for Chunks<'a, T, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.next().map(V::from_slice_aligned)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> ExactSizeIterator for Chunks<'a, T, V> {}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> FusedIterator for Chunks<'a, T, V> {}

/// Iterator over a block as mutable vector-sized chunks
pub struct ChunksMut<'a, T, V> {
    inner: ChunksExactMut<'a, T>,
    _vector: PhantomData<V>,
}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> Iterator for ChunksMut<'a, T, V> {
    type Item = ChunkMut<'a, T, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slice| ChunkMut {
            slice,
            _vector: PhantomData,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> ExactSizeIterator for ChunksMut<'a, T, V> {}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> FusedIterator for ChunksMut<'a, T, V> {}

/// One vector-sized window of a block
pub struct ChunkMut<'a, T, V> {
    slice: &'a mut [T],
    _vector: PhantomData<V>,
}

impl<'a, T: SimdElement, V: SimdVector<Scalar = T>> ChunkMut<'a, T, V> {
    /// Load the chunk as a vector
    #[inline]
    pub fn load(&self) -> V {
        V::from_slice_aligned(self.slice)
    }

    /// Overwrite the chunk with a vector
    #[inline]
    pub fn store(&mut self, value: V) {
        value.to_slice_aligned(self.slice)
    }

    /// Overwrite only the lanes selected by `mask`
    #[inline]
    pub fn store_masked(&mut self, mask: V::Mask, value: V) {
        value.store_masked(mask, self.slice)
    }

    /// Borrow the chunk's scalars
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }
}
