//! Header-described tables of fixed-size records.
//!
//! Both the program header table and the section header table are located
//! by an `(offset, entry size, count)` triple taken from the file header.
//! [`Table`] walks such a triple at the declared stride and bounds-checks
//! each record on its own, so one bad entry never hides the others.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::header::ElfError;
use crate::source::ByteSource;

/// A record type that can be decoded from one table entry.
pub trait TableEntry: Sized {
    /// Size of the on-disk record this type decodes.
    const SIZE: u16;

    /// Decodes one record. `record` is exactly [`Self::SIZE`] bytes long.
    ///
    /// # Errors
    ///
    /// Propagates read failures from `record`.
    fn decode(record: &ByteSource<'_>) -> Result<Self, ElfError>;
}

/// A table of `T` records located by offset, stride, and count.
pub struct Table<'a, T> {
    source: ByteSource<'a>,
    offset: u64,
    entsize: u16,
    count: u16,
    _entry: PhantomData<fn() -> T>,
}

impl<T> Clone for Table<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Table<'_, T> {}

impl<T> fmt::Debug for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("offset", &self.offset)
            .field("entsize", &self.entsize)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl<'a, T: TableEntry> Table<'a, T> {
    /// Creates a table view over `source`.
    ///
    /// The table itself is not bounds-checked here; each entry is checked
    /// when it is read.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::EntrySizeTooSmall`] if the table is non-empty and
    /// `entsize` cannot hold one `T` record.
    pub fn new(
        source: ByteSource<'a>,
        offset: u64,
        entsize: u16,
        count: u16,
    ) -> Result<Self, ElfError> {
        if count > 0 && entsize < T::SIZE {
            return Err(ElfError::EntrySizeTooSmall {
                declared: entsize,
                required: T::SIZE,
            });
        }
        Ok(Self {
            source,
            offset,
            entsize,
            count,
            _entry: PhantomData,
        })
    }

    /// Returns the declared number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.count)
    }

    /// Returns `true` if the table declares no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the file offset of the table.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the declared stride between entries.
    #[must_use]
    pub fn entry_size(&self) -> u16 {
        self.entsize
    }

    /// Returns the file offset of entry `index`: `offset + index * entsize`.
    ///
    /// Saturates instead of wrapping, so an absurd offset still fails the
    /// bounds check rather than aliasing the start of the file.
    #[must_use]
    pub fn entry_offset(&self, index: usize) -> u64 {
        let index = u64::try_from(index).unwrap_or(u64::MAX);
        self.offset
            .saturating_add(index.saturating_mul(u64::from(self.entsize)))
    }

    /// Decodes entry `index`, or returns `None` past the declared count.
    ///
    /// The inner result is [`ElfError::OutOfBounds`] if the record is not
    /// entirely inside the source.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Result<T, ElfError>> {
        let index = u16::try_from(index).ok().filter(|&i| i < self.count)?;
        Some(self.decode_at(index))
    }

    fn decode_at(&self, index: u16) -> Result<T, ElfError> {
        let record = self
            .source
            .sub(self.entry_offset(usize::from(index)), u64::from(T::SIZE))?;
        T::decode(&record)
    }

    /// Returns an iterator over every declared entry in index order.
    ///
    /// The iterator yields exactly [`Self::len`] items. Entries that fall
    /// outside the source yield an error and iteration continues.
    #[must_use]
    pub fn iter(&self) -> TableIter<'a, T> {
        TableIter {
            table: *self,
            index: 0,
        }
    }
}

impl<'a, T: TableEntry> IntoIterator for &Table<'a, T> {
    type Item = Result<T, ElfError>;
    type IntoIter = TableIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`Table`].
pub struct TableIter<'a, T> {
    table: Table<'a, T>,
    index: u16,
}

impl<T> Clone for TableIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            index: self.index,
        }
    }
}

impl<T> fmt::Debug for TableIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableIter")
            .field("table", &self.table)
            .field("index", &self.index)
            .finish()
    }
}

impl<T: TableEntry> Iterator for TableIter<'_, T> {
    type Item = Result<T, ElfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.table.count {
            return None;
        }
        let entry = self.table.decode_at(self.index);
        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.table.count - self.index);
        (remaining, Some(remaining))
    }
}

impl<T: TableEntry> ExactSizeIterator for TableIter<'_, T> {}

impl<T: TableEntry> FusedIterator for TableIter<'_, T> {}
