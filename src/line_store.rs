//! Ordered line storage with a strict, non-geometric growth policy.
//!
//! `Vec<T>` grows by amortized doubling and its own `capacity()` reflects
//! that over-allocation, which would make the exact-capacity guarantees this
//! type promises unobservable. `LineStore<T>` therefore tracks its own
//! logical `capacity` and only ever grows the backing `Vec` to exactly the
//! amount a given operation needs, mirroring the bounds-tracked-alongside-
//! the-value discipline the teacher applies to cursor indices.

use crate::error::Error;
use crate::line::LineElement;

/// Options controlling how a file is split into lines.
#[derive(Clone, Debug)]
pub struct FromFileOptions {
	/// Maximum number of bytes that will be read from the file. Required,
	/// not defaulted: callers must decide their own bound.
	pub max_size: u64,
	/// Byte sequence a line is split on. `None` selects the platform
	/// default (`"\r\n"` on Windows, `"\n"` elsewhere).
	pub newline_delimiter: Option<Vec<u8>>,
}

impl FromFileOptions {
	pub fn new(max_size: u64) -> Self {
		Self { max_size, newline_delimiter: None }
	}

	fn delimiter(&self) -> Vec<u8> {
		match &self.newline_delimiter {
			Some(d) => d.clone(),
			None => default_newline_delimiter(),
		}
	}
}

#[cfg(windows)]
fn default_newline_delimiter() -> Vec<u8> {
	b"\r\n".to_vec()
}

#[cfg(not(windows))]
fn default_newline_delimiter() -> Vec<u8> {
	b"\n".to_vec()
}

/// Whether a copying operation should also shrink the result's capacity
/// down to its live count.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CopyOptions {
	pub shrink: bool,
}

/// An ordered sequence of `T`, with `count <= capacity` tracked explicitly.
#[derive(Clone, Debug, Default)]
pub struct LineStore<T> {
	lines: Vec<T>,
	capacity: usize,
}

impl<T> LineStore<T> {
	pub fn new(initial_capacity: Option<usize>) -> Result<Self, Error> {
		let capacity = initial_capacity.unwrap_or(0);
		let mut lines = Vec::new();
		if capacity > 0 {
			lines.try_reserve_exact(capacity).map_err(|_| Error::OutOfMemory)?;
		}
		Ok(Self { lines, capacity })
	}

	pub fn count(&self) -> usize {
		self.lines.len()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn lines(&self) -> &[T] {
		&self.lines
	}

	/// Grows logical capacity to exactly `needed` if it isn't already at
	/// least that large, reserving only the shortfall in the backing `Vec`.
	fn grow_to_at_least(&mut self, needed: usize) -> Result<(), Error> {
		if needed <= self.capacity {
			return Ok(());
		}
		let real_capacity = self.lines.capacity();
		if needed > real_capacity {
			self.lines
				.try_reserve_exact(needed - real_capacity)
				.map_err(|_| Error::OutOfMemory)?;
		}
		self.capacity = needed;
		Ok(())
	}

	/// Move-appends `items` to the end, growing capacity to exactly
	/// `max(capacity, count + items.len())`.
	pub fn append(&mut self, items: Vec<T>) -> Result<(), Error> {
		let needed = self.lines.len() + items.len();
		self.grow_to_at_least(needed)?;
		self.lines.extend(items);
		Ok(())
	}

	/// Splices `items` at `at` (`0 <= at <= count`), shifting the tail right.
	pub fn insert(&mut self, at: usize, items: Vec<T>) -> Result<(), Error> {
		assert!(at <= self.lines.len(), "insert index out of bounds");
		let needed = self.lines.len() + items.len();
		self.grow_to_at_least(needed)?;
		let tail = self.lines.split_off(at);
		self.lines.extend(items);
		self.lines.extend(tail);
		Ok(())
	}

	/// Removes `[start, end)`, destroying removed elements via ordinary drop.
	pub fn remove(&mut self, start: usize, end: usize, opts: CopyOptions) {
		assert!(start <= end && end <= self.lines.len(), "remove range out of bounds");
		self.lines.drain(start..end);
		if opts.shrink {
			self.capacity = self.lines.len();
			self.lines.shrink_to_fit();
		}
	}
}

impl<T: Clone> LineStore<T> {
	/// Functional variant of [`LineStore::append`]: leaves `self` untouched
	/// and returns a new store holding `self`'s lines followed by `items`.
	pub fn append_copy(&self, items: Vec<T>, opts: CopyOptions) -> Result<Self, Error> {
		let mut copy = Self { lines: self.lines.clone(), capacity: self.capacity };
		copy.append(items)?;
		if opts.shrink {
			copy.capacity = copy.lines.len();
			copy.lines.shrink_to_fit();
		}
		Ok(copy)
	}

	/// Functional variant of [`LineStore::insert`].
	pub fn insert_copy(&self, at: usize, items: Vec<T>, opts: CopyOptions) -> Result<Self, Error> {
		let mut copy = Self { lines: self.lines.clone(), capacity: self.capacity };
		copy.insert(at, items)?;
		if opts.shrink {
			copy.capacity = copy.lines.len();
			copy.lines.shrink_to_fit();
		}
		Ok(copy)
	}

	/// Functional variant of [`LineStore::remove`]. Does not destroy any
	/// elements of `self` — both stores independently own their own clones.
	pub fn remove_copy(&self, start: usize, end: usize, opts: CopyOptions) -> Self {
		assert!(start <= end && end <= self.lines.len(), "remove range out of bounds");
		let mut lines = self.lines.clone();
		lines.drain(start..end);
		let capacity = if opts.shrink {
			lines.shrink_to_fit();
			lines.len()
		} else {
			self.capacity
		};
		Self { lines, capacity }
	}
}

impl<T: LineElement> LineStore<T> {
	/// Reads an entire file, bounded by `opts.max_size`, and splits it into
	/// lines on `opts.newline_delimiter` (or the platform default).
	pub fn from_file(path: impl AsRef<std::path::Path>, opts: &FromFileOptions) -> Result<Self, Error> {
		let path = path.as_ref();
		let meta = std::fs::metadata(path)?;
		if meta.len() > opts.max_size {
			return Err(Error::FileTooLarge { max: opts.max_size, actual: meta.len() });
		}
		let bytes = std::fs::read(path)?;
		let delim = opts.delimiter();
		let pieces: Vec<&[u8]> = if delim.is_empty() {
			vec![&bytes[..]]
		} else {
			split_on(&bytes, &delim)
		};
		let mut store = LineStore::new(Some(pieces.len()))?;
		let items: Vec<T> = pieces.into_iter().map(T::from_bytes).collect();
		store.append(items)?;
		Ok(store)
	}
}

fn split_on<'a>(bytes: &'a [u8], delim: &[u8]) -> Vec<&'a [u8]> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut i = 0;
	while i + delim.len() <= bytes.len() {
		if &bytes[i..i + delim.len()] == delim {
			out.push(&bytes[start..i]);
			i += delim.len();
			start = i;
		} else {
			i += 1;
		}
	}
	out.push(&bytes[start..]);
	out
}
