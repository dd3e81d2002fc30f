//! Dotted paths for addressing nested mappings.
//!
//! A dotted path is a sequence of mapping keys joined by `.`. [`Path`] is the
//! borrowed form and [`PathBuf`] the owned one, mirroring `str` and `String`.
//!
//! Paths are split on every separator and nothing is dropped: `"a."` names the
//! empty key inside `a`, and `""` names the empty key at the top level. Every
//! path therefore has at least one segment, and every key that does not
//! itself contain a `.` has exactly one dotted address.
//!
//! ```rust
//! use nesteddict::nested::{Path, PathBuf};
//!
//! let port = PathBuf::from("server.http.port");
//! assert_eq!(port.file_name(), "port");
//! assert_eq!(port.parent(), Some(Path::new("server.http")));
//!
//! // Grow one segment at a time
//! let mut host = PathBuf::from("server");
//! host.push("http");
//! host.push("host");
//! assert_eq!(host.parent(), port.parent());
//!
//! // Empty segments are real keys
//! let raw = Path::new("server..http.");
//! assert_eq!(raw.components().collect::<Vec<_>>(), ["server", "", "http", ""]);
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// The character separating the segments of a dotted path.
pub const SEPARATOR: char = '.';

/// An owned dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dotted path.
///
/// `Path` is to [`PathBuf`] what `str` is to `String`. It is unsized and always
/// used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Appends one segment in place.
    ///
    /// ```rust
    /// # use nesteddict::nested::PathBuf;
    /// let mut path = PathBuf::from("db");
    /// path.push("pool");
    /// path.push("");
    /// assert_eq!(path.as_str(), "db.pool.");
    /// assert_eq!(path.depth(), 3);
    /// ```
    pub fn push(&mut self, segment: impl AsRef<str>) {
        self.inner.push(SEPARATOR);
        self.inner.push_str(segment.as_ref());
    }

    /// Consumes the path, returning the underlying string.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Path {
    /// Borrows a string as a path.
    pub const fn new(s: &str) -> &Path {
        // SAFETY: Path is a transparent wrapper around str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path segments, empty ones included.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split(SEPARATOR)
    }

    /// Number of segments; never zero
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Splits off the first segment.
    ///
    /// The remainder is `None` when the path has a single segment.
    pub fn split_first(&self) -> (&str, Option<&Path>) {
        match self.inner.split_once(SEPARATOR) {
            Some((head, rest)) => (head, Some(Path::new(rest))),
            None => (&self.inner, None),
        }
    }

    /// The last segment, i.e. the key a value is stored under
    pub fn file_name(&self) -> &str {
        self.inner
            .rsplit_once(SEPARATOR)
            .map_or(&self.inner, |(_, last)| last)
    }

    /// The path of the mapping holding [`file_name`](Path::file_name).
    ///
    /// `None` for single segment paths, whose parent is the root mapping.
    pub fn parent(&self) -> Option<&Path> {
        self.inner
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| Path::new(parent))
    }

    /// The first `depth` segments.
    ///
    /// A `depth` of zero is treated as one; a `depth` past the end returns the
    /// whole path.
    pub fn prefix(&self, depth: usize) -> &Path {
        let end = self
            .inner
            .match_indices(SEPARATOR)
            .nth(depth.saturating_sub(1))
            .map_or(self.inner.len(), |(index, _)| index);
        Path::new(&self.inner[..end])
    }

    /// Returns a new path with `segment` appended
    pub fn join(&self, segment: impl AsRef<str>) -> PathBuf {
        let mut path = self.to_path_buf();
        path.push(segment);
        path
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Owned copy
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        Self {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        Self { inner }
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<PathBuf> for String {
    fn from(path: PathBuf) -> Self {
        path.inner
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Builds a dotted path.
///
/// A single literal borrows it as a `&'static Path`. Any other list of
/// segments, literal or not, is joined into a new [`PathBuf`].
///
/// ```rust
/// # use nesteddict::path;
/// let table = "users";
/// let built = path!("db", table, "limit");
/// assert_eq!(built.as_str(), "db.users.limit");
/// assert_eq!(path!("db.users.limit").to_path_buf(), built);
/// ```
#[macro_export]
macro_rules! path {
    ($single:literal) => {
        $crate::nested::Path::new($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut path = $crate::nested::PathBuf::from($first.to_string());
        $(
            path.push($rest.to_string());
        )*
        path
    }};
}
