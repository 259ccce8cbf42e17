///
/// ByteBuffer - Core Bytes Type
///
/// An immutable byte sequence shared across all bytekit crates.
/// Storage is reference-counted so clones are cheap and never copy the payload.
///

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable, length-known sequence of bytes
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteBuffer {
    data: Arc<[u8]>,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self { data: Arc::from(Vec::new()) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self { data: Arc::from(v) }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(s: &[u8]) -> Self {
        Self { data: Arc::from(s) }
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(a: [u8; N]) -> Self {
        Self { data: Arc::from(&a[..]) }
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(b: ByteBuffer) -> Self {
        b.data.to_vec()
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        *self.data == *other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        *self.data == **other
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        *self.data == other[..]
    }
}

// Long payloads are truncated so log lines stay readable. Formatted by hand
// since core has no dependency on the hex crate.
impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 32;
        write!(f, "ByteBuffer({} bytes: ", self.len())?;
        for b in self.data.iter().take(PREVIEW) {
            write!(f, "{:02x}", b)?;
        }
        if self.len() > PREVIEW {
            write!(f, "..")?;
        }
        write!(f, ")")
    }
}
