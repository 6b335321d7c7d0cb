//! Canonical byte codec for proofs.
//!
//! Layout is fixed little-endian framing: `u16` version, 32-byte root, a
//! `u32`-prefixed index list and a `u32`-prefixed opening list.  Field
//! elements always travel as fixed 8-byte strings, so no value is ever
//! squeezed through a truncating representation.  The serde derives on the
//! proof types additionally allow JSON transport by the application glue;
//! this codec is the compact wire form.

use std::fmt;

use crate::field::FieldElement;
use crate::hash::Hash;
use crate::merkle::{MerklePath, PathNode, SiblingSide};

use super::types::{Opening, Proof};

/// Hard cap on decoded collection lengths, precluding absurd allocations
/// from hostile input.
const MAX_DECODED_ITEMS: u32 = 1 << 20;

/// Errors emitted by the proof codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerError {
    /// The input ended before the named component was complete.
    UnexpectedEnd { context: &'static str },
    /// Input remained after the proof was fully decoded.
    TrailingBytes,
    /// A sibling side flag was neither left nor right.
    InvalidSideFlag { value: u8 },
    /// A declared collection length exceeds the decoding limit.
    LengthLimitExceeded { context: &'static str },
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::UnexpectedEnd { context } => {
                write!(f, "unexpected end of input while reading {}", context)
            }
            SerError::TrailingBytes => write!(f, "trailing bytes after proof"),
            SerError::InvalidSideFlag { value } => {
                write!(f, "invalid sibling side flag {}", value)
            }
            SerError::LengthLimitExceeded { context } => {
                write!(f, "declared length of {} exceeds decoding limit", context)
            }
        }
    }
}

impl std::error::Error for SerError {}

/// Encodes a proof into its canonical byte form.
pub fn encode_proof(proof: &Proof) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&proof.version.to_le_bytes());
    out.extend_from_slice(proof.root.as_bytes());
    out.extend_from_slice(&(proof.indices.len() as u32).to_le_bytes());
    for index in &proof.indices {
        out.extend_from_slice(&index.to_le_bytes());
    }
    out.extend_from_slice(&(proof.openings.len() as u32).to_le_bytes());
    for opening in &proof.openings {
        out.extend_from_slice(&opening.index.to_le_bytes());
        out.extend_from_slice(&opening.current.to_bytes());
        out.extend_from_slice(&opening.next.to_bytes());
        encode_path(&mut out, &opening.path_current);
        encode_path(&mut out, &opening.path_next);
    }
    out
}

/// Decodes a proof from its canonical byte form.
pub fn decode_proof(bytes: &[u8]) -> Result<Proof, SerError> {
    let mut cursor = Cursor::new(bytes);
    let version = cursor.read_u16("version")?;
    let root = Hash::from_bytes(cursor.read_array::<32>("root")?);

    let index_count = cursor.read_len("indices")?;
    let mut indices = Vec::with_capacity(index_count);
    for _ in 0..index_count {
        indices.push(cursor.read_u32("index")?);
    }

    let opening_count = cursor.read_len("openings")?;
    let mut openings = Vec::with_capacity(opening_count);
    for _ in 0..opening_count {
        let index = cursor.read_u32("opening index")?;
        let current = FieldElement(u64::from_le_bytes(cursor.read_array::<8>("current value")?));
        let next = FieldElement(u64::from_le_bytes(cursor.read_array::<8>("next value")?));
        let path_current = decode_path(&mut cursor)?;
        let path_next = decode_path(&mut cursor)?;
        openings.push(Opening {
            index,
            current,
            next,
            path_current,
            path_next,
        });
    }

    if !cursor.is_empty() {
        return Err(SerError::TrailingBytes);
    }

    Ok(Proof {
        version,
        root,
        indices,
        openings,
    })
}

fn encode_path(out: &mut Vec<u8>, path: &MerklePath) {
    out.extend_from_slice(&path.index.to_le_bytes());
    out.extend_from_slice(&(path.nodes.len() as u32).to_le_bytes());
    for node in &path.nodes {
        let side = match node.side {
            SiblingSide::Left => 0u8,
            SiblingSide::Right => 1u8,
        };
        out.push(side);
        out.extend_from_slice(node.digest.as_bytes());
    }
}

fn decode_path(cursor: &mut Cursor<'_>) -> Result<MerklePath, SerError> {
    let index = cursor.read_u32("path index")?;
    let node_count = cursor.read_len("path nodes")?;
    let mut nodes = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let side = match cursor.read_u8("side flag")? {
            0 => SiblingSide::Left,
            1 => SiblingSide::Right,
            value => return Err(SerError::InvalidSideFlag { value }),
        };
        let digest = Hash::from_bytes(cursor.read_array::<32>("sibling digest")?);
        nodes.push(PathNode { side, digest });
    }
    Ok(MerklePath { index, nodes })
}

/// Forward-only reader over the input bytes.
struct Cursor<'a> {
    bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8], SerError> {
        if self.bytes.len() < len {
            return Err(SerError::UnexpectedEnd { context });
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    fn read_u8(&mut self, context: &'static str) -> Result<u8, SerError> {
        Ok(self.take(1, context)?[0])
    }

    fn read_u16(&mut self, context: &'static str) -> Result<u16, SerError> {
        let mut buf = [0u8; 2];
        buf.copy_from_slice(self.take(2, context)?);
        Ok(u16::from_le_bytes(buf))
    }

    fn read_u32(&mut self, context: &'static str) -> Result<u32, SerError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4, context)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_len(&mut self, context: &'static str) -> Result<usize, SerError> {
        let len = self.read_u32(context)?;
        if len > MAX_DECODED_ITEMS {
            return Err(SerError::LengthLimitExceeded { context });
        }
        Ok(len as usize)
    }

    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], SerError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N, context)?);
        Ok(buf)
    }
}
