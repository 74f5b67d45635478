// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded message formatting.

use std::fmt;
use std::fmt::Arguments;
use std::fmt::Write;

use crate::config::MESSAGE_CAPACITY;
use crate::str::truncate;

/// A fixed-size, stack-allocated buffer that renders [`Arguments`] into text.
///
/// Output beyond `N` bytes is dropped. The cut always lands on a char boundary, and once a
/// write has been cut every later write is ignored, so the stored text is always a prefix of the
/// full rendering.
///
/// # Examples
///
/// ```
/// use clogforth::format::MessageBuffer;
///
/// let msg = MessageBuffer::<8>::format(format_args!("{}-{}", "abcd", 12345));
/// assert_eq!(msg.as_str(), "abcd-123");
/// ```
pub struct MessageBuffer<const N: usize = MESSAGE_CAPACITY> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> MessageBuffer<N> {
    /// Render `args` into a new buffer.
    pub fn format(args: Arguments<'_>) -> Self {
        let mut buffer = MessageBuffer {
            buf: [0; N],
            len: 0,
            truncated: false,
        };

        match args.as_str() {
            Some(s) => {
                let _ = buffer.write_str(s);
            }
            None => {
                let _ = buffer.write_fmt(args);
            }
        }
        buffer
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        // Every byte in `buf[..len]` came from a `&str` cut at a char boundary.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Whether some of the rendered output did not fit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The buffer capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Write for MessageBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let remaining = N - self.len;
        let piece = truncate(s, remaining);
        self.buf[self.len..self.len + piece.len()].copy_from_slice(piece.as_bytes());
        self.len += piece.len();
        if piece.len() < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for MessageBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

impl<const N: usize> fmt::Display for MessageBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
