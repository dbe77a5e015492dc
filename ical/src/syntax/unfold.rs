// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Streaming removal of RFC 5545 line folding.
//!
//! A long content line is split on the wire by inserting CRLF followed by a
//! single SPACE or HTAB. [`Unfolder`] wraps any [`Read`] and drops those
//! three-octet sequences, so the layers above only ever see logical lines.

use std::collections::VecDeque;
use std::io::{self, Read};

const CHUNK_SIZE: usize = 4096;

/// A [`Read`] adapter that removes CRLF + SPACE/HTAB fold markers.
///
/// A CRLF that is not followed by a fold character is a real line terminator
/// and is passed through unchanged. The fold marker may straddle reads from
/// the underlying source: up to two octets (`\r` or `\r\n`) are held back
/// until the next octet decides what they are.
///
/// # Example
///
/// ```
/// # use std::io::Read;
/// # use calwire_ical::syntax::Unfolder;
/// let mut unfolder = Unfolder::new("DESCRIPTION:This is a lo\r\n ng description\r\n".as_bytes());
/// let mut out = String::new();
/// unfolder.read_to_string(&mut out).unwrap();
/// assert_eq!(out, "DESCRIPTION:This is a long description\r\n");
/// ```
#[derive(Debug)]
pub struct Unfolder<R> {
    inner: R,
    held: Held,
    ready: VecDeque<u8>,
    chunk: Box<[u8]>,
    eof: bool,
}

/// Octets held back because they may start a fold marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Nothing,
    Cr,
    CrLf,
}

impl<R: Read> Unfolder<R> {
    /// Wrap a byte source.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            held: Held::Nothing,
            ready: VecDeque::new(),
            chunk: vec![0; CHUNK_SIZE].into_boxed_slice(),
            eof: false,
        }
    }

    /// Consumes the unfolder, returning the underlying reader.
    ///
    /// Octets already read from the source but not yet handed out are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn push(&mut self, byte: u8) {
        match (self.held, byte) {
            (Held::Nothing, b'\r') => self.held = Held::Cr,
            (Held::Nothing, _) => self.ready.push_back(byte),
            (Held::Cr, b'\n') => self.held = Held::CrLf,
            (Held::Cr, _) => {
                self.ready.push_back(b'\r');
                self.held = Held::Nothing;
                self.push(byte);
            }
            (Held::CrLf, b' ' | b'\t') => self.held = Held::Nothing,
            (Held::CrLf, _) => {
                self.ready.extend(b"\r\n");
                self.held = Held::Nothing;
                self.push(byte);
            }
        }
    }

    fn release_held(&mut self) {
        match self.held {
            Held::Nothing => {}
            Held::Cr => self.ready.push_back(b'\r'),
            Held::CrLf => self.ready.extend(b"\r\n"),
        }
        self.held = Held::Nothing;
    }

    /// Pull from the source until at least one octet is ready or the source
    /// is exhausted.
    fn fill(&mut self) -> io::Result<()> {
        while self.ready.is_empty() && !self.eof {
            let n = match self.inner.read(&mut self.chunk) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if n == 0 {
                self.eof = true;
                self.release_held();
                break;
            }

            for i in 0..n {
                let byte = self.chunk.get(i).copied().unwrap_or_default();
                self.push(byte);
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for Unfolder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.fill()?;

        let n = buf.len().min(self.ready.len());
        for (slot, byte) in buf.iter_mut().zip(self.ready.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}
