//! Blocking byte source and the decoder-driven event pump.
//!
//! The program is strictly request/response against the terminal: one
//! blocking read yields one byte, and the pump feeds bytes to the decoder
//! until an event completes. There are no read timeouts; the only timing
//! concept in the whole input path is the double-click window, which is
//! measured by the caller, not here.

use std::io::{self, Read};

use super::parser::{Decoder, InputEvent};

/// A blocking source of single bytes.
///
/// Implemented for every `Read`, so the binary hands the pump a locked
/// stdin while tests hand it a `Cursor` over a scripted byte sequence.
pub trait ByteSource {
    /// Block until one byte is available. `None` means end of input.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<R: Read> ByteSource for R {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Pulls bytes from a source and yields decoded events.
pub struct EventPump<S: ByteSource> {
    source: S,
    decoder: Decoder,
}

impl<S: ByteSource> EventPump<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            decoder: Decoder::new(),
        }
    }

    /// Block until the next complete event. `None` means the source is
    /// exhausted (stdin closed).
    pub fn next_event(&mut self) -> io::Result<Option<InputEvent>> {
        loop {
            match self.source.next_byte()? {
                None => return Ok(None),
                Some(byte) => {
                    if let Some(event) = self.decoder.push(byte) {
                        return Ok(Some(event));
                    }
                }
            }
        }
    }
}
