//! OS entropy source: `/dev/urandom` on POSIX, the OS crypto RNG on Windows.
//!
//! A handle is opened once per [`crate::search::find_prime`] invocation and dropped at the end of
//! that call; it is never retained across invocations.

use crate::error::CoreError;

#[cfg(unix)]
pub struct EntropySource {
    file: std::fs::File,
}

#[cfg(unix)]
impl EntropySource {
    pub fn open() -> Result<Self, CoreError> {
        let file = std::fs::File::open("/dev/urandom")?;
        Ok(Self { file })
    }

    /// Reads exactly `n` random bytes, failing if the device is exhausted before `n` bytes.
    pub fn read_random(&mut self, n: usize) -> Result<Vec<u8>, CoreError> {
        use std::io::Read;
        let mut buf = Vec::new();
        buf.try_reserve_exact(n)
            .map_err(|_| CoreError::Alloc { requested: n })?;
        buf.resize(n, 0);
        self.file.read_exact(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(windows)]
pub struct EntropySource {
    _private: (),
}

#[cfg(windows)]
impl EntropySource {
    pub fn open() -> Result<Self, CoreError> {
        Ok(Self { _private: () })
    }

    pub fn read_random(&mut self, n: usize) -> Result<Vec<u8>, CoreError> {
        use rand::RngCore;
        let mut buf = Vec::new();
        buf.try_reserve_exact(n)
            .map_err(|_| CoreError::Alloc { requested: n })?;
        buf.resize(n, 0);
        rand::rngs::OsRng.fill_bytes(&mut buf);
        Ok(buf)
    }
}
