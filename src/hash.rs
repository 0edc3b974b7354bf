use crate::Error;

/// A byte-oriented hash producing an `N` byte digest.
pub trait Hasher<const N: usize>: Default {
    fn update(&mut self, data: &[u8]) -> Result<(), Error>;

    fn digest(self) -> [u8; N];

    fn digest_message(message: &[u8]) -> Result<[u8; N], Error> {
        let mut hasher = Self::default();
        hasher.update(message)?;
        Ok(hasher.digest())
    }

    fn update_and_digest(mut self, message: &[u8]) -> Result<[u8; N], Error> {
        self.update(message)?;
        Ok(self.digest())
    }
}
