//! Widget reference codes.
//!
//! A reference is five uppercase letters encoding an index in base 26,
//! most significant digit first (`A` = 0 .. `Z` = 25). References link
//! broadcasting widgets to their listeners within one dashboard.

/// Number of letters in a reference code.
pub const REFERENCE_LENGTH: usize = 5;

/// Encodes `index` as a reference code.
///
/// Indexes beyond `26^5 - 1` wrap around.
pub fn encode_reference(mut index: u64) -> String {
    let mut letters = [b'A'; REFERENCE_LENGTH];
    for letter in letters.iter_mut().rev() {
        // index % 26 < 26, so the cast cannot truncate
        *letter = b'A' + (index % 26) as u8;
        index /= 26;
    }
    letters.iter().map(|&b| char::from(b)).collect()
}

/// Sequential reference allocator, one per dashboard.
#[derive(Debug, Clone, Default)]
pub struct ReferenceGenerator {
    index: u64,
}

impl ReferenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reference for the current index and advances.
    pub fn allocate(&mut self) -> String {
        let reference = encode_reference(self.index);
        self.index += 1;
        reference
    }

    /// Index the next allocated reference will encode.
    pub fn position(&self) -> u64 {
        self.index
    }
}

impl Iterator for ReferenceGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.allocate())
    }
}
