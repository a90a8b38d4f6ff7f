use thiserror::Error;

/// Reasons a string cannot be read back as a Base62 `u64`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Empty string cannot be decoded")]
    EmptyInput,

    /// The character is not one of `0-9`, `A-Z` or `a-z`.
    #[error("Invalid character in Base62 string: '{0}'")]
    InvalidCharacter(char),

    /// The numeral is larger than `u64::MAX`.
    #[error("Base62 value exceeds the u64 range")]
    Overflow,
}

impl DecodeError {
    /// Stable tag for presentation layers (JSON bodies, logs).
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::EmptyInput => "empty_input",
            DecodeError::InvalidCharacter(_) => "invalid_character",
            DecodeError::Overflow => "overflow",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Batch size too large: {len} (max: {max})")]
    TooLarge { len: usize, max: usize },

    #[error("Invalid Base62 string at index {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },
}
