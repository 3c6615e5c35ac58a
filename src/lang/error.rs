use super::{Address, Column};

pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn at_address(self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            address: Some(address),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

/// Everything that can stop a program before it reaches its end.
///
/// Wrapping a cell value, wrapping the tape pointer and reading past the
/// end of input are defined behavior and never produce one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A character outside the eight operators reached the parser.
    InvalidToken,
    /// A `]` with no open `[`, or a skipped `[` with no closing `]`.
    UnmatchedLoop,
    /// The input or output stream failed.
    Io,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        error!(Io; &error.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::InvalidToken => "INVALID TOKEN",
            ErrorCode::UnmatchedLoop => "UNMATCHED LOOP",
            ErrorCode::Io => "I/O ERROR",
        };
        let mut place = String::new();
        if let Some(address) = self.address {
            place.push_str(&format!(" {}", address));
        }
        if (0..0) != self.column {
            place.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        write!(f, "{}", code_str)?;
        if !place.is_empty() {
            write!(f, " IN{}", place)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
