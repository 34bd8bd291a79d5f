//! Remote error codes each table operation surfaces to callers.
//!
//! A code outside an operation's set is answered with the generic
//! fallback, even when a neighbouring operation recognizes it.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The six table operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateTable,
    GetTables,
    GetTable,
    SearchTable,
    DeleteTable,
    UpdateTable,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateTable => "create_table",
            Operation::GetTables => "get_tables",
            Operation::GetTable => "get_table",
            Operation::SearchTable => "search_table",
            Operation::DeleteTable => "delete_table",
            Operation::UpdateTable => "update_table",
        }
    }

    /// Codes this operation passes through to the caller
    pub fn recognized_codes(&self) -> &'static [ErrorCode] {
        RECOGNIZED.get(self).copied().unwrap_or(&[])
    }

    /// Whether a wire error code is passed through for this operation
    pub fn recognizes(&self, code: &str) -> bool {
        code.parse::<ErrorCode>()
            .map(|code| self.recognized_codes().contains(&code))
            .unwrap_or(false)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes raised by the catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AlreadyExists,
    InvalidInput,
    EntityNotFound,
    ResourceNumberLimitExceeded,
    InternalService,
    OperationTimeout,
    GlueEncryption,
    ConcurrentModification,
    ResourceNotReady,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidInput,
        ErrorCode::EntityNotFound,
        ErrorCode::ResourceNumberLimitExceeded,
        ErrorCode::InternalService,
        ErrorCode::OperationTimeout,
        ErrorCode::GlueEncryption,
        ErrorCode::ConcurrentModification,
        ErrorCode::ResourceNotReady,
    ];

    /// Name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyExists => "AlreadyExistsException",
            ErrorCode::InvalidInput => "InvalidInputException",
            ErrorCode::EntityNotFound => "EntityNotFoundException",
            ErrorCode::ResourceNumberLimitExceeded => "ResourceNumberLimitExceededException",
            ErrorCode::InternalService => "InternalServiceException",
            ErrorCode::OperationTimeout => "OperationTimeoutException",
            ErrorCode::GlueEncryption => "GlueEncryptionException",
            ErrorCode::ConcurrentModification => "ConcurrentModificationException",
            ErrorCode::ResourceNotReady => "ResourceNotReadyException",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

static RECOGNIZED: Lazy<HashMap<Operation, &'static [ErrorCode]>> = Lazy::new(|| {
    use ErrorCode::*;

    let mut table: HashMap<Operation, &'static [ErrorCode]> = HashMap::new();
    table.insert(
        Operation::CreateTable,
        &[
            AlreadyExists,
            InvalidInput,
            EntityNotFound,
            ResourceNumberLimitExceeded,
            InternalService,
            OperationTimeout,
            GlueEncryption,
            ConcurrentModification,
            ResourceNotReady,
        ],
    );
    table.insert(
        Operation::GetTables,
        &[EntityNotFound, InvalidInput, InternalService, OperationTimeout, GlueEncryption],
    );
    table.insert(
        Operation::GetTable,
        &[
            EntityNotFound,
            InvalidInput,
            InternalService,
            OperationTimeout,
            GlueEncryption,
            ResourceNotReady,
        ],
    );
    table.insert(
        Operation::SearchTable,
        &[InvalidInput, InternalService, OperationTimeout],
    );
    table.insert(
        Operation::DeleteTable,
        &[
            EntityNotFound,
            InvalidInput,
            InternalService,
            OperationTimeout,
            ConcurrentModification,
            ResourceNotReady,
        ],
    );
    table.insert(
        Operation::UpdateTable,
        &[
            EntityNotFound,
            InvalidInput,
            InternalService,
            OperationTimeout,
            ConcurrentModification,
            ResourceNumberLimitExceeded,
            GlueEncryption,
            ResourceNotReady,
        ],
    );
    table
});
