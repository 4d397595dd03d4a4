//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::allocator::{GenericAllocator, LobAllocator, LobAllocators};
pub use crate::attributes::{Attribute, AttributeReader, AttributeWriter};
pub use crate::binding::{
    Binding, BindingGetResultSetContext, BindingGetSqlInputContext, BindingGetStatementContext,
    BindingRegisterContext, BindingSetSqlOutputContext, BindingSetStatementContext,
    BindingSqlContext, BlobBinding, Converter, IdentityConverter,
};
pub use crate::config::{BindingSettings, Configuration, ConfigurationBuilder};
pub use crate::driver::{
    CallableStatement, LobConnection, PreparedStatement, ResultCursor, SqlInput, SqlOutput,
};
pub use crate::error::SqlLobError;
pub use crate::lob::{Blob, BlobHandle, LobGuard, MemoryBlob};
pub use crate::provider::{ConnectionGuard, ConnectionProvider};
pub use crate::render::{PlaceholderStyle, RenderContext};
pub use crate::scope::{ExecuteScope, register_blob};
pub use crate::types::{DatabaseType, RowValues, SqlType};
