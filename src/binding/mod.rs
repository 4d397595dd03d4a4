//! Value bindings: how a user-facing type travels to and from a driver.

mod blob;
mod context;

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::error::SqlLobError;

pub use blob::BlobBinding;
pub use context::{
    BindingGetResultSetContext, BindingGetSqlInputContext, BindingGetStatementContext,
    BindingRegisterContext, BindingSetSqlOutputContext, BindingSetStatementContext,
    BindingSqlContext,
};

/// Converts between the type a driver binds (`T`) and the type callers see (`U`).
pub trait Converter<T, U> {
    fn from_database(&self, value: T) -> U;

    fn to_database(&self, value: U) -> T;

    fn database_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn user_type(&self) -> &'static str {
        type_name::<U>()
    }
}

/// A converter that hands values through unchanged.
pub struct IdentityConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdentityConverter<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IdentityConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdentityConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityConverter<{}>", type_name::<T>())
    }
}

impl<T> Converter<T, T> for IdentityConverter<T> {
    fn from_database(&self, value: T) -> T {
        value
    }

    fn to_database(&self, value: T) -> T {
        value
    }
}

/// Hooks a statement executor calls to render, bind and fetch one value.
///
/// Write hooks receive the value in their context; read hooks return it, `None` meaning SQL
/// NULL.
pub trait Binding {
    /// Type handed to and received from the driver.
    type Database;
    /// Type callers work with.
    type User;

    fn converter(&self) -> &dyn Converter<Self::Database, Self::User>;

    /// Render the SQL for the value (normally a placeholder).
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the value cannot be rendered.
    fn sql(&self, ctx: &mut BindingSqlContext<'_, Self::User>) -> Result<(), SqlLobError>;

    /// Declare the context's index as an output parameter.
    ///
    /// # Errors
    /// Propagates the driver's rejection of the declared type.
    fn register(&self, ctx: &mut BindingRegisterContext<'_>) -> Result<(), SqlLobError>;

    /// Bind the value to a statement parameter.
    ///
    /// # Errors
    /// Propagates driver failures while preparing or binding the value.
    fn set_statement(
        &self,
        ctx: &mut BindingSetStatementContext<'_, Self::User>,
    ) -> Result<(), SqlLobError>;

    /// Write the value as a structured-type attribute.
    ///
    /// # Errors
    /// Propagates driver failures while preparing or writing the value.
    fn set_output(
        &self,
        ctx: &mut BindingSetSqlOutputContext<'_, Self::User>,
    ) -> Result<(), SqlLobError>;

    /// Read the value from the current row.
    ///
    /// # Errors
    /// Propagates driver failures while fetching or reading the value.
    fn get_result_set(
        &self,
        ctx: &mut BindingGetResultSetContext<'_>,
    ) -> Result<Option<Self::User>, SqlLobError>;

    /// Read the value from an output parameter.
    ///
    /// # Errors
    /// Propagates driver failures while fetching or reading the value.
    fn get_statement(
        &self,
        ctx: &mut BindingGetStatementContext<'_>,
    ) -> Result<Option<Self::User>, SqlLobError>;

    /// Read the value from a structured-type attribute.
    ///
    /// # Errors
    /// Propagates driver failures while fetching or reading the value.
    fn get_input(
        &self,
        ctx: &mut BindingGetSqlInputContext<'_>,
    ) -> Result<Option<Self::User>, SqlLobError>;
}
