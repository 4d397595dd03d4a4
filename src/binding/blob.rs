use tracing::debug;

use crate::config::Configuration;
use crate::error::SqlLobError;
use crate::lob::{BlobHandle, LobGuard};
use crate::provider::ConnectionGuard;
use crate::scope;
use crate::types::SqlType;

use super::{
    Binding, BindingGetResultSetContext, BindingGetSqlInputContext, BindingGetStatementContext,
    BindingRegisterContext, BindingSetSqlOutputContext, BindingSetStatementContext,
    BindingSqlContext, Converter, IdentityConverter,
};

static BYTES: IdentityConverter<Vec<u8>> = IdentityConverter::new();

/// Binds byte vectors as BLOBs instead of inline binary parameters.
///
/// Some drivers cap the size of inline binary binds or treat them as a different column type.
/// Routing the bytes through a large object sidesteps that without changing the value callers
/// see.
///
/// ```rust
/// use sql_lob_binding::prelude::*;
///
/// let binding = BlobBinding;
/// let converter = binding.converter();
/// assert_eq!(converter.database_type(), converter.user_type());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobBinding;

impl Binding for BlobBinding {
    type Database = Vec<u8>;
    type User = Vec<u8>;

    fn converter(&self) -> &dyn Converter<Vec<u8>, Vec<u8>> {
        &BYTES
    }

    fn sql(&self, ctx: &mut BindingSqlContext<'_, Vec<u8>>) -> Result<(), SqlLobError> {
        ctx.render().bind_placeholder();
        Ok(())
    }

    fn register(&self, ctx: &mut BindingRegisterContext<'_>) -> Result<(), SqlLobError> {
        let index = ctx.index();
        ctx.statement().register_out_parameter(index, SqlType::Blob)
    }

    fn set_statement(
        &self,
        ctx: &mut BindingSetStatementContext<'_, Vec<u8>>,
    ) -> Result<(), SqlLobError> {
        let blob = new_blob(ctx.configuration(), ctx.value())?;
        let index = ctx.index();
        ctx.statement().set_blob(index, blob.as_ref())
    }

    fn set_output(
        &self,
        ctx: &mut BindingSetSqlOutputContext<'_, Vec<u8>>,
    ) -> Result<(), SqlLobError> {
        let blob = new_blob(ctx.configuration(), ctx.value())?;
        ctx.output().write_blob(blob.as_ref())
    }

    fn get_result_set(
        &self,
        ctx: &mut BindingGetResultSetContext<'_>,
    ) -> Result<Option<Vec<u8>>, SqlLobError> {
        let index = ctx.index();
        read_blob(ctx.cursor().get_blob(index)?)
    }

    fn get_statement(
        &self,
        ctx: &mut BindingGetStatementContext<'_>,
    ) -> Result<Option<Vec<u8>>, SqlLobError> {
        let index = ctx.index();
        read_blob(ctx.statement().get_blob(index)?)
    }

    fn get_input(
        &self,
        ctx: &mut BindingGetSqlInputContext<'_>,
    ) -> Result<Option<Vec<u8>>, SqlLobError> {
        read_blob(ctx.input().read_blob()?)
    }
}

/// Allocate a blob holding `bytes` and register it with the open execute scope.
///
/// The connection is held only while the blob is allocated and filled; it goes back to the
/// provider on every path out of this function. `None` allocates nothing.
fn new_blob(
    configuration: &Configuration,
    bytes: Option<&Vec<u8>>,
) -> Result<Option<BlobHandle>, SqlLobError> {
    let Some(bytes) = bytes else {
        return Ok(None);
    };

    let mut connection = ConnectionGuard::acquire(configuration.connection_provider())?;
    let blob = configuration.allocator().allocate(connection.connection()?)?;
    let written = blob.set_bytes(1, bytes);
    let released = connection.release();

    if let Err(err) = written.and(released) {
        drop(LobGuard::new(Some(blob)));
        return Err(err);
    }

    debug!(
        family = %configuration.family(),
        bytes = bytes.len(),
        "allocated blob for bind"
    );
    scope::register_blob(&blob);
    Ok(Some(blob))
}

/// Read the whole of `blob`, freeing it afterwards whatever the outcome.
fn read_blob(blob: Option<BlobHandle>) -> Result<Option<Vec<u8>>, SqlLobError> {
    let guard = LobGuard::new(blob);
    let bytes = match guard.handle() {
        Some(handle) => Some(handle.read_all()?),
        None => None,
    };
    Ok(bytes)
}
