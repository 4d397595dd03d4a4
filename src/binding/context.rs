//! Per-call contexts handed to [`Binding`](super::Binding) hooks.
//!
//! Shared references (configuration, value) carry the context's own lifetime so a hook can hold
//! them while it borrows the statement or cursor mutably.

use crate::config::Configuration;
use crate::driver::{CallableStatement, PreparedStatement, ResultCursor, SqlInput, SqlOutput};
use crate::render::RenderContext;

/// Rendering the SQL for a bind value.
pub struct BindingSqlContext<'a, U> {
    configuration: &'a Configuration,
    render: &'a mut RenderContext,
    value: Option<&'a U>,
}

impl<'a, U> BindingSqlContext<'a, U> {
    pub fn new(
        configuration: &'a Configuration,
        render: &'a mut RenderContext,
        value: Option<&'a U>,
    ) -> Self {
        Self {
            configuration,
            render,
            value,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn render(&mut self) -> &mut RenderContext {
        &mut *self.render
    }

    #[must_use]
    pub fn value(&self) -> Option<&'a U> {
        self.value
    }
}

/// Registering an output parameter on a callable statement.
pub struct BindingRegisterContext<'a> {
    configuration: &'a Configuration,
    statement: &'a mut dyn CallableStatement,
    index: usize,
}

impl<'a> BindingRegisterContext<'a> {
    pub fn new(
        configuration: &'a Configuration,
        statement: &'a mut dyn CallableStatement,
        index: usize,
    ) -> Self {
        Self {
            configuration,
            statement,
            index,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn statement(&mut self) -> &mut (dyn CallableStatement + 'a) {
        &mut *self.statement
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Binding a value to a statement parameter.
pub struct BindingSetStatementContext<'a, U> {
    configuration: &'a Configuration,
    statement: &'a mut dyn PreparedStatement,
    index: usize,
    value: Option<&'a U>,
}

impl<'a, U> BindingSetStatementContext<'a, U> {
    pub fn new(
        configuration: &'a Configuration,
        statement: &'a mut dyn PreparedStatement,
        index: usize,
        value: Option<&'a U>,
    ) -> Self {
        Self {
            configuration,
            statement,
            index,
            value,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn statement(&mut self) -> &mut (dyn PreparedStatement + 'a) {
        &mut *self.statement
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn value(&self) -> Option<&'a U> {
        self.value
    }
}

/// Writing a value as the next attribute of a structured type.
pub struct BindingSetSqlOutputContext<'a, U> {
    configuration: &'a Configuration,
    output: &'a mut dyn SqlOutput,
    value: Option<&'a U>,
}

impl<'a, U> BindingSetSqlOutputContext<'a, U> {
    pub fn new(
        configuration: &'a Configuration,
        output: &'a mut dyn SqlOutput,
        value: Option<&'a U>,
    ) -> Self {
        Self {
            configuration,
            output,
            value,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn output(&mut self) -> &mut (dyn SqlOutput + 'a) {
        &mut *self.output
    }

    #[must_use]
    pub fn value(&self) -> Option<&'a U> {
        self.value
    }
}

/// Reading a column of the current row.
pub struct BindingGetResultSetContext<'a> {
    configuration: &'a Configuration,
    cursor: &'a mut dyn ResultCursor,
    index: usize,
}

impl<'a> BindingGetResultSetContext<'a> {
    pub fn new(
        configuration: &'a Configuration,
        cursor: &'a mut dyn ResultCursor,
        index: usize,
    ) -> Self {
        Self {
            configuration,
            cursor,
            index,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn cursor(&mut self) -> &mut (dyn ResultCursor + 'a) {
        &mut *self.cursor
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Reading an output parameter of a callable statement.
pub struct BindingGetStatementContext<'a> {
    configuration: &'a Configuration,
    statement: &'a mut dyn CallableStatement,
    index: usize,
}

impl<'a> BindingGetStatementContext<'a> {
    pub fn new(
        configuration: &'a Configuration,
        statement: &'a mut dyn CallableStatement,
        index: usize,
    ) -> Self {
        Self {
            configuration,
            statement,
            index,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn statement(&mut self) -> &mut (dyn CallableStatement + 'a) {
        &mut *self.statement
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Reading the next attribute of a structured type.
pub struct BindingGetSqlInputContext<'a> {
    configuration: &'a Configuration,
    input: &'a mut dyn SqlInput,
}

impl<'a> BindingGetSqlInputContext<'a> {
    pub fn new(configuration: &'a Configuration, input: &'a mut dyn SqlInput) -> Self {
        Self {
            configuration,
            input,
        }
    }

    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }

    pub fn input(&mut self) -> &mut (dyn SqlInput + 'a) {
        &mut *self.input
    }
}
