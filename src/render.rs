use serde::{Deserialize, Serialize};

/// Placeholder syntax emitted for bind values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// Anonymous positional placeholders: `?`.
    #[default]
    Positional,
    /// SQLite-style numbered placeholders like `?1` (also used by Turso).
    Sqlite,
    /// PostgreSQL-style placeholders like `$1`.
    Postgres,
}

/// SQL text under construction, with a running count of bind positions.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    sql: String,
    style: PlaceholderStyle,
    binds: usize,
}

impl RenderContext {
    #[must_use]
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            sql: String::new(),
            style,
            binds: 0,
        }
    }

    /// Append raw SQL text.
    pub fn sql(&mut self, text: &str) -> &mut Self {
        self.sql.push_str(text);
        self
    }

    /// Append the placeholder for the next bind position.
    pub fn bind_placeholder(&mut self) -> &mut Self {
        self.binds += 1;
        match self.style {
            PlaceholderStyle::Positional => self.sql.push('?'),
            PlaceholderStyle::Sqlite => {
                self.sql.push('?');
                self.sql.push_str(&self.binds.to_string());
            }
            PlaceholderStyle::Postgres => {
                self.sql.push('$');
                self.sql.push_str(&self.binds.to_string());
            }
        }
        self
    }

    /// Bind positions rendered so far.
    #[must_use]
    pub fn bind_count(&self) -> usize {
        self.binds
    }

    #[must_use]
    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.sql
    }
}
