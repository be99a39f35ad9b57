//! Column model for data tables.
//!
//! A column resolves its cell from a render function, an accessor, or
//! nothing, in that order. `V` is whatever the renderer produces: markup in
//! the component layer, plain strings in tests.

use std::fmt;
use std::rc::Rc;

/// Render function receiving the row and its position.
pub type RenderFn<T, V> = Rc<dyn Fn(&T, usize) -> V>;
/// Accessor mapping a row to a cell value.
pub type MapFn<T, V> = Rc<dyn Fn(&T) -> V>;
/// Row class function receiving the row and its position.
pub type RowClassFn<T> = Rc<dyn Fn(&T, usize) -> String>;

/// Rows that expose named fields for [`Accessor::Field`] lookups.
pub trait TableRow {
    /// Text of the field named `key`, if the row has one.
    fn field(&self, key: &str) -> Option<String>;
}

/// How a column reads its value from a row.
pub enum Accessor<T, V> {
    /// Named field, looked up through [`TableRow::field`].
    Field(String),
    /// Arbitrary mapping.
    Map(MapFn<T, V>),
}

impl<T, V> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(key) => Self::Field(key.clone()),
            Self::Map(map) => Self::Map(Rc::clone(map)),
        }
    }
}

impl<T, V> PartialEq for Accessor<T, V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Resolved content of one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent<V> {
    /// Produced by a render function or mapping accessor.
    Rendered(V),
    /// Text read from a named field.
    Text(String),
    /// Nothing to show.
    Empty,
}

/// A table column definition.
pub struct Column<T, V> {
    /// Stable column key.
    pub key: String,
    /// Header text.
    pub header: String,
    /// Custom renderer, preferred over the accessor.
    pub render: Option<RenderFn<T, V>>,
    /// Value accessor.
    pub accessor: Option<Accessor<T, V>>,
    /// Extra class on the header cell.
    pub header_class: Option<String>,
    /// Extra class on body cells.
    pub cell_class: Option<String>,
}

impl<T, V> Column<T, V> {
    /// Column with no value source.
    #[must_use]
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: None,
            accessor: None,
            header_class: None,
            cell_class: None,
        }
    }

    /// Read the value from the row field with the column's own key.
    #[must_use]
    pub fn keyed(key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = key.into();
        let field = key.clone();
        Self::new(key, header).field(field)
    }

    /// Render cells with `render`.
    #[must_use]
    pub fn render(mut self, render: impl Fn(&T, usize) -> V + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Read cells through a mapping.
    #[must_use]
    pub fn map(mut self, map: impl Fn(&T) -> V + 'static) -> Self {
        self.accessor = Some(Accessor::Map(Rc::new(map)));
        self
    }

    /// Read cells from a named row field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>) -> Self {
        self.accessor = Some(Accessor::Field(key.into()));
        self
    }

    /// Add a class to the header cell.
    #[must_use]
    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = Some(class.into());
        self
    }

    /// Add a class to every body cell.
    #[must_use]
    pub fn cell_class(mut self, class: impl Into<String>) -> Self {
        self.cell_class = Some(class.into());
        self
    }
}

impl<T: TableRow, V> Column<T, V> {
    /// Resolve the cell for `row` at position `index`.
    #[must_use]
    pub fn resolve(&self, row: &T, index: usize) -> CellContent<V> {
        if let Some(render) = &self.render {
            return CellContent::Rendered(render(row, index));
        }
        match &self.accessor {
            Some(Accessor::Map(map)) => CellContent::Rendered(map(row)),
            Some(Accessor::Field(key)) => row.field(key).map_or(CellContent::Empty, CellContent::Text),
            None => CellContent::Empty,
        }
    }
}

impl<T, V> Clone for Column<T, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: self.render.clone(),
            accessor: self.accessor.clone(),
            header_class: self.header_class.clone(),
            cell_class: self.cell_class.clone(),
        }
    }
}

impl<T, V> PartialEq for Column<T, V> {
    fn eq(&self, other: &Self) -> bool {
        let render_eq = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        render_eq
            && self.key == other.key
            && self.header == other.header
            && self.accessor == other.accessor
            && self.header_class == other.header_class
            && self.cell_class == other.cell_class
    }
}

impl<T, V> fmt::Debug for Column<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.is_some())
            .field("accessor", &self.accessor.is_some())
            .finish_non_exhaustive()
    }
}

/// Per-row class, fixed or computed.
pub enum RowClass<T> {
    /// No row class.
    None,
    /// Same class on every row.
    Static(String),
    /// Class computed from the row and its position.
    Dynamic(RowClassFn<T>),
}

impl<T> Default for RowClass<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> RowClass<T> {
    /// Compute a class from the row and its position.
    #[must_use]
    pub fn dynamic(class: impl Fn(&T, usize) -> String + 'static) -> Self {
        Self::Dynamic(Rc::new(class))
    }

    /// Class for `row` at `index`; blank classes resolve to `None`.
    #[must_use]
    pub fn resolve(&self, row: &T, index: usize) -> Option<String> {
        let class = match self {
            Self::None => return None,
            Self::Static(class) => class.clone(),
            Self::Dynamic(class) => class(row, index),
        };
        (!class.trim().is_empty()).then_some(class)
    }
}

impl<T> Clone for RowClass<T> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Static(class) => Self::Static(class.clone()),
            Self::Dynamic(class) => Self::Dynamic(Rc::clone(class)),
        }
    }
}

impl<T> PartialEq for RowClass<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Static(a), Self::Static(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Column span of the empty-state cell.
#[must_use]
pub fn empty_colspan<T, V>(columns: &[Column<T, V>]) -> usize {
    columns.len().max(1)
}
