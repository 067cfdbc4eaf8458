//! Tabular data widget.
//!
//! Columns describe how to pull a value out of a row and, optionally, how
//! to render it. The table itself is stateless: callers hand it fresh rows
//! and a loading flag on every build, and it picks one of three display
//! modes from them.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::element::Element;
use crate::registry::HandlerRegistry;
use crate::types::{Color, Size, Style, TextAlign};

/// Rows drawn as placeholders while data is loading.
pub const PLACEHOLDER_ROWS: usize = 5;

/// A single cell value pulled from a row by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    /// The row has no value for this column. Rendered blank.
    Missing,
}

impl CellValue {
    /// Default textual rendering, used when a column has no renderer.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Float(f) => format!("{f:.2}"),
            CellValue::Bool(true) => "Yes".into(),
            CellValue::Bool(false) => "No".into(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Missing => String::new(),
        }
    }
}

/// Column width specification.
#[derive(Debug, Clone, Copy)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

impl From<ColumnWidth> for Size {
    fn from(width: ColumnWidth) -> Self {
        match width {
            ColumnWidth::Fixed(w) => Size::Fixed(w),
            ColumnWidth::Flex(w) => Size::Flex(w),
        }
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Renderer<T> = Arc<dyn Fn(&CellValue, &T) -> Element + Send + Sync>;

/// A column definition: header text, width, an accessor that extracts the
/// cell value, and an optional renderer that replaces the default text
/// rendering of that value.
#[derive(Clone)]
pub struct Column<T> {
    pub key: String,
    pub header: String,
    pub width: ColumnWidth,
    accessor: Accessor<T>,
    renderer: Option<Renderer<T>>,
    style: Option<Style>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: ColumnWidth::default(),
            accessor: Arc::new(accessor),
            renderer: None,
            style: None,
        }
    }

    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    /// Custom cell rendering. The renderer sees the extracted value and the
    /// whole row, so it can derive styling from fields the column does not
    /// display.
    pub fn renderer(
        mut self,
        renderer: impl Fn(&CellValue, &T) -> Element + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Style applied to this column's header cell and every data cell,
    /// in all display modes.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

/// What the table shows, picked once per build.
/// Loading beats empty beats populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Loading,
    Empty,
    Populated,
}

impl DisplayMode {
    pub fn of(loading: bool, row_count: usize) -> Self {
        if loading {
            DisplayMode::Loading
        } else if row_count == 0 {
            DisplayMode::Empty
        } else {
            DisplayMode::Populated
        }
    }
}

type ActivateHandler<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Table widget builder.
pub struct DataTable<T> {
    id: String,
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    loading: bool,
    empty_message: String,
    style: Option<Style>,
    header_style: Option<Style>,
    row_style: Option<Style>,
    on_activate: Option<ActivateHandler<T>>,
}

impl<T: Clone + Send + Sync + 'static> Default for DataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> DataTable<T> {
    pub fn new() -> Self {
        Self {
            id: "table".into(),
            columns: Vec::new(),
            rows: Vec::new(),
            loading: false,
            empty_message: "No data available".into(),
            style: None,
            header_style: None,
            row_style: None,
            on_activate: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn columns(mut self, columns: Vec<Column<T>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn rows(mut self, rows: Vec<T>) -> Self {
        self.rows = rows;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = Some(style);
        self
    }

    pub fn row_style(mut self, style: Style) -> Self {
        self.row_style = Some(style);
        self
    }

    /// Called with a clone of the row when it is clicked or activated.
    /// Without a handler, rows are not clickable.
    pub fn on_activate(mut self, handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(handler));
        self
    }

    /// Build the table element and register row activation handlers.
    pub fn build(self, registry: &HandlerRegistry) -> Element {
        let mode = DisplayMode::of(self.loading, self.rows.len());

        let mut children = vec![self.build_header()];
        match mode {
            DisplayMode::Loading => {
                for i in 0..PLACEHOLDER_ROWS {
                    children.push(self.build_placeholder_row(i));
                }
            }
            DisplayMode::Empty => children.push(self.build_empty_row()),
            DisplayMode::Populated => {
                for (i, row) in self.rows.iter().enumerate() {
                    children.push(self.build_data_row(i, row, registry));
                }
            }
        }

        let mut table = Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .children(children);
        if let Some(style) = self.style {
            table = table.style(style);
        }
        table
    }

    fn build_header(&self) -> Element {
        let mut header = Element::row()
            .id(format!("{}-header", self.id))
            .width(Size::Fill)
            .height(Size::Fixed(1));

        for (j, col) in self.columns.iter().enumerate() {
            let mut cell = Element::box_()
                .id(format!("{}-head-{j}", self.id))
                .width(col.width.into())
                .height(Size::Fixed(1))
                .child(Element::text(&col.header).width(Size::Fill));
            if let Some(style) = &col.style {
                cell = cell.style(style.clone());
            }
            header = header.child(cell);
        }

        match &self.header_style {
            Some(style) => header.style(style.clone()),
            None => header.style(
                Style::new()
                    .background(Color::var("table.header_bg"))
                    .bold(),
            ),
        }
    }

    fn build_placeholder_row(&self, index: usize) -> Element {
        let mut row = Element::row()
            .id(format!("{}-placeholder-{index}", self.id))
            .width(Size::Fill)
            .height(Size::Fixed(1));

        for (j, col) in self.columns.iter().enumerate() {
            let mut cell = Element::box_()
                .id(format!("{}-placeholder-{index}-{j}", self.id))
                .width(col.width.into())
                .height(Size::Fixed(1))
                .child(
                    Element::text("░░░")
                        .style(Style::new().foreground(Color::var("table.placeholder")).dim()),
                );
            if let Some(style) = &col.style {
                cell = cell.style(style.clone());
            }
            row = row.child(cell);
        }
        row
    }

    // The message spans the full width regardless of column layout.
    fn build_empty_row(&self) -> Element {
        Element::row()
            .id(format!("{}-empty", self.id))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .child(
                Element::text(&self.empty_message)
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .style(Style::new().foreground(Color::var("text.muted")).italic()),
            )
    }

    fn build_data_row(&self, index: usize, row_data: &T, registry: &HandlerRegistry) -> Element {
        let row_id = format!("{}-row-{index}", self.id);
        let mut row = Element::row()
            .id(&row_id)
            .width(Size::Fill)
            .height(Size::Fixed(1));

        for (j, col) in self.columns.iter().enumerate() {
            let value = col.value(row_data);
            let content = match &col.renderer {
                Some(renderer) => renderer(&value, row_data),
                None => Element::text(value.to_text()).width(Size::Fill),
            };

            let mut cell = Element::box_()
                .id(format!("{}-cell-{index}-{j}", self.id))
                .width(col.width.into())
                .height(Size::Fixed(1))
                .child(content);
            if let Some(style) = &col.style {
                cell = cell.style(style.clone());
            }
            row = row.child(cell);
        }

        if let Some(style) = &self.row_style {
            row = row.style(style.clone());
        }

        if let Some(handler) = &self.on_activate {
            let handler = handler.clone();
            let row_clone = row_data.clone();
            registry.register(
                &row_id,
                "on_activate",
                Arc::new(move || handler(row_clone.clone())),
            );
            row = row.clickable(true);
        }

        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{find_element, Content};
    use std::sync::Mutex;

    #[derive(Clone, Debug, PartialEq)]
    struct Pilgrim {
        name: String,
        group: Option<String>,
        visa_ok: bool,
    }

    fn sample_rows() -> Vec<Pilgrim> {
        vec![
            Pilgrim {
                name: "Amina".into(),
                group: Some("A3".into()),
                visa_ok: true,
            },
            Pilgrim {
                name: "Bilal".into(),
                group: None,
                visa_ok: false,
            },
        ]
    }

    fn sample_columns() -> Vec<Column<Pilgrim>> {
        vec![
            Column::new("name", "Name", |p: &Pilgrim| {
                CellValue::Text(p.name.clone())
            }),
            Column::new("group", "Group", |p: &Pilgrim| match &p.group {
                Some(g) => CellValue::Text(g.clone()),
                None => CellValue::Missing,
            }),
            Column::new("visa", "Visa", |p: &Pilgrim| CellValue::Bool(p.visa_ok)),
        ]
    }

    fn text_of(root: &Element, id: &str) -> String {
        let el = find_element(root, id).expect("element missing");
        collect_text(el)
    }

    fn collect_text(el: &Element) -> String {
        match &el.content {
            Content::Text(t) => t.clone(),
            Content::Children(children) => children.iter().map(collect_text).collect(),
            Content::None => String::new(),
        }
    }

    #[test]
    fn loading_takes_priority_over_rows() {
        assert_eq!(DisplayMode::of(true, 0), DisplayMode::Loading);
        assert_eq!(DisplayMode::of(true, 7), DisplayMode::Loading);
        assert_eq!(DisplayMode::of(false, 0), DisplayMode::Empty);
        assert_eq!(DisplayMode::of(false, 7), DisplayMode::Populated);
    }

    #[test]
    fn loading_renders_fixed_placeholder_rows() {
        let registry = HandlerRegistry::new();
        let table = DataTable::new()
            .id("t")
            .columns(sample_columns())
            .rows(sample_rows())
            .loading(true)
            .build(&registry);

        for i in 0..PLACEHOLDER_ROWS {
            assert!(find_element(&table, &format!("t-placeholder-{i}")).is_some());
        }
        assert!(find_element(&table, "t-row-0").is_none());
    }

    #[test]
    fn empty_renders_centered_message() {
        let registry = HandlerRegistry::new();
        let table = DataTable::<Pilgrim>::new()
            .id("t")
            .columns(sample_columns())
            .empty_message("No pilgrims registered")
            .build(&registry);

        assert_eq!(text_of(&table, "t-empty"), "No pilgrims registered");
        assert!(find_element(&table, "t-row-0").is_none());
    }

    #[test]
    fn populated_renders_rows_in_caller_order() {
        let registry = HandlerRegistry::new();
        let table = DataTable::new()
            .id("t")
            .columns(sample_columns())
            .rows(sample_rows())
            .build(&registry);

        assert_eq!(text_of(&table, "t-cell-0-0"), "Amina");
        assert_eq!(text_of(&table, "t-cell-1-0"), "Bilal");
        assert!(find_element(&table, "t-row-2").is_none());
    }

    #[test]
    fn missing_values_render_blank() {
        let registry = HandlerRegistry::new();
        let table = DataTable::new()
            .id("t")
            .columns(sample_columns())
            .rows(sample_rows())
            .build(&registry);

        assert_eq!(text_of(&table, "t-cell-1-1"), "");
    }

    #[test]
    fn renderer_replaces_default_text() {
        let registry = HandlerRegistry::new();
        let columns = vec![Column::new("visa", "Visa", |p: &Pilgrim| {
            CellValue::Bool(p.visa_ok)
        })
        .renderer(|value, _row| {
            let glyph = if *value == CellValue::Bool(true) {
                "✓"
            } else {
                "✗"
            };
            Element::text(glyph)
        })];
        let table = DataTable::new()
            .id("t")
            .columns(columns)
            .rows(sample_rows())
            .build(&registry);

        assert_eq!(text_of(&table, "t-cell-0-0"), "✓");
        assert_eq!(text_of(&table, "t-cell-1-0"), "✗");
    }

    #[test]
    fn activation_hands_over_the_clicked_row() {
        let registry = HandlerRegistry::new();
        let clicked: Arc<Mutex<Vec<Pilgrim>>> = Arc::new(Mutex::new(Vec::new()));
        let clicked_clone = clicked.clone();

        let table = DataTable::new()
            .id("t")
            .columns(sample_columns())
            .rows(sample_rows())
            .on_activate(move |row| clicked_clone.lock().unwrap().push(row))
            .build(&registry);

        let row = find_element(&table, "t-row-1").unwrap();
        assert!(row.clickable);
        assert!(registry.dispatch("t-row-1", "on_activate"));
        assert_eq!(clicked.lock().unwrap()[0].name, "Bilal");
    }

    #[test]
    fn rows_without_handler_are_not_clickable() {
        let registry = HandlerRegistry::new();
        let table = DataTable::new()
            .id("t")
            .columns(sample_columns())
            .rows(sample_rows())
            .build(&registry);

        assert!(!find_element(&table, "t-row-0").unwrap().clickable);
        assert!(!registry.dispatch("t-row-0", "on_activate"));
    }

    #[test]
    fn zero_columns_builds_without_panicking() {
        let registry = HandlerRegistry::new();
        let table = DataTable::<Pilgrim>::new()
            .id("t")
            .rows(sample_rows())
            .build(&registry);

        assert!(find_element(&table, "t-header").is_some());
        assert!(find_element(&table, "t-row-0").is_some());
    }

    #[test]
    fn cell_values_format_for_display() {
        assert_eq!(CellValue::Int(42).to_text(), "42");
        assert_eq!(CellValue::Float(3.14159).to_text(), "3.14");
        assert_eq!(CellValue::Bool(true).to_text(), "Yes");
        assert_eq!(
            CellValue::Date(NaiveDate::from_ymd_opt(2026, 5, 24).unwrap()).to_text(),
            "2026-05-24"
        );
        assert_eq!(CellValue::Missing.to_text(), "");
    }

    #[test]
    fn column_style_reaches_header_and_cells() {
        let registry = HandlerRegistry::new();
        let styled = Style::new().foreground(Color::rgb(1, 2, 3));
        let columns = vec![Column::new("name", "Name", |p: &Pilgrim| {
            CellValue::Text(p.name.clone())
        })
        .style(styled.clone())];
        let table = DataTable::new()
            .id("t")
            .columns(columns)
            .rows(sample_rows())
            .build(&registry);

        let head = find_element(&table, "t-head-0").unwrap();
        let cell = find_element(&table, "t-cell-0-0").unwrap();
        assert_eq!(head.style.foreground, styled.foreground);
        assert_eq!(cell.style.foreground, styled.foreground);
    }
}
