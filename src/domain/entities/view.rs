use crate::domain::entities::country::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: Field,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: Field,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub page: usize,
    pub current: bool,
    pub ellipsis: bool,
}

impl PageEntry {
    pub fn page(page: usize, current: bool) -> PageEntry {
        PageEntry {
            page,
            current,
            ellipsis: false,
        }
    }

    pub fn ellipsis(page: usize) -> PageEntry {
        PageEntry {
            page,
            current: false,
            ellipsis: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    pub label: String,
    pub field: Field,
}

impl SearchField {
    pub fn new(label: impl Into<String>, field: Field) -> SearchField {
        SearchField {
            label: label.into(),
            field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub items_per_page: usize,
    pub start_from: usize,
    pub search_fields: Vec<SearchField>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            items_per_page: 10,
            start_from: 1,
            search_fields: Vec::new(),
        }
    }
}
