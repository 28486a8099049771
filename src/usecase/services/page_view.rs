use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::country::{Country, Field};
use crate::domain::entities::view::{
    FieldFilter, PageEntry, SearchField, SortDirection, SortKey, ViewConfig,
};

#[derive(Debug, Clone)]
pub struct PageView {
    dataset: Arc<Vec<Country>>,
    items_per_page: usize,
    search_fields: Vec<SearchField>,
    current_page: usize,
    filter: Option<FieldFilter>,
    sort: Option<SortKey>,
    visible: Vec<Country>,
    pagination: Vec<PageEntry>,
    page_count: usize,
    filtered_count: usize,
}

impl PageView {
    pub fn new(dataset: Arc<Vec<Country>>, config: ViewConfig) -> Result<PageView> {
        if config.items_per_page == 0 {
            anyhow::bail!("items_per_page must be greater than zero")
        }
        if config.start_from == 0 {
            anyhow::bail!("start_from must be greater than zero")
        }

        let ViewConfig {
            items_per_page,
            start_from,
            search_fields,
        } = config;

        let mut view = PageView {
            dataset,
            items_per_page,
            search_fields,
            current_page: start_from,
            filter: None,
            sort: None,
            visible: Vec::new(),
            pagination: Vec::new(),
            page_count: 1,
            filtered_count: 0,
        };
        view.recompute();
        Ok(view)
    }

    pub fn visible_slice(&self) -> &[Country] {
        &self.visible
    }

    pub fn page_list(&self) -> &[PageEntry] {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_count
    }

    pub fn search_fields(&self) -> &[SearchField] {
        &self.search_fields
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn filter(&self) -> Option<&FieldFilter> {
        self.filter.as_ref()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count);
        self.recompute();
    }

    pub fn go_to_previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.recompute();
        }
    }

    pub fn go_to_next(&mut self) {
        if self.current_page < self.page_count {
            self.current_page += 1;
            self.recompute();
        }
    }

    pub fn set_filter(&mut self, field: Field, query: impl Into<String>) {
        self.filter = Some(FieldFilter {
            field,
            query: query.into(),
        });
        self.current_page = 1;
        self.recompute();
    }

    pub fn set_sort(&mut self, field: Field) {
        let direction = match self.sort {
            Some(active) if active.field == field => active.direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortKey { field, direction });
        self.recompute();
    }

    // Always starts from the full dataset so consecutive filters never stack.
    fn recompute(&mut self) {
        let mut filtered: Vec<&Country> = match &self.filter {
            Some(filter) => {
                let query = normalize(&filter.query);
                if query.is_empty() {
                    self.dataset.iter().collect()
                } else {
                    self.dataset
                        .iter()
                        .filter(|record| {
                            normalize(record.field_text(filter.field)).contains(&query)
                        })
                        .collect()
                }
            }
            None => self.dataset.iter().collect(),
        };

        if let Some(sort) = self.sort {
            // Operands are swapped for Desc so ties keep their dataset order.
            match sort.direction {
                SortDirection::Asc => {
                    filtered.sort_by(|a, b| a.field_text(sort.field).cmp(b.field_text(sort.field)));
                }
                SortDirection::Desc => {
                    filtered.sort_by(|a, b| b.field_text(sort.field).cmp(a.field_text(sort.field)));
                }
            }
        }

        self.filtered_count = filtered.len();
        self.page_count = filtered.len().div_ceil(self.items_per_page).max(1);
        if self.current_page > self.page_count {
            self.current_page = 1;
        }

        let start = (self.current_page - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(filtered.len());
        self.visible = filtered[start..end]
            .iter()
            .map(|record| (*record).clone())
            .collect();
        self.pagination = build_page_list(self.page_count, self.current_page);
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn build_page_list(page_count: usize, current_page: usize) -> Vec<PageEntry> {
    let mut entries = Vec::new();
    let mut skipped_from: Option<usize> = None;

    for page in 1..=page_count {
        let shown =
            page == 1 || page == page_count || page.abs_diff(current_page) <= 1;
        if !shown {
            skipped_from.get_or_insert(page);
            continue;
        }

        if let Some(first_skipped) = skipped_from.take() {
            if page - first_skipped == 1 {
                entries.push(PageEntry::page(first_skipped, false));
            } else {
                entries.push(PageEntry::ellipsis(first_skipped));
            }
        }
        entries.push(PageEntry::page(page, page == current_page));
    }

    entries
}
