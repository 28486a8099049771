mod domain;
mod infra;
mod ui;
mod usecase;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use dioxus::prelude::*;
use directories::ProjectDirs;

use crate::domain::entities::country::{Country, Field};
use crate::domain::entities::view::{SearchField, SortDirection, SortKey, ViewConfig};
use crate::infra::data::csv::EmbeddedCatalog;
use crate::ui::state::table_state::TableState;
use crate::usecase::ports::source::CountrySource;
use crate::usecase::services::page_view::PageView;

const TABLE_COLUMNS: [Field; 5] = [
    Field::Name,
    Field::Capital,
    Field::Iso2,
    Field::Currency,
    Field::PhoneCode,
];

const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 6px;";
const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; cursor: pointer;";
const PAGE_LINK_STYLE: &str = "min-width: 32px; padding: 4px 8px;";
const CURRENT_PAGE_STYLE: &str =
    "min-width: 32px; padding: 4px 8px; background: #2b6cb0; color: #fff;";

fn main() {
    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Countries"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    let catalog: Arc<dyn CountrySource> = Arc::new(EmbeddedCatalog);
    let dataset = match catalog.load() {
        Ok(countries) => Arc::new(countries),
        Err(err) => {
            return rsx! {
                div {
                    p { "Failed to load the country dataset: {err}" }
                }
            };
        }
    };

    rsx! {
        div { style: "font-family: sans-serif; max-width: 960px; margin: 0 auto; padding: 16px;",
            h1 { "Countries" }
            CountryTable {
                dataset: dataset.clone(),
                items_per_page: 10,
                start_from: 1,
                search_fields: default_search_fields(),
            }
            CountryTable {
                dataset,
                items_per_page: 25,
                start_from: 5,
                search_fields: Vec::<SearchField>::new(),
            }
        }
    }
}

#[component]
fn CountryTable(
    dataset: Arc<Vec<Country>>,
    items_per_page: usize,
    start_from: usize,
    search_fields: Vec<SearchField>,
) -> Element {
    let config = ViewConfig {
        items_per_page,
        start_from,
        search_fields,
    };
    let initial = match PageView::new(dataset, config) {
        Ok(view) => view,
        Err(err) => {
            return rsx! {
                div {
                    p { "Invalid table configuration: {err}" }
                }
            };
        }
    };

    let mut view = use_signal(move || initial);
    let search_descriptors: Vec<SearchField> = view.read().search_fields().to_vec();
    let state = TableState::new(search_descriptors.first().map(|descriptor| descriptor.field));
    let mut search_field = state.search_field;
    let mut search_text = state.search_text;

    let visible = view.read().visible_slice().to_vec();
    let pagination = view.read().page_list().to_vec();
    let current_page = view.read().current_page();
    let page_count = view.read().page_count();
    let filtered_count = view.read().filtered_count();
    let sort = view.read().sort();

    let header_cells: Vec<(Field, String)> = TABLE_COLUMNS
        .iter()
        .map(|&field| {
            (
                field,
                format!("{}{}", field.label(), sort_indicator(sort, field)),
            )
        })
        .collect();

    rsx! {
        section { style: "padding: 12px 0;",
            if !search_descriptors.is_empty() {
                div { style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
                    select {
                        value: search_field().map(|field| field.key().to_string()).unwrap_or_default(),
                        onchange: move |event| {
                            let next_field = Field::from_key(&event.value());
                            *search_field.write() = next_field;
                            if let Some(field) = next_field {
                                view.write().set_filter(field, search_text());
                            }
                        },
                        for descriptor in search_descriptors.clone() {
                            option { value: "{descriptor.field.key()}", "{descriptor.label}" }
                        }
                    }
                    input {
                        value: search_text(),
                        placeholder: "Type a query",
                        onchange: move |event| {
                            let query = event.value();
                            *search_text.write() = query.clone();
                            if let Some(field) = search_field() {
                                view.write().set_filter(field, query);
                            }
                        },
                    }
                }
            }

            table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                thead {
                    tr {
                        for (field, header) in header_cells {
                            th {
                                style: HEADER_CELL_STYLE,
                                onclick: move |_| view.write().set_sort(field),
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    if visible.is_empty() {
                        tr {
                            td { style: CELL_STYLE,
                                colspan: TABLE_COLUMNS.len(),
                                "No matching countries"
                            }
                        }
                    } else {
                        for country in visible {
                            tr {
                                for field in TABLE_COLUMNS {
                                    td { style: CELL_STYLE, "{country.field_text(field)}" }
                                }
                            }
                        }
                    }
                }
            }

            nav { style: "display: flex; gap: 6px; align-items: center; padding: 8px 0;",
                button {
                    disabled: current_page == 1,
                    onclick: move |_| view.write().go_to_previous(),
                    "Previous"
                }
                for entry in pagination {
                    if entry.ellipsis {
                        span { style: "padding: 0 4px;", "…" }
                    } else {
                        button {
                            style: if entry.current { CURRENT_PAGE_STYLE } else { PAGE_LINK_STYLE },
                            onclick: move |_| view.write().go_to_page(entry.page),
                            "{entry.page}"
                        }
                    }
                }
                button {
                    disabled: current_page == page_count,
                    onclick: move |_| view.write().go_to_next(),
                    "Next"
                }
            }

            p { style: "color: #555;", "{page_status(filtered_count, current_page, page_count)}" }
        }
    }
}

fn default_search_fields() -> Vec<SearchField> {
    vec![
        SearchField::new("Search by country", Field::Name),
        SearchField::new("Search by capital", Field::Capital),
        SearchField::new("Search by country code", Field::Iso2),
        SearchField::new("Search by currency", Field::Currency),
        SearchField::new("Search by phone code", Field::PhoneCode),
    ]
}

fn sort_indicator(sort: Option<SortKey>, field: Field) -> &'static str {
    match sort {
        Some(key) if key.field == field => match key.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

fn page_status(filtered: usize, page: usize, pages: usize) -> String {
    format!("{filtered} countries, page {page} of {pages}")
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "countries", "countries")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
