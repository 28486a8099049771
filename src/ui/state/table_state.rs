use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::country::Field;

pub struct TableState {
    pub search_field: Signal<Option<Field>>,
    pub search_text: Signal<String>,
}

impl TableState {
    pub fn new(initial_field: Option<Field>) -> Self {
        Self {
            search_field: use_signal(move || initial_field),
            search_text: use_signal(String::new),
        }
    }
}
