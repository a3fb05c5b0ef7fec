use pref_core::entities::Pack;

use super::{RenderedList, Resource, ResourceController};
use crate::screen::Section;

/// `/packs`: public, read-only.
#[derive(Debug, Clone, Copy)]
pub struct Packs;

impl Resource for Packs {
    type Item = Pack;

    const SECTION: Section = Section::Packs;
    const PATH: &'static str = "/packs";
    const READ_AUTH: bool = false;
    const NOUN: &'static str = "pack";
    const TITLE: &'static str = "Pack";
    const PLURAL: &'static str = "packs";
    const PLACEHOLDER: &'static str = "No packs found";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Year", "Semester"];

    fn id(item: &Pack) -> Option<i64> {
        Some(item.id)
    }

    fn row(item: &Pack) -> Vec<String> {
        vec![
            item.id.to_string(),
            item.name.clone(),
            item.year.to_string(),
            item.semester.to_string(),
        ]
    }
}

impl ResourceController<Packs> {
    pub fn filter_by_year(&self, year: Option<i32>) -> RenderedList {
        self.filter(|pack| year.is_none_or(|y| pack.year == y))
    }
}
