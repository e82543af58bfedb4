#![allow(dead_code)]

use folio_config::Settings;
use folio_core::{Page, PageLayout};
use folio_core::domains::contact::{FieldKind, FieldSpec};
use folio_core::domains::projects::CardSpec;
use folio_core::testing::ManualScheduler;
use folio_model::{CategoryTag, ProjectCatalog, ProjectId, Section, SectionId};

pub fn section(id: &str, start: f64, height: f64) -> Section {
    Section::new(SectionId::new(id).expect("section id"), start, height)
        .expect("section geometry")
}

pub fn layout() -> PageLayout {
    let card = |project: &str, category: &str| CardSpec {
        project: Some(ProjectId::from(project)),
        category: CategoryTag::from(category),
    };
    PageLayout {
        sections: vec![
            section("home", 0.0, 700.0),
            section("about", 700.0, 900.0),
            section("projects", 1600.0, 1200.0),
            section("contact", 2800.0, 600.0),
        ],
        slide_count: 3,
        cards: vec![
            card("1", "submissions"),
            card("2", "compliance"),
            card("3", "strategy"),
            card("4", "clinical"),
        ],
        form_fields: Some(vec![
            FieldSpec::new("name", FieldKind::Text),
            FieldSpec::new("email", FieldKind::Email),
            FieldSpec::new("message", FieldKind::TextArea),
        ]),
        reveal_targets: 4,
        catalog: ProjectCatalog::builtin(),
    }
}

pub fn page_with(settings: Settings) -> Page<ManualScheduler> {
    let mut page = Page::new(settings, ManualScheduler::new(), layout())
        .expect("page should build");
    page.start();
    page
}

pub fn page() -> Page<ManualScheduler> {
    page_with(Settings::default())
}
