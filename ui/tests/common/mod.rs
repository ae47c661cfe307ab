use egui_kittest::Harness;
use stockroom_business::table::{ColumnDef, RowId, TableActions, TableConfig, TableRow, TableSchema};
use stockroom_ui::StockroomApp;
use stockroom_ui::pages::Page;
use stockroom_ui::state::State;
use stockroom_ui::widgets::{EntityTableState, TableEvent, entity_table};

const WINDOW: egui::Vec2 = egui::Vec2::new(1600.0, 900.0);

/// Small row type for driving the table widget directly.
#[allow(unused)]
#[derive(Debug, Clone)]
pub struct Part {
    pub id: RowId,
    pub name: &'static str,
    pub qty: Option<i64>,
}

impl TableRow for Part {
    fn row_id(&self) -> RowId {
        self.id
    }
}

#[allow(unused)]
pub fn parts() -> Vec<Part> {
    ["bolt", "washer", "nut", "spring", "hinge", "rivet", "clamp"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Part {
            id,
            name,
            qty: (id % 3 != 0).then_some(id * 10),
        })
        .collect()
}

#[allow(unused)]
pub fn part_schema() -> TableSchema<Part> {
    TableSchema::new(vec![
        ColumnDef::new("name", "Name", |p: &Part| p.name.into()),
        ColumnDef::new("qty", "Quantity", |p: &Part| p.qty.into()),
    ])
    .unwrap_or_else(|err| panic!("{err}"))
}

/// Everything the table widget needs for one frame, plus the raised events.
#[allow(unused)]
pub struct TableFixture {
    pub table: EntityTableState,
    pub schema: TableSchema<Part>,
    pub rows: Vec<Part>,
    pub config: TableConfig,
    pub events: Vec<TableEvent>,
}

#[allow(unused)]
impl TableFixture {
    pub fn new(config: TableConfig) -> Self {
        Self {
            table: EntityTableState::new(),
            schema: part_schema(),
            rows: parts(),
            config,
            events: Vec::new(),
        }
    }
}

#[allow(unused)]
pub fn parts_config() -> TableConfig {
    TableConfig::builder()
        .page_size(std::num::NonZeroUsize::new(5).unwrap())
        .title("Parts")
        .add_label("Add part")
        .actions(TableActions::all())
        .build()
}

#[allow(unused)]
pub fn table_harness<'a>(fixture: TableFixture) -> Harness<'a, TableFixture> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut harness = Harness::builder().with_size(WINDOW).build_ui_state(
        |ui, fixture: &mut TableFixture| {
            if let Some(event) = entity_table(
                ui,
                &mut fixture.table,
                &fixture.schema,
                &fixture.rows,
                &fixture.config,
            ) {
                fixture.events.push(event);
            }
        },
        fixture,
    );
    harness.run();
    harness
}

/// The full app on the demo inventory, opened on `page`.
#[allow(unused)]
pub fn app_harness<'a>(page: Page) -> Harness<'a, StockroomApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = StockroomApp::new(State::test(page));
    let mut harness = Harness::builder().with_size(WINDOW).build_eframe(|_| app);
    harness.run();
    harness
}
