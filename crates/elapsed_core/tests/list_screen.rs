use chrono::{TimeZone, Utc};
use elapsed_core::db::open_db_in_memory;
use elapsed_core::{
    DateRecord, DisplayUnit, FormFields, FormScreen, ListScreen, RecordStore, Route,
    SqliteRecordStore,
};

fn record(title: &str, year: i32) -> DateRecord {
    DateRecord::new(title, Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()).unwrap()
}

#[test]
fn activate_caches_records_and_rows_use_current_unit() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    store.append(&record("入籍", 2023)).unwrap();
    store.append(&record("引越し", 2024)).unwrap();

    let mut screen = ListScreen::default();
    screen.activate(&store);
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let rows = screen.rows(&now);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "入籍");
    assert_eq!(rows[0].elapsed.to_string(), "2年 経過");
    assert_eq!(rows[1].elapsed.to_string(), "1年 経過");

    while screen.unit() != DisplayUnit::Days {
        screen.cycle_unit();
    }
    assert_eq!(screen.rows(&now)[0].elapsed.to_string(), "731日 経過");
}

#[test]
fn six_cycles_return_to_years_in_fixed_order() {
    let mut screen = ListScreen::default();
    assert_eq!(screen.unit(), DisplayUnit::Years);

    let visited: Vec<DisplayUnit> = (0..6).map(|_| screen.cycle_unit()).collect();
    assert_eq!(
        visited,
        vec![
            DisplayUnit::Seconds,
            DisplayUnit::Minutes,
            DisplayUnit::Hours,
            DisplayUnit::Days,
            DisplayUnit::Months,
            DisplayUnit::Years,
        ]
    );
}

#[test]
fn new_records_appear_only_after_reactivation() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::try_new(&conn).unwrap();
    let mut list = ListScreen::default();
    list.activate(&store);
    assert_eq!(list.open_form(), Route::Form);

    let mut form = FormScreen::new();
    *form.edit() = FormFields {
        title: "first".to_string(),
        year: "2020".to_string(),
        month: "5".to_string(),
        day: "17".to_string(),
        hour: "8".to_string(),
        minute: "15".to_string(),
        second: "0".to_string(),
    };
    assert_eq!(form.submit(&store, &Utc), Ok(Route::List));

    assert!(list.records().is_empty());
    list.cycle_unit();
    assert!(list.records().is_empty());

    list.activate(&store);
    assert_eq!(list.records().len(), 1);
    assert_eq!(list.records()[0].title, "first");
}
