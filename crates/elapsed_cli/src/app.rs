//! Line-oriented rendering of the list and form screens.

use chrono::{DateTime, Local, TimeZone};
use elapsed_core::screen::form::{ALERT_TITLE, CANCEL_LABEL, FORM_HEADER, REGISTER_LABEL};
use elapsed_core::screen::list::{LIST_HEADER, NEW_RECORD_LABEL};
use elapsed_core::{DisplayUnit, FormFields, FormScreen, ListScreen, RecordStore, Route};
use std::io::{self, BufRead, Write};

type FieldAccessor = fn(&mut FormFields) -> &mut String;

/// Form inputs in prompt order.
const FORM_INPUTS: [(&str, FieldAccessor); 7] = [
    ("タイトル", |fields| &mut fields.title),
    ("年 (YYYY)", |fields| &mut fields.year),
    ("月 (MM)", |fields| &mut fields.month),
    ("日 (DD)", |fields| &mut fields.day),
    ("時", |fields| &mut fields.hour),
    ("分", |fields| &mut fields.minute),
    ("秒", |fields| &mut fields.second),
];

/// Drives list and form screens until `q` or end of input.
pub fn run_interactive<S, R, W>(
    store: &S,
    unit: DisplayUnit,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: RecordStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut list = ListScreen::new(unit);
    list.activate(store);
    let mut route = Route::List;

    loop {
        match route {
            Route::List => {
                render_list(&list, &Local::now(), output)?;
                writeln!(
                    output,
                    "[u] {}  [n] {NEW_RECORD_LABEL}  [r] 再読込  [q] 終了",
                    list.toggle_label()
                )?;
                let Some(action) = prompt(&mut lines, output, "> ")? else {
                    return Ok(());
                };
                match action.trim() {
                    "u" => {
                        list.cycle_unit();
                    }
                    "n" => route = list.open_form(),
                    "r" => list.activate(store),
                    "q" => return Ok(()),
                    "" => {}
                    other => writeln!(output, "unknown action `{other}`")?,
                }
            }
            Route::Form => {
                let mut form = FormScreen::new();
                let Some(next) = run_form(&mut form, store, &mut lines, output)? else {
                    return Ok(());
                };
                route = next;
                if route == Route::List {
                    list.activate(store);
                }
            }
        }
    }
}

/// Renders the list once in `unit` against the current local time.
pub fn print_list<S, W>(store: &S, unit: DisplayUnit, output: &mut W) -> io::Result<()>
where
    S: RecordStore + ?Sized,
    W: Write,
{
    let mut list = ListScreen::new(unit);
    list.activate(store);
    render_list(&list, &Local::now(), output)
}

fn render_list<Tz: TimeZone, W: Write>(
    list: &ListScreen,
    now: &DateTime<Tz>,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "== {LIST_HEADER} ==")?;
    let rows = list.rows(now);
    if rows.is_empty() {
        writeln!(output, "(登録なし)")?;
    }
    for row in rows {
        writeln!(output, "{}\n    {}", row.title, row.elapsed)?;
    }
    Ok(())
}

/// Returns `None` when input ends while the form is open.
fn run_form<S, I, W>(
    form: &mut FormScreen,
    store: &S,
    lines: &mut I,
    output: &mut W,
) -> io::Result<Option<Route>>
where
    S: RecordStore + ?Sized,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    writeln!(output, "== {FORM_HEADER} ==")?;
    loop {
        // A blank answer keeps the current value.
        for (label, input) in FORM_INPUTS {
            let label = format!("{label} [{}]: ", input(form.edit()));
            let Some(answer) = prompt(lines, output, &label)? else {
                return Ok(None);
            };
            if !answer.trim().is_empty() {
                *input(form.edit()) = answer.trim().to_string();
            }
        }

        let Some(action) = prompt(
            lines,
            output,
            &format!("[s] {REGISTER_LABEL}  [c] {CANCEL_LABEL}: "),
        )?
        else {
            return Ok(None);
        };
        match action.trim() {
            "c" => return Ok(Some(form.cancel())),
            "s" => match form.submit(store, &Local) {
                Ok(route) => return Ok(Some(route)),
                Err(err) => writeln!(output, "{ALERT_TITLE}: {err}")?,
            },
            other => writeln!(output, "unknown action `{other}`")?,
        }
    }
}

fn prompt<I, W>(lines: &mut I, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;
    lines.next().transpose()
}

#[cfg(test)]
mod tests {
    use super::{print_list, run_interactive, FORM_INPUTS};
    use elapsed_core::db::open_db_in_memory;
    use elapsed_core::{DisplayUnit, FormFields, RecordStore, SqliteRecordStore};
    use std::io::Cursor;

    fn run(store: &SqliteRecordStore<'_>, script: &str) -> String {
        let mut output = Vec::new();
        run_interactive(store, DisplayUnit::Years, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn each_form_input_targets_its_own_field() {
        let mut fields = FormFields::default();
        for (index, (_, input)) in FORM_INPUTS.iter().enumerate() {
            *input(&mut fields) = index.to_string();
        }

        assert_eq!(
            fields,
            FormFields {
                title: "0".to_string(),
                year: "1".to_string(),
                month: "2".to_string(),
                day: "3".to_string(),
                hour: "4".to_string(),
                minute: "5".to_string(),
                second: "6".to_string(),
            }
        );
    }

    #[test]
    fn registering_a_record_returns_to_refreshed_list() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteRecordStore::try_new(&conn).unwrap();

        let output = run(&store, "n\n結婚記念日\n2000\n3\n1\n12\n0\n0\ns\nq\n");

        let records = store.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "結婚記念日");
        assert!(output.contains("(登録なし)"));
        assert!(output.contains("結婚記念日\n    "));
        assert!(output.contains("年 経過"));
    }

    #[test]
    fn rejection_keeps_form_open_until_cancel() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteRecordStore::try_new(&conn).unwrap();

        let script = concat!(
            "n\n",
            "\n2023\n2\n30\n12\n0\n0\ns\n",
            "title\n\n\n\n\n\n\ns\n",
            "\n\n\n\n\n\n\nc\n",
            "q\n"
        );
        let output = run(&store, script);

        assert!(output.contains("エラー: タイトルを入力してください。"));
        assert!(output.contains("エラー: 有効な日付を入力してください。"));
        assert!(output.contains("年 (YYYY) [2023]: "));
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn unit_toggle_updates_label() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteRecordStore::try_new(&conn).unwrap();

        let output = run(&store, "u\nq\n");
        assert!(output.contains("[u] 表示切替 (年)"));
        assert!(output.contains("[u] 表示切替 (秒)"));
    }

    #[test]
    fn print_list_renders_header_and_empty_marker() {
        let conn = open_db_in_memory().unwrap();
        let store = SqliteRecordStore::try_new(&conn).unwrap();
        let mut output = Vec::new();

        print_list(&store, DisplayUnit::Days, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("== 登録日時一覧 =="));
        assert!(text.contains("(登録なし)"));
    }
}
