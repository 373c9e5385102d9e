use memtab::{Column, DataType, Database, Value, render};
use tracing_subscriber::EnvFilter;

fn main() -> memtab::Result<()> {
    init_tracing();

    let db = Database::new("scratch");
    db.create_table(
        "people",
        vec![
            Column::new("name", DataType::Text),
            Column::new("age", DataType::Int),
        ],
    )?;

    db.insert("people", [("name", Value::from("A")), ("age", Value::Int(30))])?;
    db.insert("people", [("name", Value::from("B")), ("age", Value::Int(25))])?;
    db.insert("people", [("name", Value::from("C")), ("age", Value::Int(30))])?;

    print!("{}", db.render_rows("people")?);

    let schema = db.schema("people")?;
    for row in db.filter("people", "age", &Value::Int(30))? {
        println!("{}", render::format_row(&schema, &row));
    }

    db.truncate("people")?;
    db.drop_table("people")?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
