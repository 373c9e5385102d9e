use std::sync::Arc;

use memtab::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    println!("In-Memory Table Store Demo\n");

    // Create DB
    let db = Database::new("demo");

    // Create table "users"
    db.create_table(
        "users",
        vec![
            Column::new("id", DataType::Int),
            Column::new("name", DataType::Text),
            Column::new("age", DataType::Int),
        ],
    )?;
    println!("Created table 'users'");

    // Insert data
    println!("Inserting data...");
    db.insert(
        "users",
        [
            ("id", Value::Int(1)),
            ("name", Value::Text(Arc::from("Alice"))),
            ("age", Value::Int(30)),
        ],
    )?;
    // Bob's age is unknown
    db.insert(
        "users",
        [("id", Value::Int(2)), ("name", Value::Text(Arc::from("Bob")))],
    )?;
    db.insert(
        "users",
        [
            ("id", Value::Int(3)),
            ("name", Value::Text(Arc::from("Charlie"))),
            ("age", Value::Int(30)),
        ],
    )?;
    println!("Inserted 3 rows\n");

    // Read and print data
    println!("Reading data:");
    print!("{}", db.render_rows("users")?);
    println!();

    // Filter
    println!("Users aged 30:");
    let schema = db.schema("users")?;
    for row in db.filter("users", "age", &Value::Int(30))? {
        println!("  {}", render::format_row(&schema, &row));
    }
    println!();

    // Schema violations are reported, not swallowed
    if let Err(err) = db.insert("users", [("email", Value::from("x@y.z"))]) {
        println!("Rejected insert: {err}\n");
    }

    // List tables
    println!("Tables in database '{}':", db.name());
    for table_name in db.table_names() {
        println!("  - {}", table_name);
    }

    db.truncate("users")?;
    println!("\nAfter truncate: {} rows", db.rows("users")?.len());

    Ok(())
}
