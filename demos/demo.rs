//! # rowhaus demo
//!
//! Walks through the full mapping cycle against a local PostgreSQL:
//! register a record type, save it, read it back, update it, delete it.
//!
//! Expects DATABASE_URL to point at a reachable database.

use rowhaus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub groupname: String,
    pub dateofbirth: NaiveDate,
}

impl Record for Student {
    fn type_name() -> &'static str {
        "Student"
    }

    fn fields() -> &'static [FieldDescriptor<Self>] {
        record_fields!(Student => [
            #[id] id: Integer,
            name: Text,
            groupname: Text,
            dateofbirth: Date,
        ])
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPool::connect(&database_url).await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS student (
            id INTEGER PRIMARY KEY,
            name VARCHAR NOT NULL,
            groupname VARCHAR NOT NULL,
            dateofbirth DATE NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    let rowhaus = RowHaus::from_pool(pool);
    rowhaus.health_check().await?;

    let students = rowhaus.mapper::<Student>()?;
    println!("Mapper bound to table '{}'", students.table_name());

    let student = Student {
        id: 12,
        name: "Bohdan Petrov".to_string(),
        groupname: "I-32".to_string(),
        dateofbirth: NaiveDate::from_ymd_opt(2000, 12, 12).unwrap(),
    };

    students.delete(SqlValue::Integer(12)).await?;
    let saved = students.save(&student).await?;
    println!("Saved {} row", saved);

    let found = students.find_by_id(SqlValue::Integer(12)).await?;
    println!("Found: {:?}", found);

    let mut moved = student.clone();
    moved.groupname = "I-41".to_string();
    students.update(&moved).await?;
    println!(
        "After update: {:?}",
        students.find_by_id(SqlValue::Integer(12)).await?
    );

    let deleted = students.delete(SqlValue::Integer(12)).await?;
    println!("Deleted {} row", deleted);
    println!(
        "After delete: {:?}",
        students.find_by_id(SqlValue::Integer(12)).await?
    );

    Ok(())
}
