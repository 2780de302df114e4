use diesel::RunQueryDsl;

mod common;

#[test]
fn fresh_database_accepts_connections_and_queries() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();

    let mut conn = pool.get().expect("pool should hand out a connection");
    diesel::sql_query("SELECT 1")
        .execute(&mut conn)
        .expect("migrated database should answer queries");
}
