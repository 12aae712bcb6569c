#[cfg(test)]
mod tests {
    use dolist::db::db::Db;
    use dolist::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_fresh_database_is_fully_migrated() {
        let db = Db::in_memory().unwrap();
        let manager = MigrationManager::new();

        assert_eq!(get_db_version(&db.conn).unwrap(), manager.latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
        assert!(manager.is_migration_applied(&db.conn, 1).unwrap());

        let slots_table: i32 = db
            .conn
            .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'slots'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(slots_table, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_once(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("migrate.db");
        drop(Db::open(&path).unwrap());

        let mut db = Db::open(&path).unwrap();
        init_with_migrations(&mut db.conn).unwrap();

        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0, 1);
        assert_eq!(history[0].1, "create_slots");
    }
}
