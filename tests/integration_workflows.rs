#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use clap::Parser;
    use dolist::commands::{open_task_list, resolve_task, Cli};
    use dolist::libs::persistence::{KeyValueStore, LoadMode, MemorySlots, TaskArchive};
    use dolist::libs::store::TaskList;
    use dolist::libs::task::Priority;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct IntegrationTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for IntegrationTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            IntegrationTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn run(args: &[&str]) -> anyhow::Result<()> {
        let mut argv = vec!["dolist"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)?.run()
    }

    fn names() -> Vec<String> {
        open_task_list().unwrap().list().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_buy_milk_pay_rent_workflow() {
        let today = Local::now().date_naive();
        let yesterday = today - Duration::days(1);

        let archive = TaskArchive::new(MemorySlots::new(), "tasks", LoadMode::Lenient);
        let mut list = TaskList::open(archive).unwrap();
        assert!(list.is_empty());

        list.add("Buy milk", Priority::Medium, None).unwrap();
        list.add("Pay rent", Priority::High, Some(yesterday)).unwrap();

        assert_eq!(list.len(), 2);
        let rent = list.list()[1].clone();
        assert!(rent.is_overdue(today));

        list.toggle_completed(rent.id).unwrap();
        assert!(!list.list()[1].is_overdue(today));
    }

    #[test_context(IntegrationTestContext)]
    #[test]
    fn test_cli_session(_ctx: &mut IntegrationTestContext) {
        run(&["add", "Buy milk"]).unwrap();
        run(&["add", "Pay rent", "-p", "high", "-d", "2020-01-31"]).unwrap();
        run(&["add", "Call mom", "--priority", "low"]).unwrap();
        assert_eq!(names(), ["Buy milk", "Pay rent", "Call mom"]);

        run(&["mv", "3", "1"]).unwrap();
        assert_eq!(names(), ["Call mom", "Buy milk", "Pay rent"]);

        run(&["done", "3"]).unwrap();
        run(&["edit", "2", "--name", "Buy oat milk", "-d", "2030-05-01"]).unwrap();

        let list = open_task_list().unwrap();
        assert!(list.list()[2].completed);
        assert_eq!(list.list()[1].name, "Buy oat milk");
        assert_eq!(list.list()[1].priority, Priority::Medium);
        assert!(list.list()[1].due_date.is_some());

        let prefix = list.list()[0].id.to_string()[..8].to_string();
        run(&["rm", prefix.as_str(), "--yes"]).unwrap();
        assert_eq!(names(), ["Buy oat milk", "Pay rent"]);

        run(&["list", "--filter", "completed"]).unwrap();
        run(&["clear"]).unwrap();
        assert_eq!(names(), ["Buy oat milk"]);
    }

    #[test_context(IntegrationTestContext)]
    #[test]
    fn test_cli_rejects_bad_input(_ctx: &mut IntegrationTestContext) {
        run(&["add", "Only task"]).unwrap();

        assert!(run(&["add", "   "]).is_err());
        assert!(run(&["add", "Bad date", "-d", "31/01/2020"]).is_err());
        assert!(run(&["mv", "1", "2"]).is_err());
        assert!(run(&["mv", "0", "1"]).is_err());
        assert!(run(&["done", "7"]).is_err());
        assert!(run(&["done", "not-an-id"]).is_err());
        assert!(run(&["edit", "1"]).is_err());

        assert_eq!(names(), ["Only task"]);
    }

    #[test_context(IntegrationTestContext)]
    #[test]
    fn test_resolve_task_by_position_and_prefix(_ctx: &mut IntegrationTestContext) {
        let mut list = open_task_list().unwrap();
        let a = list.add("A", Priority::Low, None).unwrap();
        let b = list.add("B", Priority::Low, None).unwrap();

        assert_eq!(resolve_task(&list, "1").unwrap(), a.id);
        assert_eq!(resolve_task(&list, "2").unwrap(), b.id);
        assert_eq!(resolve_task(&list, &b.id.to_string().to_uppercase()).unwrap(), b.id);
        assert!(resolve_task(&list, "3").is_err());
        assert!(resolve_task(&list, "").is_err());
    }

    #[test]
    fn test_resolve_numeric_id_prefix_past_end_of_list() {
        let blob = r#"[
            {"id":"0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d","name":"First","priority":"low","completed":false},
            {"id":"12345678-2222-4333-8444-555555555555","name":"Digits","priority":"high","completed":false}
        ]"#;
        let mut slots = MemorySlots::new();
        slots.set("tasks", blob).unwrap();
        let list = TaskList::open(TaskArchive::new(slots, "tasks", LoadMode::Strict)).unwrap();
        let digits = list.list()[1].id;

        assert_eq!(resolve_task(&list, "1").unwrap(), list.list()[0].id);
        assert_eq!(resolve_task(&list, "1234").unwrap(), digits);
        assert_eq!(resolve_task(&list, "12345678").unwrap(), digits);

        let err = resolve_task(&list, "99").unwrap_err();
        assert!(err.to_string().contains("99"));
    }
}
