#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dolist::libs::export::{ExportFormat, Exporter};
    use dolist::libs::store::TaskList;
    use dolist::libs::task::Priority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        list: TaskList,
        today: NaiveDate,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
            let mut list = TaskList::new();
            list.add("Buy milk", Priority::Medium, None).unwrap();
            list.add("Pay rent", Priority::High, NaiveDate::from_ymd_opt(2024, 3, 1)).unwrap();
            list.add("Plan trip, maybe", Priority::Low, NaiveDate::from_ymd_opt(2024, 5, 1)).unwrap();
            list.reorder(1, 0).unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                list,
                today,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        let written = Exporter::new(ExportFormat::Csv, Some(path.clone())).export(ctx.list.list(), ctx.today).unwrap();
        assert_eq!(written, path);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), ["#", "ID", "Name", "Priority", "Completed", "Due date", "Overdue"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][2], "Pay rent");
        assert_eq!(&rows[0][3], "high");
        assert_eq!(&rows[0][6], "yes");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[2][2], "Plan trip, maybe");
        assert_eq!(&rows[2][6], "no");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(ctx.list.list(), ctx.today).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["position"], 1);
        assert_eq!(rows[0]["name"], "Pay rent");
        assert_eq!(rows[0]["overdue"], true);
        assert_eq!(rows[0]["due_date"], "2024-03-01");
        assert!(rows[1]["due_date"].is_null());
    }

    #[test]
    fn test_default_file_name_uses_format_extension() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("dolist_export_"));
        assert!(name.ends_with(".json"));
    }
}
