#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskMoved { name: String, from: usize, to: usize },
    TasksCleared(usize),
    NoCompletedTasks,
    NoTasks,
    NoTasksMatchFilter,
    TaskNotFoundForRef(String),
    TaskRefAmbiguous(String),
    TaskPositionOutOfRange(usize, usize), // position, len
    NoChangesProvided,
    ConfirmDeleteTask(String),
    TaskSaveFailed(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDatabase,
    PromptSlot,
    PromptLoadMode,
    SlotNameEmpty,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
