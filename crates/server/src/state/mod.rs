use taskboard_model::{NewTask, Task, TaskUpdate};
use tokio::sync::{mpsc, oneshot};

use crate::state::{error::StoreError, persistence::StatePersistence};

pub mod error;
pub mod persistence;

type Result<T> = std::result::Result<T, StoreError>;
type Responder<T> = oneshot::Sender<Result<T>>;

/// Handle to the task collection. Cloning is cheap; all clones talk to
/// the same actor, which serializes every mutation and so keeps the
/// collection safe under concurrent requests.
#[derive(Clone)]
pub struct Store {
    sender: mpsc::Sender<Command>,
}

impl Store {
    pub fn new<S>(persistence: S) -> Self
    where
        S: StatePersistence + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(32);
        tokio::spawn(command_handler(receiver, persistence));
        Self { sender }
    }

    pub async fn create_task(&self, new_task: NewTask) -> Result<Task> {
        let (sender, receiver) = oneshot::channel();
        let _ = self
            .sender
            .send(Command::CreateTask { new_task, sender })
            .await;
        receiver.await.unwrap()
    }

    pub async fn update_task(&self, id: u64, update: TaskUpdate) -> Result<Task> {
        let (sender, receiver) = oneshot::channel();
        let _ = self
            .sender
            .send(Command::UpdateTask { id, update, sender })
            .await;
        receiver.await.unwrap()
    }

    pub async fn delete_task(&self, id: u64) -> Result<Task> {
        let (sender, receiver) = oneshot::channel();
        let _ = self.sender.send(Command::DeleteTask { id, sender }).await;
        receiver.await.unwrap()
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let (sender, receiver) = oneshot::channel();
        let _ = self.sender.send(Command::ListTasks { sender }).await;
        receiver.await.unwrap()
    }
}

#[derive(Debug)]
enum Command {
    CreateTask {
        new_task: NewTask,
        sender: Responder<Task>,
    },
    UpdateTask {
        id: u64,
        update: TaskUpdate,
        sender: Responder<Task>,
    },
    DeleteTask {
        id: u64,
        sender: Responder<Task>,
    },
    ListTasks {
        sender: Responder<Vec<Task>>,
    },
}

async fn command_handler<S>(mut receiver: mpsc::Receiver<Command>, mut persistence: S)
where
    S: StatePersistence + Send,
{
    // Ids are handed out once and never reused, even after deletion.
    let mut next_id: u64 = 1;

    while let Some(command) = receiver.recv().await {
        match command {
            Command::CreateTask { new_task, sender } => {
                let _ = sender.send(create_task(&mut persistence, &mut next_id, new_task));
            }
            Command::UpdateTask { id, update, sender } => {
                let _ = sender.send(update_task(&mut persistence, id, update));
            }
            Command::DeleteTask { id, sender } => {
                let _ = sender.send(delete_task(&mut persistence, id));
            }
            Command::ListTasks { sender } => {
                let _ = sender.send(list_tasks(&persistence));
            }
        }
    }
}

fn create_task<S: StatePersistence>(
    persistence: &mut S,
    next_id: &mut u64,
    new_task: NewTask,
) -> Result<Task> {
    let title = match new_task.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(StoreError::TitleRequired),
    };
    let task = Task::new(*next_id, title, new_task.description);
    persistence.put(&task_key(task.id), task.clone())?;
    *next_id += 1;
    Ok(task)
}

fn update_task<S: StatePersistence>(
    persistence: &mut S,
    id: u64,
    update: TaskUpdate,
) -> Result<Task> {
    // An update never blanks the title; every stored task keeps one.
    if update.title.as_deref() == Some("") {
        return Err(StoreError::TitleRequired);
    }
    let mut task: Task = persistence
        .get(&task_key(id))?
        .ok_or(StoreError::NotFound(id))?;
    task.apply(&update);
    persistence.put(&task_key(id), task.clone())?;
    Ok(task)
}

fn delete_task<S: StatePersistence>(persistence: &mut S, id: u64) -> Result<Task> {
    persistence
        .delete(&task_key(id))?
        .ok_or(StoreError::NotFound(id))
}

fn list_tasks<S: StatePersistence>(persistence: &S) -> Result<Vec<Task>> {
    let mut tasks: Vec<Task> = persistence.list("task:")?;
    // HashMap iteration order is arbitrary; display order is insertion order.
    tasks.sort_by_key(|task| task.id);
    Ok(tasks)
}

fn task_key(id: u64) -> String {
    format!("task:{id}")
}
