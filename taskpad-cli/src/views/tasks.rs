//! Task list view - the signed-in session

use anyhow::Result;
use dialoguer::{Input, Select};
use taskpad_core::{TaskStore, TaskpadContext};

use super::Flow;
use crate::output;

const ACTIONS: &[&str] = &[
    "Add task",
    "Toggle task",
    "Edit task title",
    "Delete task",
    "Add subtask",
    "Toggle subtask",
    "Edit subtask title",
    "Delete subtask",
    "Log out",
    "Quit",
];

pub fn run(ctx: &mut TaskpadContext) -> Result<Flow> {
    let username = ctx
        .auth
        .current_account()
        .map(|a| a.username.clone())
        .unwrap_or_default();

    println!();
    output::info(&format!("Welcome, {username}"));
    if let Some(tasks) = ctx.auth.tasks() {
        render(tasks);
    }

    let choice = Select::new().items(ACTIONS).default(0).interact()?;

    // "Log out" and "Quit" change the session, everything else mutates
    // the task store.
    match ACTIONS[choice] {
        "Log out" => {
            ctx.auth.logout();
            output::info("Signed out.");
            return Ok(Flow::Continue);
        }
        "Quit" => return Ok(Flow::Quit),
        _ => {}
    }

    let tasks = match ctx.auth.tasks_mut() {
        Some(tasks) => tasks,
        None => return Ok(Flow::Continue),
    };

    match ACTIONS[choice] {
        "Add task" => add_task(tasks)?,
        "Toggle task" => {
            if let Some(index) = prompt_task_index(tasks)? {
                tasks.toggle_task(index)?;
            }
        }
        "Edit task title" => {
            if let Some(index) = prompt_task_index(tasks)? {
                let title: String = Input::new()
                    .with_prompt("New title")
                    .allow_empty(true)
                    .interact_text()?;
                tasks.edit_task_title(index, &title)?;
            }
        }
        "Delete task" => {
            if let Some(index) = prompt_task_index(tasks)? {
                let deleted = tasks.delete_task(index)?;
                output::info(&format!("Deleted '{}'", deleted.title));
            }
        }
        "Add subtask" => add_subtask(tasks)?,
        "Toggle subtask" => {
            if let Some((task, sub)) = prompt_subtask_index(tasks)? {
                tasks.toggle_subtask(task, sub)?;
            }
        }
        "Edit subtask title" => {
            if let Some((task, sub)) = prompt_subtask_index(tasks)? {
                let title: String = Input::new()
                    .with_prompt("New title")
                    .allow_empty(true)
                    .interact_text()?;
                tasks.edit_subtask_title(task, sub, &title)?;
            }
        }
        "Delete subtask" => {
            if let Some((task, sub)) = prompt_subtask_index(tasks)? {
                tasks.delete_subtask(task, sub)?;
            }
        }
        _ => {}
    }

    Ok(Flow::Continue)
}

fn add_task(tasks: &mut TaskStore) -> Result<()> {
    let title: String = Input::new()
        .with_prompt("Task title")
        .allow_empty(true)
        .interact_text()?;
    if !tasks.add_task(&title) {
        output::warning("Empty title, nothing added.");
    }
    Ok(())
}

fn add_subtask(tasks: &mut TaskStore) -> Result<()> {
    let Some(index) = prompt_task_index(tasks)? else {
        return Ok(());
    };
    let title: String = Input::new()
        .with_prompt("Subtask title")
        .allow_empty(true)
        .interact_text()?;
    if !tasks.add_subtask(index, &title)? {
        output::warning("Empty title, nothing added.");
    }
    Ok(())
}

/// Ask for a task index, bounded by the current list length.
/// Returns `None` when the list is empty.
fn prompt_task_index(tasks: &TaskStore) -> Result<Option<usize>> {
    let len = tasks.len();
    if len == 0 {
        output::warning("No tasks yet.");
        return Ok(None);
    }
    let index = Input::<usize>::new()
        .with_prompt(format!("Task # (0-{})", len - 1))
        .validate_with(move |v: &usize| {
            if *v < len {
                Ok(())
            } else {
                Err(format!("enter a number between 0 and {}", len - 1))
            }
        })
        .interact_text()?;
    Ok(Some(index))
}

/// Ask for a task index and then a subtask index within that task.
fn prompt_subtask_index(tasks: &TaskStore) -> Result<Option<(usize, usize)>> {
    let Some(task_index) = prompt_task_index(tasks)? else {
        return Ok(None);
    };
    let len = tasks.tasks()[task_index].subtasks.len();
    if len == 0 {
        output::warning("That task has no subtasks.");
        return Ok(None);
    }
    let sub_index = Input::<usize>::new()
        .with_prompt(format!("Subtask # (0-{})", len - 1))
        .validate_with(move |v: &usize| {
            if *v < len {
                Ok(())
            } else {
                Err(format!("enter a number between 0 and {}", len - 1))
            }
        })
        .interact_text()?;
    Ok(Some((task_index, sub_index)))
}

/// Render the task list with subtasks indented under their parent.
fn render(tasks: &TaskStore) {
    if tasks.is_empty() {
        println!("No tasks yet. Add one to get started.");
        return;
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Done", "Title"]);
    for (i, task) in tasks.tasks().iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            output::done_marker(task.done).to_string(),
            task.title.clone(),
        ]);
        for (j, sub) in task.subtasks.iter().enumerate() {
            table.add_row(vec![
                format!("{i}.{j}"),
                output::done_marker(sub.done).to_string(),
                format!("  {}", sub.title),
            ]);
        }
    }
    println!("{table}");
}
