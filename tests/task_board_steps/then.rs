//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{domain::Task, services::CreateOutcome};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

fn current_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    if world.last_board.is_none() {
        world.last_board = Some(run_async(world.service.list())?);
    }
    Ok(())
}

#[then("the submission is accepted")]
fn submission_accepted(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    match world.last_outcome.as_ref() {
        Some(CreateOutcome::Created(_)) => Ok(()),
        other => Err(eyre::eyre!("expected an accepted submission, got {other:?}")),
    }
}

#[then(r#"the submission is rejected with "{message}" on "{field}""#)]
fn submission_rejected(
    world: &TaskBoardWorld,
    message: String,
    field: String,
) -> Result<(), eyre::Report> {
    let Some(CreateOutcome::Rejected(form)) = world.last_outcome.as_ref() else {
        return Err(eyre::eyre!(
            "expected a rejected submission, got {:?}",
            world.last_outcome
        ));
    };
    let messages = form.errors.messages();
    let field_messages = messages
        .get(field.as_str())
        .ok_or_else(|| eyre::eyre!("no errors reported for {field}: {messages:?}"))?;
    if field_messages != &[message.clone()] {
        return Err(eyre::eyre!(
            "expected [{message}] on {field}, found {field_messages:?}"
        ));
    }
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_stored(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.browser.tasks())?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the to-do list contains "{title}""#)]
fn to_do_contains(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    current_board(world)?;
    let board = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board"))?;
    if !titles(&board.to_do_tasks).contains(&title.as_str()) {
        return Err(eyre::eyre!("{title} is not in the to-do list"));
    }
    Ok(())
}

#[then(r#"the done list contains "{title}""#)]
fn done_contains(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    current_board(world)?;
    let board = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board"))?;
    if !titles(&board.done_tasks).contains(&title.as_str()) {
        return Err(eyre::eyre!("{title} is not in the done list"));
    }
    Ok(())
}

#[then("the to-do list is empty")]
fn to_do_empty(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    current_board(world)?;
    let board = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board"))?;
    if !board.to_do_tasks.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty to-do list, found {:?}",
            titles(&board.to_do_tasks)
        ));
    }
    Ok(())
}

#[then("the done list is empty")]
fn done_empty(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    current_board(world)?;
    let board = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board"))?;
    if !board.done_tasks.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty done list, found {:?}",
            titles(&board.done_tasks)
        ));
    }
    Ok(())
}

fn overdue_flag(world: &TaskBoardWorld, title: &str) -> Result<bool, eyre::Report> {
    let board = world
        .last_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the board has not been listed"))?;
    let task = board
        .to_do_tasks
        .iter()
        .chain(&board.done_tasks)
        .find(|task| task.title().as_str() == title)
        .ok_or_else(|| eyre::eyre!("{title} is not on the board"))?;
    Ok(task.is_overdue(board.today))
}

#[then(r#""{title}" is overdue"#)]
fn task_is_overdue(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    if !overdue_flag(world, &title)? {
        return Err(eyre::eyre!("expected {title} to be overdue"));
    }
    Ok(())
}

#[then(r#""{title}" is not overdue"#)]
fn task_is_not_overdue(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    if overdue_flag(world, &title)? {
        return Err(eyre::eyre!("expected {title} not to be overdue"));
    }
    Ok(())
}
