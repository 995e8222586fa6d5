//! Then steps for board lifecycle BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then(r#"the "{column}" column holds {count:usize} tasks"#)]
fn column_holds(world: &BoardWorld, column: String, count: usize) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot();
    let tasks = match column.as_str() {
        "To Do" => snapshot.to_do(),
        "In Progress" => snapshot.in_progress(),
        "Completed" => snapshot.completed(),
        other => return Err(eyre::eyre!("unknown column in scenario: {other}")),
    };
    if tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in {column}, found {}",
            tasks.len()
        ));
    }
    Ok(())
}

#[then(r#"every Completed task is titled "{title}""#)]
fn completed_all_titled(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let snapshot = world.board.snapshot();
    for task in snapshot.completed() {
        if task.title().as_str() != title {
            return Err(eyre::eyre!(
                "unexpected completed task {:?}, expected only {title:?}",
                task.title().as_str()
            ));
        }
    }
    Ok(())
}

#[then("the draft is back to its baseline")]
fn draft_back_to_baseline(world: &BoardWorld) -> Result<(), eyre::Report> {
    let draft = world.board.draft();
    let config = world.board.config();
    if !draft.title().is_empty() {
        return Err(eyre::eyre!("draft title survived submission: {:?}", draft.title()));
    }
    if !draft.description().is_empty() {
        return Err(eyre::eyre!("draft description survived submission"));
    }
    if draft.persona() != config.default_persona {
        return Err(eyre::eyre!(
            "expected baseline persona {:?}, found {:?}",
            config.default_persona,
            draft.persona()
        ));
    }
    if draft.group() != config.initial_group {
        return Err(eyre::eyre!(
            "expected baseline stage group {}, found {}",
            config.initial_group,
            draft.group()
        ));
    }
    Ok(())
}
