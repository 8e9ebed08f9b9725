//! Write every rendered file, optionally in parallel.
use anyhow::Result;
use rayon::prelude::*;

use super::{Context, Task, TaskResult, TaskStats};
use crate::error::EmitError;
use crate::logging::{Action, Record, Subject};
use crate::resources::{FileResource, Resource, ResourceState};

/// Write every rendered file, overwriting whatever is there.
///
/// Writes are independent: one failure does not stop the others, and the
/// task fails only after every write has been attempted.
#[derive(Debug)]
pub struct WriteFiles;

impl Task for WriteFiles {
    fn name(&self) -> &'static str {
        "Write files"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.files.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resources: Vec<FileResource> = ctx
            .files
            .iter()
            .map(|(relative, file)| FileResource::new(ctx.target(relative), file.content.clone()))
            .collect();
        let total = resources.len();

        let outcomes: Vec<Result<TaskStats>> = if ctx.parallel {
            resources
                .par_iter()
                .map(|resource| write_one(ctx, resource))
                .collect()
        } else {
            resources
                .iter()
                .map(|resource| write_one(ctx, resource))
                .collect()
        };

        let mut stats = TaskStats::new();
        let mut failed = 0;
        for outcome in outcomes {
            match outcome {
                Ok(delta) => stats += delta,
                Err(_) => failed += 1,
            }
        }

        if failed > 0 {
            return Err(EmitError::Batch { failed, total }.into());
        }
        Ok(stats.finish(ctx))
    }
}

const CHANGED: TaskStats = TaskStats {
    changed: 1,
    already_ok: 0,
};
const UNCHANGED: TaskStats = TaskStats {
    changed: 0,
    already_ok: 1,
};

/// Write a single file, logging and recording a failure as soon as it
/// happens.
fn write_one(ctx: &Context, resource: &FileResource) -> Result<TaskStats> {
    match try_write(ctx, resource) {
        Ok((delta, action)) => {
            ctx.log
                .record(Record::new(Subject::File, &resource.path, action));
            Ok(delta)
        }
        Err(e) => {
            ctx.log.error(&format!("{e:#}"));
            ctx.log.record(Record::new(
                Subject::File,
                &resource.path,
                Action::Failed(e.root_cause().to_string()),
            ));
            Err(e)
        }
    }
}

fn try_write(ctx: &Context, resource: &FileResource) -> Result<(TaskStats, Action)> {
    let (verb, delta, action) = match resource.current_state()? {
        ResourceState::Missing => ("create", CHANGED, Action::Created),
        ResourceState::Correct => ("rewrite", UNCHANGED, Action::Unchanged),
        ResourceState::Invalid { reason } if ctx.dry_run => {
            return Err(EmitError::Blocked {
                path: resource.path.clone(),
                reason,
            }
            .into());
        }
        ResourceState::Incorrect { .. } | ResourceState::Invalid { .. } => {
            ("overwrite", CHANGED, Action::Overwritten)
        }
    };

    if ctx.dry_run {
        ctx.log
            .dry_run(&format!("would {verb} {}", resource.description()));
        return Ok((delta, Action::Planned));
    }

    resource.apply()?;
    ctx.log.debug(&format!("{verb} {}", resource.description()));
    Ok((delta, action))
}
