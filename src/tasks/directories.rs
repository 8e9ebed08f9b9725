//! Ensure the project directory tree exists.
use anyhow::Result;

use super::{Context, Task, TaskResult, TaskStats};
use crate::error::EmitError;
use crate::logging::{Action, Record, Subject};
use crate::resources::{DirectoryResource, Resource, ResourceState};
use crate::templates;

/// Ensure the project directory and its subdirectories exist.
#[derive(Debug)]
pub struct CreateDirectories;

impl Task for CreateDirectories {
    fn name(&self) -> &'static str {
        "Create directories"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut stats = TaskStats::new();

        for relative in templates::directories() {
            let resource = DirectoryResource::new(ctx.target(relative));
            let record = |action| Record::new(Subject::Directory, &resource.path, action);

            match resource.current_state()? {
                ResourceState::Correct => {
                    ctx.log
                        .debug(&format!("ok: {} (already exists)", resource.description()));
                    ctx.log.record(record(Action::Unchanged));
                    stats.already_ok += 1;
                    continue;
                }
                // A dry run must fail where the real run would.
                ResourceState::Invalid { reason } if ctx.dry_run => {
                    ctx.log.record(record(Action::Failed(reason.clone())));
                    return Err(EmitError::Blocked {
                        path: resource.path.clone(),
                        reason,
                    }
                    .into());
                }
                _ if ctx.dry_run => {
                    ctx.log
                        .dry_run(&format!("would create {}", resource.description()));
                    ctx.log.record(record(Action::Planned));
                    stats.changed += 1;
                    continue;
                }
                _ => {}
            }

            if let Err(e) = resource.apply() {
                ctx.log.record(record(Action::Failed(format!("{e:#}"))));
                return Err(e);
            }
            ctx.log.debug(&format!("created {}", resource.description()));
            ctx.log.record(record(Action::Created));
            stats.changed += 1;
        }

        Ok(stats.finish(ctx))
    }
}
