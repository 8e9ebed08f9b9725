//! Grant execute permission to the plugin installer.
use anyhow::Result;

use super::{Context, Task, TaskResult, TaskStats};
use crate::logging::{Action, Record, Subject};
use crate::resources::{ExecutableResource, Resource, ResourceState};

/// Grant execute permission to rendered files that need it.
///
/// Must run after [`WriteFiles`](super::files::WriteFiles) has succeeded.
#[derive(Debug)]
pub struct MarkInstallerExecutable;

impl Task for MarkInstallerExecutable {
    fn name(&self) -> &'static str {
        "Mark installer executable"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.files.values().any(|file| file.executable)
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut stats = TaskStats::new();

        for relative in ctx
            .files
            .iter()
            .filter(|(_, file)| file.executable)
            .map(|(relative, _)| relative)
        {
            let resource = ExecutableResource::new(ctx.target(relative), ctx.executor.as_ref());
            let record = |action| Record::new(Subject::Installer, &resource.path, action);

            if ctx.dry_run {
                ctx.log
                    .dry_run(&format!("would run chmod {}", resource.description()));
                ctx.log.record(record(Action::Planned));
                stats.changed += 1;
                continue;
            }

            let applied = resource
                .current_state()
                .and_then(|before| resource.apply().map(|_| before));
            let before = match applied {
                Ok(before) => before,
                Err(e) => {
                    ctx.log
                        .record(record(Action::Failed(e.root_cause().to_string())));
                    return Err(e);
                }
            };
            ctx.log.debug(&format!("chmod {}", resource.description()));
            if before == ResourceState::Correct {
                ctx.log.record(record(Action::Unchanged));
                stats.already_ok += 1;
            } else {
                ctx.log.record(record(Action::MadeExecutable));
                stats.changed += 1;
            }
        }

        Ok(stats.finish(ctx))
    }
}
