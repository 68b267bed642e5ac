//! Setup orchestration.

pub mod step;
pub mod workflow;

pub use step::{run_step, CommandRunner};
pub use workflow::{RunOptions, Stage, Workflow, WorkflowContext, WorkflowResult};
