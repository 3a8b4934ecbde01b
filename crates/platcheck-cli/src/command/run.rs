use crate::command::{EvalArg, print_report};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    #[clap(flatten)]
    eval: EvalArg,
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let mut session = arg.eval.session()?;
    session.run_to_completion();
    print_report(arg.eval.group(), &session.report());
    Ok(())
}
