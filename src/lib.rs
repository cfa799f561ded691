pub mod args;
pub mod conformance;
pub mod databases;
pub mod error;
pub mod login;
pub mod render;

/// Connects with the login from `args` and runs the checks, writing the
/// diagnostics to stdout. Returns whether every check passed.
pub fn run(args: &args::Args) -> anyhow::Result<bool> {
    let mut session = args.create_session()?;
    let mut out = std::io::stdout().lock();
    return conformance::run(session.as_mut(), &mut out);
}
