use clap::Parser;
use file_manager::errors::FmResult;
use file_manager::session::Session;

/// Interactive command-line file manager.
#[derive(Parser, Debug)]
#[command(name = "file-manager", about = "Interactive command-line file manager", version)]
struct Args {
    /// Display name used in the greeting and farewell
    #[arg(long)]
    username: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // clap prints usage guidance and exits before the loop starts when
    // --username is missing or malformed
    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> FmResult<()> {
    let mut session = Session::new(args.username)?;

    println!("Welcome to the File Manager, {}!", session.username());
    println!("You are currently in {}", session.cwd().display());

    file_manager::run(&mut session)?;

    println!(
        "Thank you for using File Manager, {}, goodbye!",
        session.username()
    );
    Ok(())
}
