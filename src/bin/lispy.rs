use lispy::{cmdline, interpreter};

fn main() -> std::io::Result<()> {
    pretty_env_logger::init();
    println!("Lispy version 0.1.0");
    println!("Press Ctrl-D to quit\n");
    let interface = cmdline::setup()?;
    cmdline::repl(&interface, interpreter::rep);
    cmdline::save_history(&interface)?;
    Ok(())
}
