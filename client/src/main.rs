use clap::Parser;
use life::{cli::Args, controller::Controller, logging, terminal::StdTerminal};

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let config = args.resolve_config()?;

    if !config.color {
        colored::control::set_override(false);
    }

    let mut controller = Controller::new(StdTerminal::new(), config);
    controller.welcome()?;

    if let Some(path) = &args.load {
        controller.load(path)?;
    }

    controller.run()
}
