use addressbook::app::Application;
use addressbook::cli::Cli;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    addressbook::init_logger();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    log::debug!("Resolved configuration: {:?}", config);

    let mut app = Application::new(config);
    app.run()
}
